//! Colored badge for an item's rarity tier.

use dioxus::prelude::*;

use common::rarity::Rarity;

/// Badge color by rarity level; unknown tiers fall back to the common
/// gray so new upstream tiers never break rendering.
fn rarity_color(level: u32) -> &'static str {
    match level {
        0 | 1 => "#6B7280",
        2 => "#16A34A",
        3 => "#2563EB",
        4 => "#7C3AED",
        5 => "#D97706",
        6 => "#DC2626",
        _ => "#0F766E",
    }
}

#[component]
pub fn RarityBadge(rarity: Rarity) -> Element {
    let color = rarity_color(rarity.level);
    rsx! {
        span {
            style: "
                display: inline-flex;
                align-items: center;
                padding: 2px 10px;
                border-radius: 9999px;
                background: {color};
                color: white;
                font-size: 13px;
                font-weight: 500;
                white-space: nowrap;
            ",
            "{rarity.name}"
        }
    }
}
