//! Card for a single wiki item in the grid.

use dioxus::prelude::*;

use common::rarity::Rarity;

use crate::components::wiki_components::rarity_badge::RarityBadge;

#[component]
pub fn ItemCard(
    name: String,
    icon: String,
    subtitle: String,
    rarity: ReadSignal<Option<Rarity>>,
) -> Element {
    let rarity_badge = match rarity.read().clone() {
        Some(rarity) => rsx! { RarityBadge { rarity } },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "x-wiki-item-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 14px;
                padding: 14px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                min-height: 180px;
            ",

            if icon.is_empty() {
                div {
                    style: "
                        width: 100%;
                        height: 90px;
                        border-radius: 10px;
                        background: #ECEEF2;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #9CA3AF;
                        font-size: 13px;
                    ",
                    "no image"
                }
            } else {
                img {
                    src: "{icon}",
                    alt: "{name}",
                    loading: "lazy",
                    style: "width: 100%; height: 90px; object-fit: contain; border-radius: 10px; background: #ECEEF2;",
                }
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                div {
                    style: "
                        font-size: 17px;
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        min-width: 0;
                        flex-grow: 1;
                    ",
                    "{name}"
                }
                {rarity_badge}
            }

            if !subtitle.is_empty() {
                div {
                    style: "
                        font-size: 14px;
                        color: #4B5770;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                    ",
                    "{subtitle}"
                }
            }
        }
    }
}
