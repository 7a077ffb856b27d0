//! Responsive grid container for wiki item cards.

use dioxus::prelude::*;

/// The grid dims while a fetch for the next key is pending; the previous
/// cards stay visible underneath (stale-but-shown).
#[component]
pub fn WikiItemsGrid(is_loading: ReadSignal<bool>, is_empty: ReadSignal<bool>, children: Element) -> Element {
    let opacity = use_memo(move || if *is_loading.read() { "0.45" } else { "1" });

    rsx! {
        div {
            id: "x-wiki-items-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 16px;
                opacity: {opacity()};
                transition: opacity 0.15s ease-in-out;
            ",
            {children}
        }
        if is_empty() && !is_loading() {
            div {
                style: "
                    color: #4B5770;
                    font-size: 18px;
                    padding: 40px;
                    text-align: center;
                ",
                "Nothing matches the current filters."
            }
        }
    }
}
