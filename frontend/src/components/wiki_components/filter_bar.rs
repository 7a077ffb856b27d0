//! Search input and filter button row above a wiki items grid.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;

/// The canonical filter-bar contract: the bar gets the live search text and
/// the count of active multi-select filters; the filter values themselves
/// stay with the page and its sheet.
#[component]
pub fn WikiFiltersBar(
    category_name: String,
    search_value: ReadSignal<String>,
    on_search_change: Callback<String>,
    on_search_clear: Callback<()>,
    active_filters_count: ReadSignal<usize>,
    on_open_filters: Callback<()>,
) -> Element {
    let has_active_filters = use_memo(move || *active_filters_count.read() > 0);
    let filter_border = use_memo(move || {
        if has_active_filters() {
            "rgba(0,0,255,0.9)"
        } else {
            "rgba(0,0,0,0.5)"
        }
    });
    let placeholder = format!("Search {}...", category_name.to_lowercase());

    rsx! {
        div {
            id: "x-wiki-filter-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
            ",

            div {
                id: "x-wiki-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 42px;
                    width: 340px;
                    color: #111827;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                        font-weight: 400;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{search_value}",
                    oninput: move |event| {
                        on_search_change(event.value());
                    },
                }
                if !search_value.read().is_empty() {
                    button {
                        style: "
                            border: none;
                            background: none;
                            cursor: pointer;
                            color: #6B7280;
                            font-size: 18px;
                            line-height: 18px;
                        ",
                        title: "Clear search",
                        onclick: move |_| {
                            on_search_clear(());
                        },
                        "\u{00d7}"
                    }
                }
            }

            button {
                id: "x-wiki-filter-button",
                onclick: move |_| {
                    on_open_filters(());
                },
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    flex-direction:row;
                    border: 2px solid {filter_border()};
                    border-radius: 1000px;
                    background-color: white;
                    box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                    position: relative;
                    height: 28px;
                    padding: 20px 12px;
                    font-size: 15px;
                    line-height: 24px;
                    font-weight: 400;
                    text-wrap: nowrap;
                    flex-shrink: 0;
                ",
                "Filters"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
                if has_active_filters() {
                    span {
                        style: "
                            position: absolute;
                            top: -6px;
                            right: -6px;
                            min-width: 20px;
                            height: 20px;
                            border-radius: 10px;
                            background: #23A340;
                            color: white;
                            font-size: 13px;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 0 4px;
                        ",
                        "{active_filters_count}"
                    }
                }
            }
        }
    }
}
