//! Overlay sheet holding the multi-select filter groups.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

/// Backdrop plus right-hand panel. Clicking the backdrop or the Done button
/// closes the sheet; Clear all empties every multi-select at once.
#[component]
pub fn FiltersSheet(
    is_open: ReadSignal<bool>,
    on_close: Callback<()>,
    on_clear_all: Callback<()>,
    children: Element,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                z-index: 999;
                background-color: rgba(0,0,0,0.25);
                width: 100%;
                height: 100%;
            ",
            onclick: move |_| {
                on_close(());
            },
        }
        div {
            id: "x-wiki-filters-sheet",
            style: "
                position: fixed;
                top: 0px;
                right: 0px;
                height: 100%;
                width: 340px;
                max-width: 90vw;
                background: white;
                border-left: 1px solid rgba(0,0,0,0.2);
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.15);
                z-index: 1000;
                padding: 18px;
                display: flex;
                flex-direction: column;
                gap: 14px;
                overflow-y: auto;
            ",

            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 {
                    style: "font-size: 22px; font-weight: 500; margin: 0;",
                    "Filters"
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #4B5770;
                        font-size: 15px;
                        text-decoration: underline;
                    ",
                    onclick: move |_| {
                        on_clear_all(());
                    },
                    "Clear all"
                }
            }

            {children}

            div { style: "flex-grow: 1;" }
            button {
                style: "
                    height: 40px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                    background: #1C212D;
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    on_close(());
                },
                "Done"
            }
        }
    }
}

/// One selectable option row inside a filter group.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
}

impl FilterOption {
    pub fn from_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: key.to_string(),
        }
    }
}

/// A titled checkbox list over one multi-select field. Toggling a row adds
/// or removes its key and reports the whole selection, which feeds an
/// `update_field` on the page.
#[component]
pub fn FilterCheckboxGroup(
    title: String,
    options: ReadSignal<Vec<FilterOption>>,
    selected: ReadSignal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px;",
            h3 {
                style: "font-size: 16px; font-weight: 500; color: #4B5770; margin: 8px 0 4px 0;",
                "{title}"
            }
            ul {
                for option in options() {
                    li {
                        key: "{option.key}",
                        FilterCheckboxRow {
                            option: option.clone(),
                            selected,
                            on_change,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckboxRow(
    option: FilterOption,
    selected: ReadSignal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> Element {
    let option_key = option.key.clone();
    let is_checked = use_memo(move || selected.read().contains(&option_key));
    let option_key = option.key.clone();

    rsx! {
        div {
            class: "x-filter-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                let mut next = selected.read().clone();
                if is_checked() {
                    next.retain(|key| key != &option_key);
                } else {
                    next.push(option_key.clone());
                }
                on_change(next);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 17px;
                    line-height: 24px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{option.label}"
            }
        }
    }
}
