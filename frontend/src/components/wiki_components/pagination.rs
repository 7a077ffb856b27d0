//! Windowed pagination strip below the items grid.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};

use common::list_query::{PageEntry, pagination_window};

#[component]
pub fn Pagination(
    current_page: ReadSignal<u32>,
    total_pages: ReadSignal<u32>,
    on_page_change: Callback<u32>,
) -> Element {
    let entries = use_memo(move || pagination_window(*current_page.read(), *total_pages.read()));
    let can_go_previous = use_memo(move || *current_page.read() > 1);
    let can_go_next = use_memo(move || *current_page.read() < *total_pages.read());

    let entry_nodes = entries
        .read()
        .iter()
        .copied()
        .enumerate()
        .map(|(index, entry)| match entry {
            PageEntry::Ellipsis => rsx! {
                span {
                    key: "ellipsis-{index}",
                    style: "padding: 0 6px; color: #6B7280;",
                    "..."
                }
            },
            PageEntry::Page(page) => rsx! {
                PageNumberButton {
                    key: "page-{page}",
                    page,
                    is_current: page == *current_page.read(),
                    on_page_change,
                }
            },
        })
        .collect::<Vec<_>>();

    rsx! {
        nav {
            id: "x-wiki-pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 10px;
            ",

            PageNavigationButton {
                icon_direction: PageDirection::Previous,
                disabled: !can_go_previous(),
                onclick: move |_| {
                    let page = *current_page.read();
                    if page > 1 {
                        on_page_change(page - 1);
                    }
                },
            }

            {entry_nodes.into_iter()}

            PageNavigationButton {
                icon_direction: PageDirection::Next,
                disabled: !can_go_next(),
                onclick: move |_| {
                    let page = *current_page.read();
                    if page < *total_pages.read() {
                        on_page_change(page + 1);
                    }
                },
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageDirection {
    Previous,
    Next,
}

#[component]
fn PageNavigationButton(
    icon_direction: PageDirection,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    let label = match icon_direction {
        PageDirection::Previous => "Previous Page",
        PageDirection::Next => "Next Page",
    };

    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            if icon_direction == PageDirection::Previous {
                Icon { icon: MdArrowBack, style: "width: 22px; height: 22px; color: {btn_color};" }
            } else {
                Icon { icon: MdArrowForward, style: "width: 22px; height: 22px; color: {btn_color};" }
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u32, is_current: bool, on_page_change: Callback<u32>) -> Element {
    let background = if is_current { "#1C212D" } else { "white" };
    let color = if is_current { "white" } else { "#111827" };

    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
                background: {background};
                color: {color};
                font-size: 15px;
                cursor: pointer;
                padding: 0 8px;
            ",
            onclick: move |_| {
                on_page_change(page);
            },
            "{page}"
        }
    }
}

/// Smooth scroll back to the top after a page change. No-op outside the
/// browser.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
