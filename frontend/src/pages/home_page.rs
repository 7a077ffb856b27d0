use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::go_icons::GoDatabase;
use dioxus_free_icons::icons::md_navigation_icons::MdApps;

use common::list_query::{EggListQuery, PetListQuery};
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Garden Wiki - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                WikiCategoryCard {
                    title: "Pets".to_string(),
                    description: "Every pet in the game with rarity, passives and sell prices. Filter by rarity or passive state and search by name.".to_string(),
                    route: Route::pets_page_from_query(PetListQuery::default()),
                    gradient: "linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%)".to_string(),
                    icon_kind: CategoryIcon::Pets,
                }
                WikiCategoryCard {
                    title: "Eggs".to_string(),
                    description: "Egg drop tables, hatch times and contained item types, straight from the game data and updated on every sync.".to_string(),
                    route: Route::eggs_page_from_query(EggListQuery::default()),
                    gradient: "linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%)".to_string(),
                    icon_kind: CategoryIcon::Eggs,
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#23A340;", "Garden Wiki!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Browse the full item database - pets, eggs, rarities and passives - with search and filters you can bookmark and share."
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CategoryIcon {
    Pets,
    Eggs,
}

#[component]
fn WikiCategoryCard(
    title: String,
    description: String,
    route: Route,
    gradient: String,
    icon_kind: CategoryIcon,
) -> Element {
    rsx! {
        Link {
            to: route,
            div {
                class: "x-card-wiki-category",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 520px;
                    min-height: 220px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: {gradient};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                    cursor: pointer;
                ",

                div {
                    style: "display:flex; align-items:center; gap: 12px;",
                    if icon_kind == CategoryIcon::Pets {
                        Icon { icon: MdApps, style: "width: 30px; height: 30px; color: white;" }
                    } else {
                        Icon { icon: GoDatabase, style: "width: 30px; height: 30px; color: white;" }
                    }
                    div {
                        style: "font-size: 30px; font-weight: 500;",
                        "{title}"
                    }
                }

                div {
                    style: "
                        font-size: 20px;
                        font-weight: 500;
                        line-height: 1.5;
                        color: rgba(255,255,255,0.92);
                    ",
                    "{description}"
                }

                div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%;" }

                div {
                    style: "font-size: 16px; color: rgba(255,255,255,0.9);",
                    "*Filters and search are part of the page link - share the URL to share the view."
                }
            }
        }
    }
}
