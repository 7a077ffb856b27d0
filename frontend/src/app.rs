use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const GLOBAL_CSS: &str = "
    * { box-sizing: border-box; }
    html, body, #main { height: 100%; margin: 0; }
    body { font-family: Roboto, sans-serif; background: #F5F6F8; color: #111827; }
    a { text-decoration: none; color: inherit; }
    button { font-family: inherit; }
    ul { list-style: none; margin: 0; padding: 0; }
";

#[component]
pub fn App() -> Element {
    rsx! {
        // TODO: replace google fonts with local fonts
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Style { {GLOBAL_CSS} }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
