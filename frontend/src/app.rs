use dioxus::prelude::*;

use crate::component::TopBar;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "HPCL Lead Intelligence" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: "min-h-screen bg-gray-50",
            TopBar {}
        }
    }
}
