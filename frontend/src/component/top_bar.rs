use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBell, FaCalendar, FaMagnifyingGlass},
    Icon,
};

const REGION_LABEL: &str = "North Region (NR)";

/// Top navigation bar. Purely presentational: the bell and calendar icons
/// carry no handlers.
#[component]
pub fn TopBar() -> Element {
    rsx!(header {
        class: "h-16 bg-white border-b flex items-center justify-between px-4 sm:px-6",
        div {
            class: "flex items-center bg-gray-100 rounded-lg px-3 py-2 gap-2 w-full max-w-[420px]",
            Icon {
                class: "text-gray-400",
                width: 20,
                height: 20,
                icon: FaMagnifyingGlass
            }
            // Full input from the sm breakpoint up
            input {
                class: "bg-transparent outline-none w-full text-sm hidden sm:block",
                r#type: "text",
                placeholder: "Search companies, tenders, or products...",
            }
            span {
                class: "text-sm text-gray-400 sm:hidden",
                "Search…"
            }
        }
        div {
            class: "flex items-center gap-3 sm:gap-6 ml-4",
            Icon {
                class: "text-gray-500 cursor-pointer",
                width: 20,
                height: 20,
                icon: FaBell
            }
            Icon {
                class: "text-gray-500 cursor-pointer",
                width: 20,
                height: 20,
                icon: FaCalendar
            }
            span {
                class: "text-sm text-gray-600 hidden md:block",
                {REGION_LABEL}
            }
            a {
                href: "/login",
                class: "bg-[#0b2a4a] text-white px-3 sm:px-4 py-2 rounded-md text-xs sm:text-sm whitespace-nowrap",
                "Login"
                span {
                    class: "hidden sm:inline",
                    " / Register"
                }
            }
        }
    })
}
