//! Connect page - placeholder while the contact hub is built.

use codex_ui::{BadgeTone, StatusBadge};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Navbar;

#[component]
pub fn Connect() -> Element {
    rsx! {
        Navbar {}
        main { class: "connect",
            div { class: "connect-panel",
                StatusBadge { label: "UNDER DEVELOPMENT".to_string(), tone: BadgeTone::Alert }
                h1 { class: "page-title", "Connect" }
                p { "This channel is still being wired up. Use the form on the About page in the meantime." }
                Link { to: Route::About {}, class: "btn-glow", "Back to the Lab" }
            }
        }
    }
}
