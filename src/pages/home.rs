//! Home page - the digital laboratory.

use codex_ui::Button;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{HeroSection, Navbar};
use crate::context::use_site_config;

#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let navigator = use_navigator();

    rsx! {
        Navbar {}
        main { class: "home",
            header { class: "home-header",
                h1 { class: "page-title", "The Identity Codex" }
                p { class: "tagline", "{config.tagline}" }
            }
            HeroSection {}
            div { class: "home-actions",
                Button {
                    onclick: move |_| {
                        navigator.push(Route::About {});
                    },
                    "Enter the Lab"
                }
            }
        }
    }
}
