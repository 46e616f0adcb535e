//! Navigation Bar Component
//!
//! Fixed top bar with brand, section links, and a mobile menu toggle.

use codex_core::content::{NavTarget, NAV_ITEMS};
use codex_ui::MenuToggle;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_site_config, use_threat_mode};

/// Where each nav entry leads.
pub fn nav_route(target: NavTarget) -> Route {
    match target {
        NavTarget::About => Route::About {},
        NavTarget::Research | NavTarget::Projects => Route::Research {},
        NavTarget::Connect => Route::Connect {},
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_site_config();
    let threat = use_threat_mode();
    let mut menu_open = use_signal(|| false);

    let dot_class = if threat.is_active() {
        "brand-dot alert"
    } else {
        "brand-dot"
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    span { class: dot_class }
                    span { class: "brand-name", "{config.owner}" }
                }

                div { class: "navbar-links",
                    for item in NAV_ITEMS.iter() {
                        Link {
                            key: "{item.label}",
                            to: nav_route(item.target),
                            class: "navbar-link",
                            "{item.label}"
                        }
                    }
                }

                MenuToggle {
                    open: menu_open(),
                    ontoggle: move |_| menu_open.set(!menu_open()),
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for item in NAV_ITEMS.iter() {
                        Link {
                            key: "{item.label}",
                            to: nav_route(item.target),
                            class: "mobile-menu-item",
                            onclick: move |_| menu_open.set(false),
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
