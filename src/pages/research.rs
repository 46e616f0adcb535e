//! Research page - project write-ups with a sticky index.

use codex_core::content::PROJECTS;
use dioxus::prelude::*;

use crate::components::{Navbar, ProjectIndex, ProjectSection, ScrollTopButton};

#[component]
pub fn Research() -> Element {
    rsx! {
        Navbar {}
        main { class: "research",
            header { class: "research-header",
                span { class: "identity-eyebrow", "// RESEARCH LOG" }
                h1 { class: "page-title", "Research" }
            }
            div { class: "research-layout",
                aside { class: "research-sidebar",
                    ProjectIndex {}
                }
                div { class: "research-content",
                    for index in 0..PROJECTS.len() {
                        ProjectSection { key: "{index}", index }
                    }
                }
            }
        }
        ScrollTopButton {}
    }
}
