//! Experience Circuit
//!
//! Timeline of positions drawn as a circuit board. Exactly one card can
//! be hovered at a time; the hovered card opens its details and lights
//! the connectors on both sides of it.

use codex_core::content::{EXPERIENCES, RESEARCH_UPTIME};
use codex_core::HoverTracker;
use codex_ui::{BadgeTone, StatusBadge};
use dioxus::prelude::*;

#[component]
pub fn ExperienceCircuit() -> Element {
    let mut hover = use_signal(HoverTracker::new);
    let last = EXPERIENCES.len() - 1;

    rsx! {
        section { class: "experience", id: "experience",
            div { class: "section-heading",
                h2 { "Experience Circuit" }
                span { class: "uptime", "{RESEARCH_UPTIME}" }
            }

            div { class: "circuit",
                for (index, entry) in EXPERIENCES.iter().enumerate() {
                    {
                        let tracker = *hover.read();
                        let card_class = if tracker.is_active(index) {
                            "circuit-card hovered"
                        } else {
                            "circuit-card"
                        };
                        let connector_class = if tracker.connector_lit(index) {
                            "circuit-connector lit"
                        } else {
                            "circuit-connector"
                        };
                        let details_class = if tracker.is_active(index) {
                            "circuit-details open"
                        } else {
                            "circuit-details"
                        };

                        rsx! {
                            div { key: "{index}", class: "circuit-node",
                                div {
                                    class: card_class,
                                    onmouseenter: move |_| hover.write().enter(index),
                                    onmouseleave: move |_| hover.write().leave(index),

                                    div { class: "circuit-card-top",
                                        span { class: "circuit-date", "{entry.date}" }
                                        StatusBadge {
                                            label: entry.status.label().to_string(),
                                            tone: BadgeTone::from(entry.status),
                                        }
                                    }
                                    h3 { "{entry.title}" }
                                    h4 { "{entry.role}" }
                                    span { class: "circuit-subtitle", "{entry.subtitle}" }
                                    p { "{entry.description}" }

                                    ul { class: details_class,
                                        for detail in entry.details.iter() {
                                            li { key: "{detail}", "{detail}" }
                                        }
                                    }
                                }
                                if index < last {
                                    div { class: connector_class }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
