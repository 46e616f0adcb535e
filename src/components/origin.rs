//! Origin Story
//!
//! Directives, the JARVIS / ULTRON cards that drive threat mode, and the
//! kill panel that appears while ULTRON is active.

use codex_core::content::{DIRECTIVES, JARVIS_LINKS, TRANSMISSION, ULTRON_LINKS};
use codex_core::OriginCards;
use codex_ui::{BadgeTone, Button, ButtonVariant, StatusBadge};
use dioxus::prelude::*;

use crate::components::{DecryptText, TypewriterText};
use crate::context::use_threat_mode;

#[component]
pub fn OriginSection() -> Element {
    let mut threat = use_threat_mode();
    let mut cards = use_signal(OriginCards::new);

    let active = threat.is_active();
    let jarvis_open = cards.read().jarvis_unlocked;
    let ultron_open = cards.read().ultron_unlocked;

    rsx! {
        section { class: "origin", id: "origin",
            div { class: "section-heading",
                h2 { "Origin Story" }
                StatusBadge {
                    label: threat.status_line().to_string(),
                    tone: if active { BadgeTone::Alert } else { BadgeTone::Live },
                }
            }

            div { class: "directives",
                for directive in DIRECTIVES.iter() {
                    div { key: "{directive.heading}", class: "directive",
                        h3 { "{directive.heading}" }
                        p { "{directive.body}" }
                    }
                }
            }

            div { class: "origin-cards",
                OriginCard {
                    name: "J.A.R.V.I.S",
                    tagline: "Defensive intelligence",
                    variant: "jarvis",
                    unlocked: jarvis_open,
                    links: JARVIS_LINKS.to_vec(),
                    onclick: move |_| {
                        let next = cards.write().click_jarvis();
                        threat.set(next);
                    },
                }
                OriginCard {
                    name: "ULTRON",
                    tagline: "Adversarial intelligence",
                    variant: "ultron",
                    unlocked: ultron_open,
                    links: ULTRON_LINKS.to_vec(),
                    onclick: move |_| {
                        let next = cards.write().click_ultron();
                        threat.set(next);
                    },
                }
            }

            if active {
                div { class: "kill-panel",
                    div { class: "transmission",
                        span { class: "transmission-source", "JARVIS // INCOMING" }
                        p {
                            TypewriterText { text: TRANSMISSION.to_string(), trigger: active }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            let next = cards.write().kill_ultron();
                            threat.set(next);
                            tracing::info!("ULTRON terminated");
                        },
                        "KILL ULTRON"
                    }
                }
            }
        }
    }
}

#[component]
fn OriginCard(
    name: &'static str,
    tagline: &'static str,
    variant: &'static str,
    unlocked: bool,
    links: Vec<&'static str>,
    onclick: EventHandler<()>,
) -> Element {
    let state = if unlocked { "unlocked" } else { "locked" };

    rsx! {
        div {
            class: "origin-card {variant} {state}",
            role: "button",
            tabindex: "0",
            onclick: move |_| onclick.call(()),
            div { class: "origin-card-header",
                h3 { "{name}" }
                span { class: "origin-card-tagline", "{tagline}" }
                span { class: "lock-glyph", if unlocked { "OPEN" } else { "LOCKED" } }
            }
            ul { class: "origin-links",
                for link in links.iter() {
                    li { key: "{link}",
                        DecryptText { text: link.to_string(), trigger: unlocked }
                    }
                }
            }
        }
    }
}
