//! About page - identity, origin story, experience, and trophies.
//!
//! Mounting the page starts the preloader; scrolling stays locked until
//! it hides. Leaving early drops the pending timer with the page.

use codex_core::content::{OWNER_AFFILIATION, OWNER_ROLE};
use codex_core::{run_splash, SplashGate};
use dioxus::prelude::*;

use crate::components::{
    ExperienceCircuit, Navbar, OriginSection, Preloader, ScrollTopButton, SiteFooter, TrophyCase,
};
use crate::context::{use_site_config, use_threat_mode};

#[component]
pub fn About() -> Element {
    let config = use_site_config();
    let threat = use_threat_mode();

    let splash_enabled = config.splash_enabled();
    let splash_duration = config.splash_duration();
    let mut splash = use_signal(move || {
        if splash_enabled {
            SplashGate::new()
        } else {
            SplashGate::skipped()
        }
    });

    use_effect(move || {
        let gate = *splash.peek();
        spawn(async move {
            let gate = run_splash(splash_duration, gate, || {
                tracing::info!("Lab sequence complete");
            })
            .await;
            splash.set(gate);
        });
    });

    let showing = splash.read().is_showing();
    let palette = threat.palette();
    let page_class = if showing {
        "about-page scroll-locked"
    } else {
        "about-page"
    };

    rsx! {
        if showing {
            Preloader { duration_ms: splash_duration.as_millis() as u64 }
        }

        div { class: page_class,
            div { class: "orb-field", "aria-hidden": "true",
                for (index, color) in palette.orbs.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "orb orb-{index}",
                        style: "background: {color};",
                    }
                }
            }

            Navbar {}

            main { class: "about",
                IdentityCard {}
                OriginSection {}
                ExperienceCircuit {}
                TrophyCase {}
            }

            SiteFooter {}
            ScrollTopButton {}
        }
    }
}

#[component]
fn IdentityCard() -> Element {
    let config = use_site_config();

    rsx! {
        section { class: "identity-card", id: "about",
            div { class: "identity-photo",
                img { src: "/Images/kathan.jpeg", alt: "{config.owner}" }
                span { class: "identity-scanline" }
            }
            div { class: "identity-text",
                span { class: "identity-eyebrow", "// SUBJECT PROFILE" }
                h1 { "{config.owner}" }
                h2 { "{OWNER_ROLE}" }
                p { "{OWNER_AFFILIATION}" }
            }
        }
    }
}
