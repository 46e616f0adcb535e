//! Site Footer
//!
//! Contact form, social links, and copyright line. The form submits
//! natively to the configured endpoint; an address that fails
//! validation blocks the submission and shows the error inline.

use chrono::Datelike;
use codex_core::content::{OWNER_AFFILIATION, OWNER_ROLE, SOCIAL_LINKS};
use codex_core::subscribe::EMAIL_FIELD;
use codex_core::{validate_email, SubscribeForm};
use codex_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn SiteFooter() -> Element {
    let config = use_site_config();
    let form = SubscribeForm::new(config.form_endpoint.clone());
    let year = chrono::Local::now().year();

    let mut email = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let on_submit = move |evt: FormEvent| match validate_email(&email()) {
        Ok(address) => {
            tracing::info!(%address, "Submitting contact form");
            error.set(None);
        }
        Err(e) => {
            evt.prevent_default();
            tracing::debug!("Contact form blocked: {}", e);
            error.set(Some(e.to_string()));
        }
    };

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-identity",
                    h3 { "{config.owner}" }
                    p { class: "footer-role", "{OWNER_ROLE}" }
                    p { class: "footer-affiliation", "{OWNER_AFFILIATION}" }
                }

                form {
                    class: "subscribe-form",
                    action: "{form.endpoint}",
                    method: SubscribeForm::METHOD,
                    onsubmit: on_submit,
                    span { class: "subscribe-label", "Open a channel" }
                    div { class: "subscribe-row",
                        Input {
                            value: email(),
                            oninput: move |value: String| {
                                email.set(value);
                                if error.peek().is_some() {
                                    error.set(None);
                                }
                            },
                            name: EMAIL_FIELD.to_string(),
                            placeholder: "you@domain.com".to_string(),
                            input_type: "email".to_string(),
                            required: true,
                            error: error(),
                        }
                        Button {
                            variant: ButtonVariant::Glow,
                            button_type: "submit".to_string(),
                            "Connect"
                        }
                    }
                }

                div { class: "footer-socials",
                    for social in SOCIAL_LINKS.iter() {
                        a {
                            key: "{social.label}",
                            class: "social-link",
                            href: "{social.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{social.label}",
                            span { class: "social-glyph", "{social.glyph}" }
                            span { class: "social-label", "{social.label}" }
                        }
                    }
                }
            }

            p { class: "copyright", "© {year} {config.owner}. All systems nominal." }
        }
    }
}

/// Floating button that returns to the top of the page.
#[component]
pub fn ScrollTopButton() -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Float,
            aria_label: "Scroll to top".to_string(),
            onclick: move |_| {
                document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
            },
            "↑"
        }
    }
}
