//! Splash Preloader
//!
//! Full-screen overlay shown when the About page mounts. The text fades
//! a little before the overlay goes away.

use codex_core::splash::{SPLASH_FADE_DELAY, SPLASH_LINES};
use dioxus::prelude::*;

/// Fade starts at this share of the full splash.
fn fade_delay_ms(total_ms: u128) -> u128 {
    let default_total = codex_core::splash::SPLASH_DURATION.as_millis();
    total_ms * SPLASH_FADE_DELAY.as_millis() / default_total.max(1)
}

#[component]
pub fn Preloader(duration_ms: u64) -> Element {
    let fade_ms = fade_delay_ms(duration_ms as u128);

    rsx! {
        div {
            class: "preloader",
            role: "status",
            "aria-live": "polite",
            style: "--fade-delay: {fade_ms}ms;",
            div { class: "preloader-ring" }
            for (index, line) in SPLASH_LINES.iter().enumerate() {
                p { key: "{index}", class: "preloader-line", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_with_duration() {
        assert_eq!(fade_delay_ms(3000), 2800);
        assert_eq!(fade_delay_ms(1500), 1400);
        assert_eq!(fade_delay_ms(0), 0);
    }
}
