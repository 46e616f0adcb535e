//! Shared context for The Identity Codex.
//!
//! Provides the site config and the threat-mode flag to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! ThreatProvider { Router::<Route> {} }
//!
//! // In child components
//! let mut threat = use_threat_mode();
//! if threat.is_active() { /* red palette */ }
//! threat.set(false);
//! ```

use codex_core::{CodexError, CodexResult, Palette, SiteConfig, ThreatState};
use dioxus::prelude::*;

/// Threat mode handle stored in context.
///
/// Copyable; every copy points at the same signals, so a write from any
/// component re-renders every reader.
#[derive(Clone, Copy, PartialEq)]
pub struct ThreatMode {
    state: Signal<ThreatState>,
    shaking: Signal<bool>,
}

impl ThreatMode {
    pub fn is_active(&self) -> bool {
        self.state.read().is_active()
    }

    pub fn palette(&self) -> &'static Palette {
        self.state.read().palette()
    }

    pub fn status_line(&self) -> &'static str {
        self.state.read().status_line()
    }

    pub fn is_shaking(&self) -> bool {
        (self.shaking)()
    }

    /// Write the flag. Writing the current value touches nothing, so no
    /// reader re-renders.
    pub fn set(&mut self, value: bool) {
        if self.state.peek().is_active() == value {
            return;
        }
        let change = self.state.write().set(value);
        if change.shakes() {
            self.shaking.set(true);
        }
    }

    fn stop_shaking(&mut self) {
        if *self.shaking.peek() {
            self.shaking.set(false);
        }
    }
}

/// Owns the threat flag and the page shell it themes.
///
/// The shell carries the palette background and plays the shake
/// animation. The shake clears on the animation's `animationend`, or
/// after `shake_ms` if the animation never reports back.
#[component]
pub fn ThreatProvider(children: Element) -> Element {
    let config = use_site_config();
    let state = use_signal(ThreatState::new);
    let shaking = use_signal(|| false);
    let mut threat = use_context_provider(|| ThreatMode { state, shaking });

    let palette = threat.palette();
    let shake_for = config.shake_duration();
    let shake_ms = shake_for.as_millis();

    use_effect(move || {
        if threat.is_shaking() {
            spawn(async move {
                tokio::time::sleep(shake_for).await;
                threat.stop_shaking();
            });
        }
    });
    let shell_class = if threat.is_shaking() {
        "app-shell shake"
    } else {
        "app-shell"
    };

    rsx! {
        div {
            class: shell_class,
            "data-tone": palette.tone,
            style: "--page-bg: {palette.background}; --accent: {palette.accent}; --shake-ms: {shake_ms}ms;",
            onanimationend: move |evt: AnimationEvent| {
                if evt.data().animation_name() == "shake" {
                    threat.stop_shaking();
                }
            },
            {children}
        }
    }
}

/// Hook to access threat mode without failing.
///
/// Returns `MissingProvider` when called outside `ThreatProvider`.
pub fn try_use_threat_mode() -> CodexResult<ThreatMode> {
    try_use_context::<ThreatMode>().ok_or(CodexError::MissingProvider("use_threat_mode"))
}

/// Hook to access threat mode.
///
/// # Panics
///
/// Panics when called outside `ThreatProvider`; that is a wiring bug,
/// not a runtime condition.
pub fn use_threat_mode() -> ThreatMode {
    match try_use_threat_mode() {
        Ok(threat) => threat,
        Err(e) => panic!("{}", e),
    }
}

/// Hook to access the site configuration.
///
/// Falls back to defaults when no config was provided.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Option<ThreatMode>> = RefCell::new(None);
        static LOOKUP: RefCell<Option<String>> = RefCell::new(None);
    }

    #[component]
    fn Capture() -> Element {
        let threat = use_threat_mode();
        CAPTURED.with(|slot| *slot.borrow_mut() = Some(threat));
        rsx! {}
    }

    #[component]
    fn Provided() -> Element {
        rsx! {
            ThreatProvider {
                Capture {}
            }
        }
    }

    #[component]
    fn Unprovided() -> Element {
        let _threat = use_threat_mode();
        rsx! {}
    }

    #[component]
    fn Lookup() -> Element {
        let outcome = match try_use_threat_mode() {
            Ok(_) => "found".to_string(),
            Err(e) => e.to_string(),
        };
        LOOKUP.with(|slot| *slot.borrow_mut() = Some(outcome));
        rsx! {}
    }

    fn mounted() -> (VirtualDom, ThreatMode) {
        let mut dom = VirtualDom::new(Provided);
        dom.rebuild_in_place();
        let threat = CAPTURED
            .with(|slot| slot.borrow_mut().take())
            .expect("provider renders its children");
        (dom, threat)
    }

    #[test]
    #[should_panic(expected = "use_threat_mode must be used within its provider")]
    fn hook_outside_provider_panics() {
        let mut dom = VirtualDom::new(Unprovided);
        dom.rebuild_in_place();
    }

    #[test]
    fn fallible_lookup_reports_missing_provider() {
        let mut dom = VirtualDom::new(Lookup);
        dom.rebuild_in_place();
        let outcome = LOOKUP.with(|slot| slot.borrow_mut().take());
        assert_eq!(
            outcome.as_deref(),
            Some("use_threat_mode must be used within its provider")
        );
    }

    #[test]
    fn starts_calm() {
        let (dom, threat) = mounted();
        dom.in_runtime(|| {
            assert!(!threat.is_active());
            assert!(!threat.is_shaking());
            assert_eq!(threat.palette().tone, "calm");
        });
    }

    #[test]
    fn repeated_activation_leaves_state_unchanged() {
        let (dom, mut threat) = mounted();
        dom.in_runtime(|| {
            threat.set(true);
            assert!(threat.is_active());
            assert!(threat.is_shaking());

            threat.set(true);
            assert!(threat.is_active());
            assert!(threat.is_shaking());

            threat.stop_shaking();
            threat.set(true);
            assert!(threat.is_active());
            assert!(!threat.is_shaking(), "rewriting true must not replay the shake");
        });
    }

    #[test]
    fn deactivation_does_not_shake() {
        let (dom, mut threat) = mounted();
        dom.in_runtime(|| {
            threat.set(true);
            threat.stop_shaking();
            threat.set(false);
            assert!(!threat.is_active());
            assert!(!threat.is_shaking());
            assert_eq!(threat.palette().tone, "calm");
        });
    }

    #[test]
    fn every_copy_sees_the_same_flag() {
        let (dom, mut writer) = mounted();
        let reader = writer;
        dom.in_runtime(|| {
            writer.set(true);
            assert!(reader.is_active());
            assert_eq!(reader.palette().tone, "threat");
            assert_eq!(reader.status_line(), writer.status_line());
        });
    }

    #[tokio::test(start_paused = true)]
    async fn shake_clears_without_animationend() {
        let (mut dom, mut threat) = mounted();
        dom.in_runtime(|| threat.set(true));

        let mut rounds = 0;
        while dom.in_runtime(|| threat.is_shaking()) && rounds < 200 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {}
            }
            let _ = dom.render_immediate_to_vec();
            rounds += 1;
        }

        dom.in_runtime(|| {
            assert!(!threat.is_shaking(), "shake timer never fired");
            assert!(threat.is_active());
        });
    }

    #[test]
    fn stop_shaking_is_idempotent() {
        let (dom, mut threat) = mounted();
        dom.in_runtime(|| {
            threat.stop_shaking();
            assert!(!threat.is_shaking());
            threat.set(true);
            threat.stop_shaking();
            threat.stop_shaking();
            assert!(!threat.is_shaking());
            assert!(threat.is_active());
        });
    }
}
