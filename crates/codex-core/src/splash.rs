//! Preloader gate.
//!
//! The About page opens behind a full-screen overlay that hides itself
//! once its timer elapses. The gate guarantees the shown -> hidden edge
//! fires exactly once per load.

use std::time::Duration;

/// How long the overlay stays up.
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// When the overlay starts fading, relative to mount.
pub const SPLASH_FADE_DELAY: Duration = Duration::from_millis(2800);

/// Lines typed onto the overlay.
pub const SPLASH_LINES: [&str; 2] = ["Initiating Digital Lab Sequence...", "Glad to have you here."];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    #[default]
    Showing,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplashGate {
    phase: SplashPhase,
}

impl SplashGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gate that never shows, for `--no-splash`.
    pub fn skipped() -> Self {
        Self {
            phase: SplashPhase::Hidden,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_showing(&self) -> bool {
        self.phase == SplashPhase::Showing
    }

    /// Hide the overlay. Returns `true` only for the first call.
    pub fn finish(&mut self) -> bool {
        if self.phase == SplashPhase::Hidden {
            return false;
        }
        self.phase = SplashPhase::Hidden;
        true
    }
}

/// Wait out the splash, then flip the gate and notify once.
///
/// Cancelling the future before `duration` elapses leaves the gate
/// showing and never calls `on_hidden`.
pub async fn run_splash<F>(duration: Duration, mut gate: SplashGate, on_hidden: F) -> SplashGate
where
    F: FnOnce(),
{
    if !gate.is_showing() {
        return gate;
    }
    tokio::time::sleep(duration).await;
    if gate.finish() {
        tracing::debug!(elapsed_ms = duration.as_millis() as u64, "Splash hidden");
        on_hidden();
    }
    gate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_fires_once() {
        let mut gate = SplashGate::new();
        assert!(gate.is_showing());
        assert!(gate.finish());
        assert!(!gate.finish());
        assert_eq!(gate.phase(), SplashPhase::Hidden);
    }

    #[test]
    fn skipped_gate_is_hidden() {
        let mut gate = SplashGate::skipped();
        assert!(!gate.is_showing());
        assert!(!gate.finish());
    }

    #[test]
    fn fade_starts_before_hide() {
        assert!(SPLASH_FADE_DELAY < SPLASH_DURATION);
    }
}
