//! Installs the global subscriber, so it lives in its own test binary.

use codex_core::logging::init_logging;

#[test]
fn init_twice_does_not_panic() {
    init_logging(false);
    init_logging(true);
    tracing::info!("still logging after a second init");
}
