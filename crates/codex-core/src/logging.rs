//! Console logging setup.
//!
//! `RUST_LOG` always wins. Without it, codex crates log at `info`, or at
//! `debug` when the binary runs with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info,codex=debug,codex_core=debug,codex_ui=debug"
    } else {
        "warn,codex=info,codex_core=info,codex_ui=info"
    }
}

/// Install the global fmt subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        for verbose in [false, true] {
            assert!(default_directive(verbose).parse::<EnvFilter>().is_ok());
        }
    }
}
