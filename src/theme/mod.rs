//! Visual theme for The Identity Codex.

mod styles;

pub use styles::GLOBAL_STYLES;
