//! The Identity Codex UI Components
//!
//! Small Dioxus building blocks shared by every page of the portfolio.
//!
//! ## Design Language
//!
//! Dark glass panels over a near-black background, with two accent sets
//! that follow threat mode:
//! - **Cyan (#22d3ee) / Purple (#a855f7)**: calm, JARVIS
//! - **Red (#f87171)**: threat, ULTRON
//!
//! Components here never read threat mode themselves; pages pass the
//! tone in, which keeps these crate-independent of the app context.

pub mod components;

pub use components::*;
