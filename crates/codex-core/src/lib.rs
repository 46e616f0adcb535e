//! The Identity Codex Core Library
//!
//! Framework-free state and content behind the portfolio site.
//!
//! ## Overview
//!
//! The site is presentational, so the core is small: a shared "threat
//! mode" flag that re-themes every page, a handful of per-component
//! state machines (origin cards, hover focus, preloader), two text
//! effects played on a fixed tick, and the static content the pages
//! render. None of it depends on Dioxus, so it is tested directly.
//!
//! ## Quick Start
//!
//! ```ignore
//! use codex_core::effects::{drive, Typewriter, TYPEWRITER_TICK};
//! use codex_core::{OriginCards, ThreatState};
//!
//! let mut threat = ThreatState::new();
//! let mut cards = OriginCards::new();
//!
//! // Unlocking ULTRON raises threat mode
//! if threat.set(cards.click_ultron()).shakes() {
//!     // shake the page
//! }
//!
//! // Type a line out, one character every 35ms
//! drive(Typewriter::new("KILL ULTRON"), TYPEWRITER_TICK, |frame| println!("{frame}")).await;
//! ```

pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod feeds;
pub mod hover;
pub mod logging;
pub mod origin;
pub mod splash;
pub mod subscribe;
pub mod threat;

// Re-exports
pub use config::SiteConfig;
pub use error::{CodexError, CodexResult};
pub use feeds::{ChatFeed, ScanFeed};
pub use hover::HoverTracker;
pub use origin::OriginCards;
pub use splash::{run_splash, SplashGate, SplashPhase};
pub use subscribe::{validate_email, SubscribeForm};
pub use threat::{Palette, ThreatChange, ThreatState};
