//! Reusable UI components
//!
//! Glass-panel aesthetic with:
//! - Inter for body copy
//! - JetBrains Mono for terminal text
//! - Tone classes (`tone-calm`, `tone-threat`) for accent colour

mod button;
mod input;
mod status_badge;
mod toggle_pills;

pub use button::*;
pub use input::*;
pub use status_badge::*;
pub use toggle_pills::*;
