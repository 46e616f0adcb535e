//! Decorative text effects.
//!
//! Each effect is a small frame-stepping state machine implementing
//! [`Animation`]. [`drive`] plays one on a fixed tick; the UI owns the
//! task running it and cancels that task on unmount or re-trigger.

mod decrypt;
mod driver;
mod typewriter;

pub use decrypt::{Decrypt, DECRYPT_FRAMES, DECRYPT_GLYPHS, DECRYPT_TICK};
pub use driver::drive;
pub use typewriter::{Typewriter, TYPEWRITER_TICK};

/// Result of advancing an animation by one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Show this frame and keep ticking
    Frame(String),
    /// Show this frame and stop
    Last(String),
    /// Stop without showing anything new
    Finished,
}

/// A bounded sequence of text frames.
pub trait Animation {
    fn advance(&mut self) -> Step;
}
