//! Property-based tests for the UI state machines
//!
//! Uses proptest to check the invariants the views rely on.

use codex_core::effects::{Animation, Decrypt, Step, Typewriter, DECRYPT_FRAMES};
use codex_core::{HoverTracker, OriginCards, ThreatChange, ThreatState};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Pointer events over a five-card circuit
#[derive(Debug, Clone)]
enum HoverOp {
    Enter(usize),
    Leave(usize),
}

fn hover_ops_strategy() -> impl Strategy<Value = Vec<HoverOp>> {
    prop::collection::vec(
        prop_oneof![
            (0..5usize).prop_map(HoverOp::Enter),
            (0..5usize).prop_map(HoverOp::Leave),
        ],
        0..64,
    )
}

/// Clicks on the origin section
#[derive(Debug, Clone)]
enum CardOp {
    Jarvis,
    Ultron,
    Kill,
}

fn card_ops_strategy() -> impl Strategy<Value = Vec<CardOp>> {
    prop::collection::vec(
        prop_oneof![Just(CardOp::Jarvis), Just(CardOp::Ultron), Just(CardOp::Kill)],
        0..64,
    )
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ()&]{0,80}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// At most one card is ever active, and it is the last one entered
    #[test]
    fn hover_is_exclusive(ops in hover_ops_strategy()) {
        let mut hover = HoverTracker::new();
        for op in &ops {
            match *op {
                HoverOp::Enter(i) => {
                    hover.enter(i);
                    prop_assert_eq!(hover.active(), Some(i));
                }
                HoverOp::Leave(i) => hover.leave(i),
            }
            let active = (0..5).filter(|&i| hover.is_active(i)).count();
            prop_assert!(active <= 1);
        }
    }

    /// The flag always equals the value of the last write, and a repeated
    /// write never reports a change
    #[test]
    fn threat_flag_last_write_wins(ops in card_ops_strategy()) {
        let mut cards = OriginCards::new();
        let mut threat = ThreatState::new();
        for op in &ops {
            let wanted = match op {
                CardOp::Jarvis => cards.click_jarvis(),
                CardOp::Ultron => cards.click_ultron(),
                CardOp::Kill => cards.kill_ultron(),
            };
            threat.set(wanted);
            prop_assert_eq!(threat.is_active(), wanted);
            prop_assert_eq!(threat.set(wanted), ThreatChange::Unchanged);
            prop_assert_eq!(threat.palette().tone, if wanted { "threat" } else { "calm" });
        }
    }

    /// Typewriter emits exactly one frame per character, each a prefix
    #[test]
    fn typewriter_frames_are_prefixes(text in label_strategy()) {
        let mut tw = Typewriter::new(&text);
        let mut count = 0;
        while let Step::Frame(frame) = tw.advance() {
            count += 1;
            prop_assert!(text.starts_with(&frame));
            prop_assert_eq!(frame.chars().count(), count);
        }
        prop_assert_eq!(count, text.chars().count());
    }

    /// Decrypt always lands on the real text and keeps spaces in place
    #[test]
    fn decrypt_converges(text in label_strategy(), seed in any::<u64>()) {
        let mut d = Decrypt::with_rng(&text, StdRng::seed_from_u64(seed));
        let mut frames = 0;
        loop {
            match d.advance() {
                Step::Frame(frame) => {
                    frames += 1;
                    prop_assert_eq!(frame.chars().count(), text.chars().count());
                    for (a, b) in frame.chars().zip(text.chars()) {
                        if b == ' ' {
                            prop_assert_eq!(a, ' ');
                        }
                    }
                }
                Step::Last(frame) => {
                    prop_assert_eq!(frame, text.clone());
                    break;
                }
                Step::Finished => prop_assert!(false, "decrypt must end with Last"),
            }
        }
        prop_assert_eq!(frames, DECRYPT_FRAMES);
    }
}
