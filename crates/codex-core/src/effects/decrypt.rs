use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Animation, Step};

/// Delay between scramble frames.
pub const DECRYPT_TICK: Duration = Duration::from_millis(40);

/// Scramble frames before the real text lands.
pub const DECRYPT_FRAMES: usize = 20;

/// Glyphs drawn for not-yet-resolved characters.
pub const DECRYPT_GLYPHS: &str = "!@#$%^&*<>[]{}ABCDEFXYZabcxyz0123456789";

/// Resolves random glyphs into `text` from left to right.
///
/// Frame `f` keeps the first `f * len / DECRYPT_FRAMES` characters,
/// keeps every space, and scrambles the rest.
#[derive(Clone, Debug)]
pub struct Decrypt<R = ThreadRng> {
    chars: Vec<char>,
    glyphs: Vec<char>,
    frame: usize,
    rng: R,
}

impl Decrypt<ThreadRng> {
    pub fn new(text: &str) -> Self {
        Self::with_rng(text, rand::rng())
    }
}

impl<R: Rng> Decrypt<R> {
    pub fn with_rng(text: &str, rng: R) -> Self {
        Self {
            chars: text.chars().collect(),
            glyphs: DECRYPT_GLYPHS.chars().collect(),
            frame: 0,
            rng,
        }
    }

    /// Characters already resolved at frame `frame`.
    pub fn resolved_at(frame: usize, len: usize) -> usize {
        frame * len / DECRYPT_FRAMES
    }

    fn scramble(&mut self) -> String {
        let resolved = Self::resolved_at(self.frame, self.chars.len());
        let mut out = String::with_capacity(self.chars.len());
        for (i, &c) in self.chars.iter().enumerate() {
            if c == ' ' || i < resolved {
                out.push(c);
            } else {
                out.push(self.glyphs[self.rng.random_range(0..self.glyphs.len())]);
            }
        }
        out
    }
}

impl<R: Rng> Animation for Decrypt<R> {
    fn advance(&mut self) -> Step {
        if self.frame >= DECRYPT_FRAMES {
            return Step::Last(self.chars.iter().collect());
        }
        let out = self.scramble();
        self.frame += 1;
        Step::Frame(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(text: &str) -> Decrypt<StdRng> {
        Decrypt::with_rng(text, StdRng::seed_from_u64(7))
    }

    #[test]
    fn lands_on_text_after_bounded_frames() {
        let mut d = seeded("Prompt Injection");
        let mut count = 0;
        loop {
            match d.advance() {
                Step::Frame(_) => count += 1,
                Step::Last(text) => {
                    assert_eq!(text, "Prompt Injection");
                    break;
                }
                Step::Finished => panic!("decrypt never finishes silently"),
            }
        }
        assert_eq!(count, DECRYPT_FRAMES);
    }

    #[test]
    fn frames_keep_length_and_spaces() {
        let text = "a b c d e";
        let mut d = seeded(text);
        for _ in 0..DECRYPT_FRAMES {
            let Step::Frame(f) = d.advance() else { panic!("expected frame") };
            assert_eq!(f.chars().count(), text.chars().count());
            for (a, b) in f.chars().zip(text.chars()) {
                if b == ' ' {
                    assert_eq!(a, ' ');
                }
            }
        }
    }

    #[test]
    fn resolved_prefix_grows() {
        let text = "ABCDEFGHIJKLMNOPQRST";
        let mut d = seeded(text);
        for frame in 0..DECRYPT_FRAMES {
            let Step::Frame(f) = d.advance() else { panic!("expected frame") };
            let resolved = Decrypt::<StdRng>::resolved_at(frame, text.len());
            assert_eq!(resolved, frame);
            assert_eq!(&f[..resolved], &text[..resolved]);
        }
    }

    #[test]
    fn scrambled_chars_come_from_glyph_set() {
        let mut d = seeded("zzzzzzzzzz");
        let Step::Frame(f) = d.advance() else { panic!("expected frame") };
        assert!(f.chars().all(|c| DECRYPT_GLYPHS.contains(c)));
    }

    #[test]
    fn first_frame_resolves_nothing() {
        assert_eq!(Decrypt::<StdRng>::resolved_at(0, 50), 0);
        assert_eq!(Decrypt::<StdRng>::resolved_at(DECRYPT_FRAMES, 50), 50);
    }
}
