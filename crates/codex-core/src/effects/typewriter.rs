use std::time::Duration;

use super::{Animation, Step};

/// Delay between revealed characters.
pub const TYPEWRITER_TICK: Duration = Duration::from_millis(35);

/// Types `text` out one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the caret should still blink after `shown`.
    pub fn is_typing(text: &str, shown: &str) -> bool {
        shown.chars().count() < text.chars().count()
    }
}

impl Animation for Typewriter {
    fn advance(&mut self) -> Step {
        if self.revealed >= self.chars.len() {
            return Step::Finished;
        }
        self.revealed += 1;
        Step::Frame(self.chars[..self.revealed].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(mut tw: Typewriter) -> Vec<String> {
        let mut out = Vec::new();
        while let Step::Frame(f) = tw.advance() {
            out.push(f);
        }
        out
    }

    #[test]
    fn reveals_prefixes_in_order() {
        assert_eq!(frames(Typewriter::new("KILL")), vec!["K", "KI", "KIL", "KILL"]);
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_empty());
        assert_eq!(tw.advance(), Step::Finished);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let out = frames(Typewriter::new("→ok"));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "→");
    }

    #[test]
    fn caret_visibility() {
        assert!(Typewriter::is_typing("abc", "ab"));
        assert!(!Typewriter::is_typing("abc", "abc"));
    }
}
