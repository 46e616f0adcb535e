//! JARVIS / ULTRON origin cards.
//!
//! Two cards on the About page that each unlock a short list, and that
//! are the only writers of the threat flag. Every operation returns the
//! value the caller must write to the shared [`ThreatState`].
//!
//! [`ThreatState`]: crate::threat::ThreatState

/// Lock state of the two origin cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OriginCards {
    pub jarvis_unlocked: bool,
    pub ultron_unlocked: bool,
}

impl OriginCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the JARVIS card. JARVIS always stands threat mode down.
    pub fn click_jarvis(&mut self) -> bool {
        self.jarvis_unlocked = !self.jarvis_unlocked;
        false
    }

    /// Toggle the ULTRON card. ULTRON always raises threat mode, even
    /// when the click locks the card again.
    pub fn click_ultron(&mut self) -> bool {
        self.ultron_unlocked = !self.ultron_unlocked;
        true
    }

    /// The "KILL ULTRON" button: lock ULTRON and clear threat mode.
    pub fn kill_ultron(&mut self) -> bool {
        self.ultron_unlocked = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threat::{ThreatChange, ThreatState};

    #[test]
    fn cards_start_locked() {
        let cards = OriginCards::new();
        assert!(!cards.jarvis_unlocked);
        assert!(!cards.ultron_unlocked);
    }

    #[test]
    fn ultron_raises_and_kill_clears() {
        let mut cards = OriginCards::new();
        let mut threat = ThreatState::new();

        assert_eq!(threat.set(cards.click_ultron()), ThreatChange::Activated);
        assert!(cards.ultron_unlocked);

        assert_eq!(threat.set(cards.kill_ultron()), ThreatChange::Deactivated);
        assert!(!cards.ultron_unlocked);
        assert!(!threat.is_active());
    }

    #[test]
    fn jarvis_toggles_and_clears_threat() {
        let mut cards = OriginCards::new();
        let mut threat = ThreatState::new();
        threat.set(cards.click_ultron());

        assert!(!cards.click_jarvis());
        assert!(cards.jarvis_unlocked);
        threat.set(false);
        assert!(!threat.is_active());

        cards.click_jarvis();
        assert!(!cards.jarvis_unlocked);
        // ULTRON's own lock is untouched by JARVIS
        assert!(cards.ultron_unlocked);
    }

    #[test]
    fn relocking_ultron_keeps_threat_raised() {
        let mut cards = OriginCards::new();
        let mut threat = ThreatState::new();
        threat.set(cards.click_ultron());
        assert_eq!(threat.set(cards.click_ultron()), ThreatChange::Unchanged);
        assert!(!cards.ultron_unlocked);
        assert!(threat.is_active());
    }
}
