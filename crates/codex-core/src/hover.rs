//! Exclusive hover tracking for the experience circuit.

/// Tracks the one card currently under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    active: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Pointer entered card `index`; any previous card loses focus.
    pub fn enter(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Pointer left card `index`. A late leave from a card that already
    /// lost focus must not clear the newer one.
    pub fn leave(&mut self, index: usize) {
        if self.active == Some(index) {
            self.active = None;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// The connector after card `index` glows when either end is hovered.
    pub fn connector_lit(&self, index: usize) -> bool {
        match self.active {
            Some(a) => a == index || a == index + 1,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_replaces_previous() {
        let mut hover = HoverTracker::new();
        hover.enter(1);
        hover.enter(3);
        assert!(!hover.is_active(1));
        assert!(hover.is_active(3));
        assert_eq!(hover.active(), Some(3));
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut hover = HoverTracker::new();
        hover.enter(0);
        hover.enter(1);
        hover.leave(0);
        assert_eq!(hover.active(), Some(1));
        hover.leave(1);
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn connectors_follow_hover() {
        let mut hover = HoverTracker::new();
        assert!(!hover.connector_lit(0));
        hover.enter(2);
        assert!(hover.connector_lit(1));
        assert!(hover.connector_lit(2));
        assert!(!hover.connector_lit(0));
        assert!(!hover.connector_lit(3));
    }
}
