//! Threat mode - the one piece of state shared across the whole site.
//!
//! A single boolean that flips every themed view between two presets:
//! the calm JARVIS palette and the red ULTRON palette. The flag starts
//! off, is written by the origin cards on the About page, and is only
//! reset by another click or a reload.

use std::time::Duration;

/// How long the page shakes after threat mode switches on.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Colour preset selected by the threat flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Short name, used as a CSS modifier (`tone-calm`, `tone-threat`)
    pub tone: &'static str,
    /// Page background
    pub background: &'static str,
    /// Ambient orbs, top-left / bottom-right / centre-right
    pub orbs: [&'static str; 3],
    /// Accent used for headings and borders
    pub accent: &'static str,
}

pub const CALM_PALETTE: Palette = Palette {
    tone: "calm",
    background: "#050510",
    orbs: [
        "rgba(6,182,212,0.10)",
        "rgba(168,85,247,0.10)",
        "rgba(59,130,246,0.05)",
    ],
    accent: "#22d3ee",
};

pub const THREAT_PALETTE: Palette = Palette {
    tone: "threat",
    background: "#150000",
    orbs: [
        "rgba(239,68,68,0.10)",
        "rgba(220,38,38,0.10)",
        "rgba(185,28,28,0.07)",
    ],
    accent: "#f87171",
};

/// What a write to the flag actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreatChange {
    Unchanged,
    Activated,
    Deactivated,
}

impl ThreatChange {
    /// Only the off -> on edge shakes the page.
    pub fn shakes(&self) -> bool {
        matches!(self, ThreatChange::Activated)
    }
}

/// The shared threat flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThreatState {
    active: bool,
}

impl ThreatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Write the flag. Last write wins; writing the current value is a no-op.
    pub fn set(&mut self, value: bool) -> ThreatChange {
        if self.active == value {
            return ThreatChange::Unchanged;
        }
        self.active = value;
        if value {
            tracing::info!("Threat mode engaged");
            ThreatChange::Activated
        } else {
            tracing::info!("Threat mode cleared");
            ThreatChange::Deactivated
        }
    }

    pub fn palette(&self) -> &'static Palette {
        if self.active {
            &THREAT_PALETTE
        } else {
            &CALM_PALETTE
        }
    }

    /// Status copy shown in the origin section header.
    pub fn status_line(&self) -> &'static str {
        if self.active {
            "THREAT DETECTED: ULTRON ACTIVE"
        } else {
            "ALL SYSTEMS NOMINAL"
        }
    }
}
