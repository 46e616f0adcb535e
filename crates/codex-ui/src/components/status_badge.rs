//! Status Badge Component
//!
//! Small bordered label with an optional pulsing dot:
//! - "ACTIVE" / "COMPLETED" on experience cards
//! - "ONLINE" / "LIVE" on hero monitors
//! - threat status on the origin section

use codex_core::content::ExperienceStatus;
use dioxus::prelude::*;

/// Colour of a badge
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeTone {
    /// Cyan, something running now
    Live,
    /// Purple, finished or idle
    #[default]
    Settled,
    /// Red, threat mode
    Alert,
}

impl BadgeTone {
    /// Returns the CSS class for this tone
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Live => "badge live",
            BadgeTone::Settled => "badge settled",
            BadgeTone::Alert => "badge alert",
        }
    }

    /// Whether the dot pulses
    pub fn pulses(&self) -> bool {
        matches!(self, BadgeTone::Live | BadgeTone::Alert)
    }
}

impl From<ExperienceStatus> for BadgeTone {
    fn from(status: ExperienceStatus) -> Self {
        match status {
            ExperienceStatus::Active => BadgeTone::Live,
            ExperienceStatus::Completed => BadgeTone::Settled,
        }
    }
}

/// Properties for the StatusBadge component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBadgeProps {
    /// Badge text
    pub label: String,
    #[props(default)]
    pub tone: BadgeTone,
    /// Show the leading dot
    #[props(default = true)]
    pub dot: bool,
}

/// Displays a status label with a pulsing indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusBadge { label: "ACTIVE".to_string(), tone: BadgeTone::Live }
/// }
/// ```
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let pulses = props.tone.pulses();

    rsx! {
        span { class: props.tone.class(),
            if props.dot {
                span {
                    class: if pulses { "badge-dot pulse" } else { "badge-dot" },
                    role: "img",
                    "aria-label": if pulses { "Active" } else { "Idle" },
                }
            }
            span { class: "badge-label", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_classes() {
        assert_eq!(BadgeTone::Live.class(), "badge live");
        assert_eq!(BadgeTone::Settled.class(), "badge settled");
        assert_eq!(BadgeTone::Alert.class(), "badge alert");
    }

    #[test]
    fn only_live_and_alert_pulse() {
        assert!(BadgeTone::Live.pulses());
        assert!(BadgeTone::Alert.pulses());
        assert!(!BadgeTone::Settled.pulses());
    }

    #[test]
    fn experience_status_maps_to_tone() {
        assert_eq!(BadgeTone::from(ExperienceStatus::Active), BadgeTone::Live);
        assert_eq!(BadgeTone::from(ExperienceStatus::Completed), BadgeTone::Settled);
    }
}
