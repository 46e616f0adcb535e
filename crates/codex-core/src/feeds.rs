//! Sample lines cycled through the hero monitors.
//!
//! Two feeds: a vulnerability scanner that reshuffles its screen every
//! few seconds, and a JARVIS chat that scrolls a short script.

use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

/// Scanner refresh period.
pub const SCAN_PERIOD: Duration = Duration::from_millis(2500);

/// Chat append period.
pub const CHAT_PERIOD: Duration = Duration::from_millis(3000);

/// Lines visible on the scanner at once.
pub const SCAN_VISIBLE: usize = 8;

/// Messages visible in the chat at once.
pub const CHAT_VISIBLE: usize = 4;

pub const SCAN_POOL: [&str; 10] = [
    "> VULNERABILITY SCAN INITIATED",
    "> Analyzing neural network layers...",
    "> Checking gradient flow: SECURE",
    "> Testing adversarial inputs...",
    "> Backdoor detection: PASSED",
    "> Model poisoning check: CLEAN",
    "> Data leakage test: NO ISSUES",
    "> Robustness score: 94.7%",
    "> Scan complete: 0 critical issues",
    "> Security status: OPTIMAL",
];

/// Colour class of a scanner line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTone {
    Good,
    Critical,
    Neutral,
}

impl LineTone {
    pub fn of(line: &str) -> Self {
        const GOOD: [&str; 4] = ["PASSED", "CLEAN", "SECURE", "OPTIMAL"];
        if GOOD.iter().any(|w| line.contains(w)) {
            LineTone::Good
        } else if line.contains("CRITICAL") {
            LineTone::Critical
        } else {
            LineTone::Neutral
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LineTone::Good => "scan-good",
            LineTone::Critical => "scan-critical",
            LineTone::Neutral => "scan-neutral",
        }
    }
}

/// Scanner screen. Starts blank, reshuffled on every tick.
#[derive(Clone, Debug, Default)]
pub struct ScanFeed {
    lines: Vec<&'static str>,
}

impl ScanFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    /// Draw a fresh screen of [`SCAN_VISIBLE`] lines (with repeats).
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.lines = (0..SCAN_VISIBLE)
            .filter_map(|_| SCAN_POOL.choose(rng).copied())
            .collect();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Jarvis,
}

impl ChatRole {
    pub fn class(&self) -> &'static str {
        match self {
            ChatRole::System => "chat-system",
            ChatRole::User => "chat-user",
            ChatRole::Jarvis => "chat-jarvis",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub role: ChatRole,
    pub text: &'static str,
}

impl ChatLine {
    const fn new(role: ChatRole, text: &'static str) -> Self {
        Self { role, text }
    }

    /// Text as rendered; JARVIS replies get a prompt marker.
    pub fn display(&self) -> String {
        match self.role {
            ChatRole::Jarvis => format!("> {}", self.text),
            _ => self.text.to_string(),
        }
    }
}

pub const CHAT_SEED: [ChatLine; 4] = [
    ChatLine::new(ChatRole::System, "JARVIS PROTOCOL INITIALIZED"),
    ChatLine::new(ChatRole::User, "Run diagnostics on neural model"),
    ChatLine::new(ChatRole::Jarvis, "Analyzing architecture..."),
    ChatLine::new(ChatRole::Jarvis, "Model convergence optimal, sir."),
];

pub const CHAT_SCRIPT: [ChatLine; 5] = [
    ChatLine::new(ChatRole::User, "Check GPU utilization"),
    ChatLine::new(ChatRole::Jarvis, "GPU usage at 87%, thermal normal"),
    ChatLine::new(ChatRole::User, "Optimize hyperparameters"),
    ChatLine::new(ChatRole::Jarvis, "Adjusting learning rate to 0.001"),
    ChatLine::new(ChatRole::Jarvis, "Performance improved by 12%"),
];

/// Scrolling chat window over [`CHAT_SCRIPT`].
#[derive(Clone, Debug)]
pub struct ChatFeed {
    visible: Vec<ChatLine>,
    cursor: usize,
}

impl Default for ChatFeed {
    fn default() -> Self {
        Self {
            visible: CHAT_SEED.to_vec(),
            cursor: 0,
        }
    }
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> &[ChatLine] {
        &self.visible
    }

    /// Append the next scripted line. Once the script runs out, this tick
    /// only rewinds, so the loop pauses for one period before restarting.
    /// Returns whether a line was appended.
    pub fn tick(&mut self) -> bool {
        let Some(line) = CHAT_SCRIPT.get(self.cursor) else {
            self.cursor = 0;
            return false;
        };
        if self.visible.len() >= CHAT_VISIBLE {
            let excess = self.visible.len() + 1 - CHAT_VISIBLE;
            self.visible.drain(..excess);
        }
        self.visible.push(*line);
        self.cursor += 1;
        true
    }
}
