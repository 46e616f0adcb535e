/// A badge in the trophy case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub score: &'static str,
    /// CSS gradient modifier
    pub tint: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        icon: "\u{1F3C6}",
        title: "The Quant Master",
        description: "Perfect Score in GRE Quant",
        score: "170/170",
        tint: "gold",
    },
    Achievement {
        icon: "\u{1F948}",
        title: "National Elite",
        description: "Top 8% in JEE Mains",
        score: "Top 8%",
        tint: "silver",
    },
    Achievement {
        icon: "\u{1F4DC}",
        title: "The Researcher",
        description: "3 Publications",
        score: "Elsevier/Taylor & Francis/IEE",
        tint: "violet",
    },
];
