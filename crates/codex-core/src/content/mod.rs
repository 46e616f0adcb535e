//! Static display content.
//!
//! Everything the pages render that is not UI state lives here as plain
//! `'static` data, so it can be checked by tests without a renderer.

mod achievements;
mod experience;
mod hero;
mod identity;
mod lab;
mod nav;
mod research;

pub use achievements::{Achievement, ACHIEVEMENTS};
pub use experience::{Experience, ExperienceStatus, EXPERIENCES, RESEARCH_UPTIME};
pub use hero::{CaptionSegment, Highlight, HERO_CAPTION};
pub use identity::{
    Directive, SocialLink, DIRECTIVES, JARVIS_LINKS, OWNER_AFFILIATION, OWNER_NAME, OWNER_ROLE,
    SOCIAL_LINKS, TRANSMISSION, ULTRON_LINKS,
};
pub use lab::{Layer, NeuralNode, NEURAL_EDGES, NEURAL_NODES, NEURAL_STATS};
pub use nav::{NavItem, NavTarget, NAV_ITEMS};
pub use research::{
    BarGroup, BarSeries, Dataset, PatternRow, Project, QuestionAnswer, Results, PROJECTS,
};
