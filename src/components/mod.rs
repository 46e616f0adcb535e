//! UI components for The Identity Codex.
//!
//! Page sections built on the shared `codex-ui` primitives.

mod experience_circuit;
mod hero;
mod navbar;
mod origin;
mod preloader;
mod research_sections;
mod site_footer;
mod text_effects;
mod trophy_case;

pub use experience_circuit::ExperienceCircuit;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use origin::OriginSection;
pub use preloader::Preloader;
pub use research_sections::{ProjectIndex, ProjectSection};
pub use site_footer::{ScrollTopButton, SiteFooter};
pub use text_effects::{DecryptText, TypewriterText};
pub use trophy_case::TrophyCase;
