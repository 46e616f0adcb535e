//! Page components for The Identity Codex.

mod about;
mod connect;
mod home;
mod research;

pub use about::About;
pub use connect::Connect;
pub use home::Home;
pub use research::Research;
