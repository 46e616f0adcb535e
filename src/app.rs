use dioxus::prelude::*;

use crate::context::ThreatProvider;
use crate::get_site_config;
use crate::pages::{About, Connect, Home, Research};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing hero with the digital laboratory
/// - `/about` - Identity card, origin story, experience, trophies
/// - `/research` - Research write-ups with results
/// - `/connect` - Contact placeholder
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/research")]
    Research {},
    #[route("/connect")]
    Connect {},
}

/// Root application component.
///
/// Provides global styles, site config, threat mode, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_site_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        ThreatProvider {
            Router::<Route> {}
        }
    }
}
