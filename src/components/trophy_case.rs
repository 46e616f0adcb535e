use codex_core::content::ACHIEVEMENTS;
use dioxus::prelude::*;

#[component]
pub fn TrophyCase() -> Element {
    rsx! {
        section { class: "trophies", id: "trophies",
            div { class: "section-heading",
                h2 { "Trophy Case" }
            }
            div { class: "trophy-grid",
                for achievement in ACHIEVEMENTS.iter() {
                    div { key: "{achievement.title}", class: "trophy {achievement.tint}",
                        span { class: "trophy-icon", "{achievement.icon}" }
                        h3 { "{achievement.title}" }
                        p { "{achievement.description}" }
                        span { class: "trophy-score", "{achievement.score}" }
                    }
                }
            }
        }
    }
}
