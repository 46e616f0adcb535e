//! Hero Section
//!
//! The digital laboratory on the landing page: a workstation with three
//! live monitors, a server rack, and the caption underneath.

use codex_core::content::{Layer, NeuralNode, HERO_CAPTION, NEURAL_EDGES, NEURAL_NODES, NEURAL_STATS};
use codex_core::feeds::{LineTone, CHAT_PERIOD, SCAN_PERIOD};
use codex_core::{ChatFeed, ScanFeed};
use codex_ui::{BadgeTone, StatusBadge};
use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    let mut hovered = use_signal(|| false);

    let workstation_class = if hovered() {
        "workstation glow"
    } else {
        "workstation"
    };

    rsx! {
        section { class: "hero",
            div { class: "hero-grid-floor" }

            div {
                class: workstation_class,
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),

                div { class: "monitor-row",
                    ScanMonitor {}
                    NeuralMonitor {}
                    ChatMonitor {}
                }
                div { class: "desk" }
                ServerRack {}
            }

            p { class: "hero-caption",
                for (index, segment) in HERO_CAPTION.iter().enumerate() {
                    span { key: "{index}", class: segment.highlight.class(), "{segment.text}" }
                }
            }
        }
    }
}

/// Left monitor: vulnerability scanner output, reshuffled on a timer.
#[component]
fn ScanMonitor() -> Element {
    let mut feed = use_signal(ScanFeed::new);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(SCAN_PERIOD).await;
                feed.write().tick(&mut rand::rng());
            }
        });
    });

    rsx! {
        div { class: "monitor scan",
            div { class: "monitor-header",
                span { class: "monitor-title", "VULN_SCANNER" }
                StatusBadge { label: "SCANNING".to_string(), tone: BadgeTone::Live }
            }
            div { class: "monitor-body",
                for (index, line) in feed.read().lines().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: LineTone::of(line).class(),
                        "{line}"
                    }
                }
            }
        }
    }
}

/// Centre monitor: a static network diagram with a few headline numbers.
#[component]
fn NeuralMonitor() -> Element {
    rsx! {
        div { class: "monitor neural",
            div { class: "monitor-header",
                span { class: "monitor-title", "NEURAL_NET" }
                StatusBadge { label: "TRAINING".to_string(), tone: BadgeTone::Settled }
            }
            svg {
                class: "neural-graph",
                view_box: "0 0 320 200",
                for (index, (from, to)) in NEURAL_EDGES.iter().enumerate() {
                    if let (Some(a), Some(b)) = (NeuralNode::find(*from), NeuralNode::find(*to)) {
                        line {
                            key: "edge-{index}",
                            x1: "{a.x}",
                            y1: "{a.y}",
                            x2: "{b.x}",
                            y2: "{b.y}",
                            class: "neural-edge",
                        }
                    }
                }
                for node in NEURAL_NODES.iter() {
                    circle {
                        key: "node-{node.id}",
                        cx: "{node.x}",
                        cy: "{node.y}",
                        r: if node.layer == Layer::Output { "9" } else { "7" },
                        fill: node.layer.color(),
                        class: "neural-node",
                    }
                }
            }
            div { class: "neural-stats",
                for (label, value) in NEURAL_STATS.iter() {
                    div { key: "{label}", class: "neural-stat",
                        span { class: "stat-label", "{label}" }
                        span { class: "stat-value", "{value}" }
                    }
                }
            }
        }
    }
}

/// Right monitor: a scripted conversation that keeps its last few lines.
#[component]
fn ChatMonitor() -> Element {
    let mut feed = use_signal(ChatFeed::new);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(CHAT_PERIOD).await;
                if !feed.write().tick() {
                    tracing::trace!("Chat script wrapped");
                }
            }
        });
    });

    rsx! {
        div { class: "monitor chat",
            div { class: "monitor-header",
                span { class: "monitor-title", "J.A.R.V.I.S" }
                StatusBadge { label: "ONLINE".to_string(), tone: BadgeTone::Live }
            }
            div { class: "monitor-body",
                for (index, line) in feed.read().visible().iter().enumerate() {
                    div { key: "{index}", class: line.role.class(), {line.display()} }
                }
            }
        }
    }
}

#[component]
fn ServerRack() -> Element {
    rsx! {
        div { class: "server-rack",
            for unit in 0..6u32 {
                {
                    let fast = unit * 180;
                    let slow = unit * 240;
                    rsx! {
                        div { key: "{unit}", class: "rack-unit",
                            span { class: "rack-led", style: "--led-delay: {fast}ms" }
                            span { class: "rack-led dim", style: "--led-delay: {slow}ms" }
                            span { class: "rack-vent" }
                        }
                    }
                }
            }
        }
    }
}
