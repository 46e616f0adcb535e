//! Research Sections
//!
//! One section per project, collapsible write-ups, and the results
//! panel with its dataset switch.

use codex_core::content::{Dataset, Project, Results, PROJECTS};
use codex_ui::TogglePills;
use dioxus::prelude::*;

/// Left-hand index that stays in view while scrolling.
#[component]
pub fn ProjectIndex() -> Element {
    rsx! {
        nav { class: "project-index",
            span { class: "project-index-title", "INDEX" }
            for project in PROJECTS.iter() {
                a {
                    key: "{project.id}",
                    class: "project-index-link",
                    href: "#{project.id}",
                    style: "--accent: {project.accent}",
                    span { class: "project-index-label", "{project.index_label}" }
                    span { class: "project-index-name", {project.display_title()} }
                }
            }
        }
    }
}

#[component]
pub fn ProjectSection(index: usize) -> Element {
    let Some(project) = PROJECTS.get(index) else {
        tracing::warn!(index, "No project at index");
        return rsx! {};
    };
    let title = project.display_title();
    let eyebrow = project.eyebrow();

    rsx! {
        section {
            class: "project",
            id: "{project.id}",
            style: "--accent: {project.accent}",

            span { class: "project-eyebrow", "{eyebrow}" }
            h2 { class: "project-title", "{title}" }
            ProjectMeta { index }

            if let Some(image) = project.image {
                img { class: "project-image", src: "{image}", alt: title }
            }

            p { class: "project-summary", "{project.summary}" }

            if !project.contributions.is_empty() {
                Collapsible { title: "Key Contributions".to_string(),
                    ul {
                        for item in project.contributions.iter() {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }

            if !project.questions.is_empty() {
                Collapsible { title: "Research Questions".to_string(),
                    for qa in project.questions.iter() {
                        div { key: "{qa.question}", class: "qa",
                            h4 { "{qa.question}" }
                            p { "{qa.answer}" }
                        }
                    }
                }
            }

            if let Some(results) = project.results {
                ResultsPanel { results }
            }

            if !project.additional.is_empty() {
                Collapsible { title: "Additional Notes".to_string(),
                    ul {
                        for note in project.additional.iter() {
                            li { key: "{note}", "{note}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectMeta(index: usize) -> Element {
    let Some(project) = PROJECTS.get(index) else {
        return rsx! {};
    };
    let rows = meta_rows(project);

    rsx! {
        if !rows.is_empty() {
            dl { class: "project-meta",
                for (label, value) in rows {
                    div { key: "{label}", class: "project-meta-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}

fn meta_rows(project: &Project) -> Vec<(&'static str, &'static str)> {
    [
        ("Lab", project.lab),
        ("Supervisor", project.supervisor),
        ("Publication", project.publication),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

/// Heading that shows or hides its body.
#[component]
fn Collapsible(title: String, children: Element) -> Element {
    let mut expanded = use_signal(|| false);

    rsx! {
        div { class: if expanded() { "collapsible open" } else { "collapsible" },
            button {
                class: "collapsible-header",
                "aria-expanded": if expanded() { "true" } else { "false" },
                onclick: move |_| expanded.set(!expanded()),
                span { "{title}" }
                span { class: "collapsible-chevron", if expanded() { "−" } else { "+" } }
            }
            if expanded() {
                div { class: "collapsible-body", {children} }
            }
        }
    }
}

#[component]
fn ResultsPanel(results: Results) -> Element {
    let mut dataset = use_signal(Dataset::default);
    let current = dataset();
    let selected = Dataset::ALL.iter().position(|d| *d == current).unwrap_or(0);

    rsx! {
        div { class: "results",
            div { class: "results-header",
                h3 { "Results" }
                TogglePills {
                    options: Dataset::ALL.iter().map(|d| d.label().to_string()).collect(),
                    selected,
                    label: "Dataset".to_string(),
                    on_select: move |i: usize| {
                        if let Some(next) = Dataset::ALL.get(i) {
                            dataset.set(*next);
                        }
                    },
                }
            }

            div { class: "bar-legend",
                for series in results.series.iter() {
                    span { key: "{series.name}", class: "legend-item",
                        span { class: "legend-swatch", style: "background: {series.color}" }
                        "{series.name}"
                    }
                }
            }

            div { class: "bar-chart",
                for group in results.bars(current).iter() {
                    div { key: "{group.condition}", class: "bar-group",
                        div { class: "bars",
                            for (series, value) in results.series.iter().zip(group.values) {
                                div {
                                    key: "{series.name}",
                                    class: "bar",
                                    style: "height: {value}%; background: {series.color};",
                                    title: "{series.name}: {value}%",
                                    span { class: "bar-value", "{value}" }
                                }
                            }
                        }
                        span { class: "bar-condition", "{group.condition}" }
                    }
                }
            }

            table { class: "pattern-table",
                thead {
                    tr {
                        th { "Metric" }
                        for column in Results::PATTERN_COLUMNS.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    for row in results.patterns.iter() {
                        tr { key: "{row.metric}",
                            td { "{row.metric}" }
                            for (column, value) in row.values(current).iter().enumerate() {
                                td {
                                    key: "{column}",
                                    class: if row.highlight_qni && column == Results::QNI_COLUMN { "highlight" } else { "" },
                                    "{value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_rows_skip_missing_fields() {
        for project in PROJECTS.iter() {
            let rows = meta_rows(project);
            let expected = [project.lab, project.supervisor, project.publication]
                .iter()
                .filter(|v| v.is_some())
                .count();
            assert_eq!(rows.len(), expected);
        }
    }
}
