//! Toggle Pills Component
//!
//! Segmented control of mutually exclusive options, e.g. the dataset
//! switch above the research charts.

use dioxus::prelude::*;

/// Properties for the TogglePills component
#[derive(Clone, PartialEq, Props)]
pub struct TogglePillsProps {
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Index of the selected option
    pub selected: usize,
    /// Handler called with the clicked index
    pub on_select: EventHandler<usize>,
    /// Accessible name of the group
    #[props(default = "Options".to_string())]
    pub label: String,
}

/// Displays a row of selectable pills, one of which is always selected
///
/// # Example
///
/// ```rust,ignore
/// let mut dataset = use_signal(|| 0usize);
///
/// rsx! {
///     TogglePills {
///         options: vec!["Malimg".to_string(), "Malevis".to_string()],
///         selected: dataset(),
///         on_select: move |i| dataset.set(i),
///     }
/// }
/// ```
#[component]
pub fn TogglePills(props: TogglePillsProps) -> Element {
    rsx! {
        div {
            class: "toggle-pills",
            role: "radiogroup",
            "aria-label": "{props.label}",
            for (index, option) in props.options.iter().enumerate() {
                {
                    let is_selected = index == props.selected;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{index}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(index),
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_pill_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }
}
