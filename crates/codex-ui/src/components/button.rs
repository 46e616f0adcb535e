//! Button Components
//!
//! Button styles used across the site:
//! - Glow: gradient border with a pulsing halo (subscribe, CTA)
//! - Danger: red alert button ("KILL ULTRON")
//! - Ghost: borderless text button (menu toggle, collapsibles)
//! - Float: round floating action (scroll to top)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Gradient border with glow on hover
    #[default]
    Glow,
    /// Red alert action
    Danger,
    /// Subtle/secondary action
    Ghost,
    /// Round floating button pinned to the viewport
    Float,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Glow => "btn-glow",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Float => "btn-float",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         onclick: move |_| kill_ultron(),
///         "KILL ULTRON"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.as_deref(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Hamburger / close toggle for the mobile menu
#[component]
pub fn MenuToggle(open: bool, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "menu-toggle",
            "aria-label": "Toggle menu",
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |_| ontoggle.call(()),
            if open { "\u{2715}" } else { "\u{2630}" }
        }
    }
}

/// Base class plus optional extras, space separated
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
