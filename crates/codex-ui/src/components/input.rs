//! Input Field Components
//!
//! Text inputs following the glass-panel design.
//! Features:
//! - Transparent background with subtle border
//! - Cyan glow on focus
//! - Red border while the value is rejected

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name, posted with the form
    #[props(default)]
    pub name: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Validation message; marks the field invalid when set
    #[props(default)]
    pub error: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         placeholder: "enter your email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = field_class(props.error.is_some(), props.class.as_deref());

    rsx! {
        div { class: "form-field",
            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                name: props.name.as_deref(),
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                span { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}

fn field_class(invalid: bool, extra: Option<&str>) -> String {
    let base = if invalid { "input-field invalid" } else { "input-field" };
    super::button::join_classes(base, extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_marker_class() {
        assert_eq!(field_class(false, None), "input-field");
        assert_eq!(field_class(true, None), "input-field invalid");
        assert_eq!(field_class(true, Some("pill")), "input-field invalid pill");
    }
}
