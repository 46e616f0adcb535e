//! Footer contact form.
//!
//! The form is a plain HTML POST to a third-party collection endpoint;
//! the page does not own the protocol. The only logic here is a sanity
//! check on the address before the submission is allowed through.

use crate::error::{CodexError, CodexResult};

/// Default third-party endpoint (Formspree form).
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mlgwboya";

/// Name of the posted field.
pub const EMAIL_FIELD: &str = "email";

/// Where and how the footer form posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscribeForm {
    pub endpoint: String,
}

impl SubscribeForm {
    pub const METHOD: &'static str = "POST";

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for SubscribeForm {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ENDPOINT)
    }
}

/// Trim and check a visitor address.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, non-empty local
/// part, a dotted domain with no empty labels, no whitespace.
pub fn validate_email(input: &str) -> CodexResult<String> {
    let email = input.trim();
    if email.is_empty() {
        return Err(CodexError::InvalidEmail("address is empty".to_string()));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(CodexError::InvalidEmail("address contains whitespace".to_string()));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(CodexError::InvalidEmail("missing @".to_string()));
    };
    if local.is_empty() {
        return Err(CodexError::InvalidEmail("missing local part".to_string()));
    }
    if domain.contains('@') {
        return Err(CodexError::InvalidEmail("more than one @".to_string()));
    }
    let dotted = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    if !dotted {
        return Err(CodexError::InvalidEmail(format!("bad domain: {}", domain)));
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        assert_eq!(validate_email("  visitor@lab.io ").unwrap(), "visitor@lab.io");
        assert_eq!(validate_email("a.b+c@mail.example.org").unwrap(), "a.b+c@mail.example.org");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "   ", "no-at.example", "@lab.io", "a@b@c.io", "a@nodot", "a@.io", "a@lab.", "a@lab..io", "a@.lab.io", "a b@lab.io"] {
            assert!(
                matches!(validate_email(bad), Err(CodexError::InvalidEmail(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_form_posts_to_formspree() {
        let form = SubscribeForm::default();
        assert_eq!(form.endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(SubscribeForm::METHOD, "POST");
    }
}
