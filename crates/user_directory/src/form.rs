//! Add-user form draft and validation.
//!
//! Errors are computed from the current field values on every call, but they
//! only become visible once the user has attempted a submit.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[allow(clippy::unwrap_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field-level validation failure. `Display` is the message shown under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email")]
    InvalidEmail,
}

/// Validation outcome per field. `company` is never validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Values handed to the submit callback, exactly as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Uncommitted form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    touched: bool,
}

impl UserDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submit has been attempted.
    #[must_use]
    pub fn touched(&self) -> bool {
        self.touched
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        FieldErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
        }
    }

    /// Errors to display; empty until the first submit attempt.
    #[must_use]
    pub fn visible_errors(&self) -> FieldErrors {
        if self.touched {
            self.errors()
        } else {
            FieldErrors::default()
        }
    }

    /// Marks the draft touched and returns the submission if every field is
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns the field errors when validation fails. The draft keeps its
    /// values so the user can correct them.
    pub fn submit(&mut self) -> Result<NewUser, FieldErrors> {
        self.touched = true;
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
        })
    }
}

/// # Errors
///
/// [`ValidationError::NameRequired`] when blank.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::EmailRequired`] when blank, otherwise
/// [`ValidationError::InvalidEmail`] when not shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{FieldErrors, NewUser, UserDraft, ValidationError, validate_email};
    use rstest::rstest;

    fn draft(name: &str, email: &str, company: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            ..UserDraft::default()
        }
    }

    #[test]
    fn errors_hidden_until_submit() {
        let mut form = draft("", "", "");
        assert!(!form.touched());
        assert!(form.visible_errors().is_empty());
        assert!(!form.errors().is_empty());

        assert!(form.submit().is_err());
        assert!(form.touched());
        assert_eq!(
            form.visible_errors(),
            FieldErrors {
                name: Some(ValidationError::NameRequired),
                email: Some(ValidationError::EmailRequired),
            }
        );
    }

    #[test]
    fn empty_name_blocks_submit() {
        let mut form = draft("   ", "ann@example.com", "");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::NameRequired));
        assert_eq!(errors.name.unwrap().to_string(), "Name is required");
        assert_eq!(errors.email, None);
    }

    #[test]
    fn valid_draft_submits_values_as_entered() {
        let mut form = draft("Ann", "ann@example.com", "");
        assert_eq!(
            form.submit(),
            Ok(NewUser {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                company: String::new(),
            })
        );
    }

    #[test]
    fn errors_track_edits_after_touch() {
        let mut form = draft("", "bob@x", "");
        assert!(form.submit().is_err());
        assert_eq!(form.visible_errors().email, Some(ValidationError::InvalidEmail));

        form.name = "Bob".to_string();
        form.email = "bob@x.io".to_string();
        assert!(form.visible_errors().is_empty());
    }

    #[rstest]
    #[case("", Err(ValidationError::EmailRequired))]
    #[case("   ", Err(ValidationError::EmailRequired))]
    #[case("bob@x", Err(ValidationError::InvalidEmail))]
    #[case("bob", Err(ValidationError::InvalidEmail))]
    #[case("bob @x.io", Err(ValidationError::InvalidEmail))]
    #[case("a@b@c.io", Err(ValidationError::InvalidEmail))]
    #[case("@x.io", Err(ValidationError::InvalidEmail))]
    #[case(" ann@example.com", Err(ValidationError::InvalidEmail))]
    #[case("ann@example.com", Ok(()))]
    #[case("a.b@mail.example.co", Ok(()))]
    fn email_rules(#[case] input: &str, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_email(input), expected);
    }

    #[test]
    fn invalid_email_message() {
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email");
        assert_eq!(ValidationError::EmailRequired.to_string(), "Email is required");
    }
}
