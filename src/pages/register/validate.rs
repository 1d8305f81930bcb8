//! Registration form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::state::{RegisterState, TextField};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-\(\)]{10,}$").unwrap());
static CAMEL_HUMP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {} field.", humanize(.field))]
    Missing { field: &'static str },
    #[error("Please fill in the team member {index} name field.")]
    MissingMember { index: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// `teamLeader` -> `team leader`.
pub fn humanize(field: &str) -> String {
    CAMEL_HUMP_RE.replace_all(field, " $1").to_lowercase()
}

/// Fields that must be non-blank, in the order they are checked.
fn required(form: &RegisterState) -> [(&'static str, &str); 9] {
    [
        (TextField::TeamName.key(), form.text(TextField::TeamName)),
        (TextField::TeamLeader.key(), form.text(TextField::TeamLeader)),
        (TextField::Email.key(), form.text(TextField::Email)),
        (TextField::Phone.key(), form.text(TextField::Phone)),
        (TextField::College.key(), form.text(TextField::College)),
        (TextField::Department.key(), form.text(TextField::Department)),
        ("year", form.year.value()),
        ("teamSize", form.team_size.value()),
        ("category", form.selector.category.value()),
    ]
}

/// First problem with the form, if any.
pub fn validate(form: &RegisterState) -> Result<(), ValidationError> {
    for (field, value) in required(form) {
        if value.trim().is_empty() {
            return Err(ValidationError::Missing { field });
        }
    }
    if let Some(i) = form.members.iter().position(|m| m.trim().is_empty()) {
        return Err(ValidationError::MissingMember { index: i + 2 });
    }
    if !EMAIL_RE.is_match(form.text(TextField::Email)) {
        return Err(ValidationError::InvalidEmail);
    }
    if !PHONE_RE.is_match(form.text(TextField::Phone)) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}
