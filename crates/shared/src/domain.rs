use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Room requirement offered by the enquiry form. Serializes on the wire
/// as the bare variant name (`"Single"`, `"Double"`, `"Triple"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Requirement {
    #[default]
    Single,
    Double,
    Triple,
}

impl Requirement {
    pub const ALL: [Requirement; 3] = [
        Requirement::Single,
        Requirement::Double,
        Requirement::Triple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Requirement::Single => "Single",
            Requirement::Double => "Double",
            Requirement::Triple => "Triple",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown requirement '{0}'; expected single, double, or triple")]
pub struct ParseRequirementError(String);

impl FromStr for Requirement {
    type Err = ParseRequirementError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Requirement::Single),
            "double" => Ok(Requirement::Double),
            "triple" => Ok(Requirement::Triple),
            _ => Err(ParseRequirementError(raw.to_string())),
        }
    }
}

/// Where a submit attempt currently stands. Transitions happen only
/// inside the controller's submit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Done,
    Error,
}

/// Current contents of the enquiry form. Every field is always present;
/// resetting restores the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub requirement: Requirement,
    pub address: String,
    pub message: String,
}

/// A single field update, last-write-wins per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FullName(String),
    Phone(String),
    Email(String),
    Requirement(Requirement),
    Address(String),
    Message(String),
}

impl EnquiryForm {
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::FullName(value) => self.full_name = value,
            FieldEdit::Phone(value) => self.phone = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Requirement(value) => self.requirement = value,
            FieldEdit::Address(value) => self.address = value,
            FieldEdit::Message(value) => self.message = value,
        }
    }
}

pub const PHONE_MIN_LEN: usize = 8;
pub const PHONE_MAX_LEN: usize = 15;

/// Input-level phone constraint: 8-15 characters drawn from digits,
/// `+`, and space. Presentation layers check this before invoking
/// submit; the controller never does.
pub fn phone_matches_pattern(phone: &str) -> bool {
    let len = phone.chars().count();
    (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_parses_case_insensitively() {
        assert_eq!(
            "single".parse::<Requirement>().unwrap(),
            Requirement::Single
        );
        assert_eq!(
            "Double".parse::<Requirement>().unwrap(),
            Requirement::Double
        );
        assert_eq!(
            " TRIPLE ".parse::<Requirement>().unwrap(),
            Requirement::Triple
        );
        assert!("quad".parse::<Requirement>().is_err());
    }

    #[test]
    fn requirement_defaults_to_single() {
        assert_eq!(Requirement::default(), Requirement::Single);
        assert_eq!(EnquiryForm::default().requirement, Requirement::Single);
    }

    #[test]
    fn apply_is_last_write_wins_per_field() {
        let mut form = EnquiryForm::default();
        form.apply(FieldEdit::FullName("J".to_string()));
        form.apply(FieldEdit::FullName("Jane Doe".to_string()));
        form.apply(FieldEdit::Phone("+91 9876543210".to_string()));
        form.apply(FieldEdit::Requirement(Requirement::Double));

        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.phone, "+91 9876543210");
        assert_eq!(form.requirement, Requirement::Double);
        // Untouched fields keep their defaults.
        assert_eq!(form.email, "");
        assert_eq!(form.address, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn phone_pattern_accepts_digits_plus_and_space() {
        assert!(phone_matches_pattern("+91 9876543210"));
        assert!(phone_matches_pattern("98765432"));
        assert!(phone_matches_pattern("+12 345 678 901"));
    }

    #[test]
    fn phone_pattern_rejects_bad_length_and_characters() {
        assert!(!phone_matches_pattern("1234567"));
        assert!(!phone_matches_pattern("1234567890123456"));
        assert!(!phone_matches_pattern("98-76-54-32"));
        assert!(!phone_matches_pattern("phone me"));
        assert!(!phone_matches_pattern(""));
    }
}
