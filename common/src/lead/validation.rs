use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::normalize::NormalizedLead;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A form field, used to point the user back at the input that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Mobile,
    Email,
    Date,
    Time,
}

impl Field {
    /// Suffix used to derive the field's DOM id from its form id.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Date => "date",
            Field::Time => "time",
        }
    }
}

/// Why a submission was rejected before reaching the network.
/// The `Display` text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name (at least 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameTooShort => Field::Name,
            ValidationError::InvalidMobile => Field::Mobile,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

/// Runs the checks in order (name, mobile, email) and stops at the first
/// failure. Email is only checked when one was entered.
pub fn validate(lead: &NormalizedLead) -> Result<(), ValidationError> {
    if lead.name_chars < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if !MOBILE_RE.is_match(&lead.mobile) {
        return Err(ValidationError::InvalidMobile);
    }
    if let Some(email) = &lead.email {
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lead::LeadFields;

    fn check(fields: LeadFields) -> Result<(), ValidationError> {
        validate(&NormalizedLead::from_fields(&fields))
    }

    #[test]
    fn accepts_formatted_ten_digit_mobile() {
        assert_eq!(check(LeadFields::new("Jo", "98765-43210 ")), Ok(()));
        assert_eq!(check(LeadFields::new("Jo", "(987) 654 3210")), Ok(()));
    }

    #[test]
    fn mobile_must_be_exactly_ten_digits() {
        for mobile in ["", "12345", "987654321", "98765432101", "+91 98765 43210"] {
            assert_eq!(
                check(LeadFields::new("Jo", mobile)),
                Err(ValidationError::InvalidMobile),
                "{mobile:?}"
            );
        }
    }

    #[test]
    fn mobile_acceptance_matches_digit_count() {
        let samples = [
            "9876543210",
            "98 76 54 32 10",
            "a9b8c7d6e5f4g3h2i1j0",
            "987654321",
            "98765432100",
            "------",
            "0000000000",
        ];
        for sample in samples {
            let digit_count = sample.chars().filter(char::is_ascii_digit).count();
            let accepted = check(LeadFields::new("Jo", sample)).is_ok();
            assert_eq!(accepted, digit_count == 10, "{sample:?}");
        }
    }

    #[test]
    fn name_shorter_than_two_is_rejected_first() {
        assert_eq!(
            check(LeadFields::new("A", "12345")),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            check(LeadFields::new("   ", "9876543210")),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            check(LeadFields::new(" B ", "9876543210")),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert_eq!(check(LeadFields::new("é", "9876543210")), Err(ValidationError::NameTooShort));
        assert_eq!(check(LeadFields::new("李明", "9876543210")), Ok(()));
    }

    #[test]
    fn email_is_optional() {
        assert_eq!(check(LeadFields::new("Jo", "9876543210").with_email("")), Ok(()));
    }

    #[test]
    fn email_checked_when_present() {
        assert_eq!(
            check(LeadFields::new("Jo", "9876543210").with_email("jo@example.in")),
            Ok(())
        );
        for bad in ["jo", "jo@", "jo@example", "jo example@x.in", "@x.in"] {
            assert_eq!(
                check(LeadFields::new("Jo", "9876543210").with_email(bad)),
                Err(ValidationError::InvalidEmail),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn mobile_checked_before_email() {
        assert_eq!(
            check(LeadFields::new("Jo", "1").with_email("nope")),
            Err(ValidationError::InvalidMobile)
        );
    }

    #[test]
    fn errors_point_at_their_field() {
        assert_eq!(ValidationError::NameTooShort.field(), Field::Name);
        assert_eq!(ValidationError::InvalidMobile.field().key(), "mobile");
    }
}
