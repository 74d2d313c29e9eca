use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;
use super::record::Record;

/// Validation failures for registration fields.
///
/// The `Display` strings are the exact messages shown beneath a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Username is required")]
    UsernameRequired,
    #[error("Valid email required")]
    InvalidEmail,
    #[error("Min 6 characters")]
    PasswordTooShort,
    #[error("Valid phone required")]
    InvalidPhone,
    #[error("Country is required")]
    CountryRequired,
    #[error("City is required")]
    CityRequired,
    #[error("Invalid PAN")]
    InvalidPan,
    #[error("Aadhaar must be 12 digits")]
    InvalidAadhaar,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid hardcoded regex"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid hardcoded regex"));

/// Validates a single field of `record`.
///
/// Pure over the record's current values. Phone and aadhaar check length
/// only while PAN is format-strict; the asymmetry is deliberate.
pub fn validate_field(field: Field, record: &Record) -> Result<(), ValidationError> {
    let value = record.get(field);
    match field {
        Field::FirstName if value.is_empty() => Err(ValidationError::FirstNameRequired),
        Field::LastName if value.is_empty() => Err(ValidationError::LastNameRequired),
        Field::Username if value.is_empty() => Err(ValidationError::UsernameRequired),
        Field::Email if !EMAIL_RE.is_match(value) => Err(ValidationError::InvalidEmail),
        Field::Password if value.chars().count() < 6 => Err(ValidationError::PasswordTooShort),
        Field::Phone if value.chars().count() < 10 => Err(ValidationError::InvalidPhone),
        Field::Country if value.is_empty() => Err(ValidationError::CountryRequired),
        Field::City if value.is_empty() => Err(ValidationError::CityRequired),
        Field::Pan if !PAN_RE.is_match(value) => Err(ValidationError::InvalidPan),
        Field::Aadhaar if value.chars().count() != 12 => Err(ValidationError::InvalidAadhaar),
        // CountryCode has no rule; every other field passed its check above.
        _ => Ok(()),
    }
}

/// Derived errors map: field → current validation failure.
///
/// Recomputed from the record on every use; never stored across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Errors {
    failures: HashMap<Field, ValidationError>,
}

impl Errors {
    /// Returns the failure for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.failures.get(&field)
    }

    /// True iff no field has a failure. Independent of any touched state.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validates every field of `record`.
pub fn validate(record: &Record) -> Errors {
    let failures = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, record).err().map(|e| (field, e)))
        .collect();
    Errors { failures }
}
