//! Per-field validation rules for the contact form.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PHONE_REQUIRED: &str = "Phone is required";

// Loose on purpose: anything@anything.anything, no whitespace.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown contact field {0:?}")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "message" => Ok(Field::Message),
            other => Err(FieldParseError(other.to_string())),
        }
    }
}

/// Returns the error message for `value` in `field`, or `None` when valid.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    match field {
        Field::Name if blank => Some(NAME_REQUIRED),
        Field::Phone if blank => Some(PHONE_REQUIRED),
        Field::Email if blank => Some(EMAIL_REQUIRED),
        Field::Email if !EMAIL_PATTERN.is_match(value) => Some(EMAIL_INVALID),
        _ => None,
    }
}
