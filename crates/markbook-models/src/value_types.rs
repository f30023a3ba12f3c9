//! Format-checked value types for record fields.
//!
//! Each type can only be constructed from a string that has the right shape,
//! so holding one is proof the format check passed. Validators use them to
//! decide between a clean field and an `INVALID_FORMAT` error.
//!
//! # Example
//!
//! ```
//! use markbook_models::value_types::{CourseCode, Email, RollNumber};
//!
//! assert!("student@example.com".parse::<Email>().is_ok());
//! assert!("21CS042".parse::<RollNumber>().is_ok());
//! assert!("CS101".parse::<CourseCode>().is_ok());
//! assert!("cs101".parse::<CourseCode>().is_err());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    InvalidEmail(String),
    InvalidRollNumber(String),
    InvalidCourseCode(String),
    InvalidPhoneNumber(String),
    InvalidPinCode(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            Self::InvalidRollNumber(msg) => write!(f, "Invalid roll number: {}", msg),
            Self::InvalidCourseCode(msg) => write!(f, "Invalid course code: {}", msg),
            Self::InvalidPhoneNumber(msg) => write!(f, "Invalid phone number: {}", msg),
            Self::InvalidPinCode(msg) => write!(f, "Invalid pincode: {}", msg),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address, checked with the validator crate's rules.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }
        if !email.as_str().validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part (after @) of the email.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Pattern-checked values
// ============================================================================

/// Defines a string newtype whose contents must fully match a regex.
macro_rules! define_pattern_type {
    (
        $(#[$meta:meta])*
        $name:ident, $pattern:literal, $error:ident, $what:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            /// The pattern a valid value must match.
            pub const PATTERN: &'static str = $pattern;

            pub fn new(value: impl Into<String>) -> Result<Self, ValueTypeError> {
                static RE: LazyLock<Regex> =
                    LazyLock::new(|| Regex::new($pattern).expect("valid regex"));

                let value = value.into();
                if RE.is_match(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValueTypeError::$error(format!(
                        "'{}' is not a valid {}",
                        value, $what
                    )))
                }
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValueTypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueTypeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_pattern_type!(
    /// University roll number: admission year, branch code, serial (e.g. `21CS042`).
    RollNumber, r"^[0-9]{2}[A-Z]{2}[0-9]{3}$", InvalidRollNumber, "roll number"
);

define_pattern_type!(
    /// Course code: department letters and a three-digit number (e.g. `CS101`).
    CourseCode, r"^[A-Z]{2}[0-9]{3}$", InvalidCourseCode, "course code"
);

define_pattern_type!(
    /// Ten-digit phone number.
    PhoneNumber, r"^[0-9]{10}$", InvalidPhoneNumber, "10-digit phone number"
);

define_pattern_type!(
    /// Six-digit postal code.
    PinCode, r"^[0-9]{6}$", InvalidPinCode, "6-digit pincode"
);
