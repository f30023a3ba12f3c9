//! Validation result accumulator.
//!
//! Every validator in Markbook reports domain-rule violations as data rather than
//! failing: it builds a [`ValidationResult`], records zero or more errors and
//! warnings on it, and hands it back to the caller. Errors block persistence,
//! warnings are advisory.
//!
//! The result stays valid until the first error is recorded; nothing else can
//! flip it, so `is_valid() == errors().is_empty()` always holds. A deserialized
//! result derives `isValid` from its errors and ignores the stored flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form structured context attached to an error or warning.
pub type Details = Map<String, Value>;

/// Closed taxonomy of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorType {
    RequiredField,
    InvalidFormat,
    OutOfRange,
    BusinessRuleViolation,
    DuplicateEntry,
    InvalidReference,
    WorkflowViolation,
    PermissionDenied,
}

impl ValidationErrorType {
    /// The wire name of the error type, e.g. `REQUIRED_FIELD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredField => "REQUIRED_FIELD",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::BusinessRuleViolation => "BUSINESS_RULE_VIOLATION",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::WorkflowViolation => "WORKFLOW_VIOLATION",
            Self::PermissionDenied => "PERMISSION_DENIED",
        }
    }
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blocking validation failure on a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    #[serde(rename = "type")]
    pub error_type: ValidationErrorType,
    pub message: String,
    pub details: Details,
    pub timestamp: DateTime<Utc>,
}

/// A non-blocking advisory on a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub details: Details,
    pub timestamp: DateTime<Utc>,
}

/// Ordered collection of errors and warnings produced by one validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredResult")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

/// Wire form of a result; `isValid` is not trusted on the way in.
#[derive(Deserialize)]
struct StoredResult {
    #[serde(default)]
    errors: Vec<ValidationError>,
    #[serde(default)]
    warnings: Vec<ValidationWarning>,
}

impl From<StoredResult> for ValidationResult {
    fn from(stored: StoredResult) -> Self {
        Self {
            is_valid: stored.errors.is_empty(),
            errors: stored.errors,
            warnings: stored.warnings,
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    /// Create an empty, valid result.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error. The result becomes invalid.
    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        error_type: ValidationErrorType,
        message: impl Into<String>,
    ) {
        self.add_error_with_details(field, error_type, message, Details::new());
    }

    /// Record an error carrying structured details.
    pub fn add_error_with_details(
        &mut self,
        field: impl Into<String>,
        error_type: ValidationErrorType,
        message: impl Into<String>,
        details: Details,
    ) {
        self.errors.push(ValidationError {
            field: field.into(),
            error_type,
            message: message.into(),
            details,
            timestamp: Utc::now(),
        });
        self.is_valid = false;
    }

    /// Record a warning. Validity is unaffected.
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add_warning_with_details(field, message, Details::new());
    }

    /// Record a warning carrying structured details.
    pub fn add_warning_with_details(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        details: Details,
    ) {
        self.warnings.push(ValidationWarning {
            field: field.into(),
            message: message.into(),
            details,
            timestamp: Utc::now(),
        });
    }

    /// Append every entry of `other`, keeping insertion order.
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.errors.is_empty() {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[inline]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Errors recorded against `field`, in insertion order.
    pub fn errors_by_field<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Errors of the given type, in insertion order.
    pub fn errors_by_type(
        &self,
        error_type: ValidationErrorType,
    ) -> impl Iterator<Item = &ValidationError> + '_ {
        self.errors.iter().filter(move |e| e.error_type == error_type)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }
}
