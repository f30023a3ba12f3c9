//! Field checks shared by the entity validators.
//!
//! Each helper records at most one error for the field it inspects and tells
//! the caller whether the field is usable for the next pass. A field that
//! failed a check is never reported again for a different reason.

use markbook_core::{ValidationErrorType, ValidationResult};
use serde_json::json;
use tracing::debug;

/// Require a text field, returning its trimmed value when present.
pub fn require_text<'a>(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            result.add_error(
                field,
                ValidationErrorType::RequiredField,
                format!("{} is required", label),
            );
            None
        }
    }
}

/// Require an ID field. Blank IDs count as missing.
pub fn require_id<T: AsRef<str>>(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: Option<&T>,
) -> bool {
    require_text(result, field, label, value.map(|v| v.as_ref())).is_some()
}

/// Require a numeric field. `0` is present; `NaN` and infinities are not.
pub fn require_number(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: Option<f64>,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            result.add_error(
                field,
                ValidationErrorType::RequiredField,
                format!("{} is required", label),
            );
            None
        }
    }
}

/// Treat a non-finite optional number as absent.
#[inline]
pub fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Check `min <= value <= max`.
pub fn check_range(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
) -> bool {
    if value < min || value > max {
        result.add_error_with_details(
            field,
            ValidationErrorType::OutOfRange,
            format!("{} must be between {} and {}", label, min, max),
            details(json!({ "min": min, "max": max, "value": value })),
        );
        return false;
    }
    true
}

/// Check that a count-like value has no fractional part.
pub fn check_whole(result: &mut ValidationResult, field: &str, label: &str, value: f64) -> bool {
    if value.fract() != 0.0 {
        result.add_error(
            field,
            ValidationErrorType::InvalidFormat,
            format!("{} must be a whole number", label),
        );
        return false;
    }
    true
}

/// Whole-number check followed by a range check.
pub fn check_whole_in_range(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
) -> bool {
    check_whole(result, field, label, value) && check_range(result, field, label, value, min, max)
}

/// Whole-number check followed by a lower-bound check.
pub fn check_whole_at_least(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: f64,
    min: f64,
) -> bool {
    if !check_whole(result, field, label, value) {
        return false;
    }
    if value < min {
        result.add_error_with_details(
            field,
            ValidationErrorType::OutOfRange,
            format!("{} must be at least {}", label, min),
            details(json!({ "min": min, "value": value })),
        );
        return false;
    }
    true
}

/// Build a details map from a JSON object literal.
pub fn details(value: serde_json::Value) -> markbook_core::validation::Details {
    match value {
        serde_json::Value::Object(map) => map,
        _ => markbook_core::validation::Details::new(),
    }
}

/// Log the outcome of a validation call and hand the result back.
pub fn finish(entity: &'static str, result: ValidationResult) -> ValidationResult {
    debug!(
        entity,
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "Validation complete"
    );
    result
}
