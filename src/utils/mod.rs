//! Shared utilities for the Markbook validators.
//!
//! - [`checks`]: required/range/format helpers that record onto a `ValidationResult`
//! - [`dates`]: lenient date parsing for record date fields
//! - [`grading`]: grade-from-marks lookup, SGPA and CGPA

pub mod checks;
pub mod dates;
pub mod grading;
