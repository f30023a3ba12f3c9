//! # Markbook Core
//!
//! Core types shared by every Markbook crate.
//!
//! - [`validation`]: the [`ValidationResult`] accumulator returned by every validator,
//!   together with its error/warning entries and the closed [`ValidationErrorType`] taxonomy
//! - [`serde`]: custom serde helpers for loosely-typed incoming records
//!
//! # Example
//!
//! ```
//! use markbook_core::{ValidationErrorType, ValidationResult};
//!
//! let mut result = ValidationResult::new();
//! result.add_error("email", ValidationErrorType::RequiredField, "Email is required");
//! result.add_warning("attendance", "Attendance is below the minimum requirement");
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error_messages(), vec!["Email is required"]);
//! ```

pub mod serde;
pub mod validation;

// Re-export commonly used types at crate root
pub use validation::{ValidationError, ValidationErrorType, ValidationResult, ValidationWarning};
