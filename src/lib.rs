//! # Markbook
//!
//! Validation and derived metrics for university grade records: students,
//! courses, exams, marks, grades and revaluation requests, plus the results
//! workflows they move through.
//!
//! ## Overview
//!
//! Every validator is a pure function from a record (and, where needed, a
//! piece of the rule registry) to a [`ValidationResult`]. Invalid input is
//! never an `Err`: each problem becomes a [`ValidationError`] or
//! [`ValidationWarning`] naming the field, and callers decide what to do
//! with the whole list.
//!
//! - **Entity validators**: required fields, formats, numeric ranges and
//!   cross-field rules per record type
//! - **Workflow transitions**: marks entry, moderation, publication and
//!   revaluation state machines, each edge gated by a role capability
//! - **Business rules**: grade weights, passing criteria and grading schemes
//! - **Derived metrics**: grade lookup from marks, SGPA and CGPA
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── markbook-core/           # ValidationResult and error taxonomy
//! ├── markbook-config/         # Rule registry: schemes, weights, permissions
//! ├── markbook-models/         # Records, IDs, value types, workflow states
//! ├── markbook-observability/  # tracing-subscriber setup
//! └── markbook-cli/            # markbook-cli binary
//! src/
//! ├── modules/                 # One validator per entity
//! ├── utils/                   # Field checks, date parsing, grade maths
//! └── validator.rs             # GradesValidator facade
//! ```
//!
//! ## Example
//!
//! ```
//! use markbook::GradesValidator;
//! use markbook::markbook_models::Marks;
//!
//! let validator = GradesValidator::default();
//! let result = validator.validate_marks(&Marks::new("s1", "c1", "e1", 120.0, 100.0));
//!
//! assert!(!result.is_valid());
//! assert_eq!(validator.summarize(&result), "Marks obtained cannot exceed 100");
//! ```
//!
//! ## Configuration
//!
//! The rule registry defaults to a ten-point grading scheme with 30/20/50
//! weights. Set `MARKBOOK_SCHEMA_PATH` to a JSON file to replace it; see
//! [`GradesSchema::from_env`].

pub mod modules;
pub mod utils;
pub mod validator;

pub use markbook_config::{BusinessRules, GradesSchema, GradingScheme, PermissionRegistry};
pub use markbook_core::{
    ValidationError, ValidationErrorType, ValidationResult, ValidationWarning,
};
pub use utils::grading::{
    CourseCredit, GradeOutcome, SemesterResult, calculate_cgpa, calculate_grade, calculate_sgpa,
    round2,
};
pub use validator::GradesValidator;

// Re-export workspace crates for convenience
pub use markbook_config;
pub use markbook_core;
pub use markbook_models;
