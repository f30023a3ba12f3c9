//! # Markbook Config
//!
//! The rule registry every Markbook validator is parameterised with.
//!
//! - [`grading_scheme`]: grade-letter boundaries and their registration-time checks
//! - [`business_rules`]: grade weightings, passing criteria and the active scheme
//! - [`permissions`]: roles, capability flags and the role → permission registry
//! - [`schema`]: [`GradesSchema`], the bundle handed to validators, with env/file loading
//!
//! Nothing here is global. Build a [`GradesSchema`] (or take the default) and pass
//! it, or the piece you need, into the validators.
//!
//! # Example
//!
//! ```
//! use markbook_config::{GradesSchema, Role, Capability};
//!
//! let schema = GradesSchema::default();
//! assert_eq!(schema.business_rules.grade_weights.total(), 100.0);
//! assert!(schema.permissions.allows(Role::Faculty, Capability::EnterMarks));
//! ```

pub mod business_rules;
pub mod errors;
pub mod grading_scheme;
pub mod permissions;
pub mod schema;

// Re-export commonly used types at crate root
pub use business_rules::{BusinessRules, GradeWeights, PassingCriteria, WEIGHT_SUM_TOLERANCE};
pub use errors::{ConfigError, SchemeError};
pub use grading_scheme::{GradeBoundary, GradingScheme};
pub use permissions::{Capability, PermissionRegistry, Role, RolePermissions};
pub use schema::GradesSchema;
