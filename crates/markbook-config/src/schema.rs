//! The grades schema: business rules plus role permissions.
//!
//! # Configuration
//!
//! - `MARKBOOK_SCHEMA_PATH`: path to a JSON schema file. When unset the built-in
//!   defaults are used.
//!
//! A schema file may omit any section; omitted sections take their defaults.
//!
//! ```json
//! {
//!   "businessRules": {
//!     "gradeWeights": { "internal": 40, "midSemester": 20, "endSemester": 40 },
//!     "passingCriteria": { "perCourse": 40, "aggregate": 50, "minimumAttendance": 75 }
//!   },
//!   "permissions": {
//!     "faculty": { "canEnterMarks": true, "canSubmitForModeration": true }
//!   }
//! }
//! ```

use crate::business_rules::BusinessRules;
use crate::errors::ConfigError;
use crate::permissions::PermissionRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the schema file.
pub const SCHEMA_PATH_ENV: &str = "MARKBOOK_SCHEMA_PATH";

/// Everything a validator may need to know about the institution's rules.
///
/// Construct through [`GradesSchema::new`], [`GradesSchema::from_path`] or
/// [`GradesSchema::from_env`] to have the grading scheme and weights checked
/// at registration time. [`Default`] yields the built-in, already-valid rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradesSchema {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub permissions: PermissionRegistry,
}

impl GradesSchema {
    /// Build a schema, rejecting unbalanced weights or a malformed grading scheme.
    pub fn new(
        business_rules: BusinessRules,
        permissions: PermissionRegistry,
    ) -> Result<Self, ConfigError> {
        let schema = Self {
            business_rules,
            permissions,
        };
        schema.check()?;
        Ok(schema)
    }

    /// Re-run the registration checks.
    pub fn check(&self) -> Result<(), ConfigError> {
        let weights = &self.business_rules.grade_weights;
        if !weights.is_balanced() {
            return Err(ConfigError::Weights(weights.total()));
        }
        self.business_rules.grading_scheme.check_boundaries()?;
        Ok(())
    }

    /// Parse a schema from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: GradesSchema = serde_json::from_str(json)?;
        Self::new(raw.business_rules, raw.permissions)
    }

    /// Load a schema from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            scheme = %schema.business_rules.grading_scheme.name,
            "Loaded grades schema"
        );
        Ok(schema)
    }

    /// Load from `MARKBOOK_SCHEMA_PATH`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SCHEMA_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim()),
            _ => {
                debug!("{} not set, using built-in grades schema", SCHEMA_PATH_ENV);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business_rules::GradeWeights;
    use crate::errors::SchemeError;
    use crate::grading_scheme::{GradeBoundary, GradingScheme};
    use crate::permissions::{Capability, Role};

    #[test]
    fn test_default_schema_passes_checks() {
        assert!(GradesSchema::default().check().is_ok());
    }

    #[test]
    fn test_new_rejects_unbalanced_weights() {
        let rules = BusinessRules {
            grade_weights: GradeWeights {
                internal: 30.0,
                mid_semester: 20.0,
                end_semester: 49.0,
            },
            ..BusinessRules::default()
        };
        let err = GradesSchema::new(rules, PermissionRegistry::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Weights(total) if (total - 99.0).abs() < 1e-9));
    }

    #[test]
    fn test_new_rejects_overlapping_scheme() {
        let rules = BusinessRules {
            grading_scheme: GradingScheme {
                boundaries: vec![
                    GradeBoundary::new("P", 40.0, 100.0, 1.0),
                    GradeBoundary::new("F", 0.0, 40.0, 0.0),
                ],
                ..GradingScheme::default()
            },
            ..BusinessRules::default()
        };
        let err = GradesSchema::new(rules, PermissionRegistry::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Scheme(SchemeError::Overlap { .. })));
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"permissions": {"faculty": {"canEnterMarks": true}}}"#;
        let schema = GradesSchema::from_json(json).unwrap();
        assert_eq!(schema.business_rules, BusinessRules::default());
        assert!(schema.permissions.get(Role::Hod).is_none());
        assert!(
            !schema
                .permissions
                .allows(Role::Faculty, Capability::SubmitForModeration)
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            GradesSchema::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = GradesSchema::from_path("/nonexistent/markbook-schema.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_path_reads_file() {
        let file = format!("markbook-schema-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        let json = r#"{"businessRules": {"passingCriteria": {"minimumAttendance": 60, "perCourse": 35}}}"#;
        std::fs::write(&path, json).unwrap();

        let schema = GradesSchema::from_path(&path).unwrap();
        assert_eq!(schema.business_rules.passing_criteria.per_course, 35.0);
        assert_eq!(
            schema.business_rules.passing_criteria.minimum_attendance,
            60.0
        );

        std::fs::remove_file(&path).ok();
    }
}
