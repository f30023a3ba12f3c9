//! One entry point that carries the rule registry to every validator.

use crate::modules;
use crate::utils::grading::{GradeOutcome, calculate_grade};
use markbook_config::{ConfigError, GradesSchema};
use markbook_core::ValidationResult;
use markbook_models::{Course, Exam, Grade, Marks, RevaluationRequest, Student};
use serde_json::Value;
use std::sync::Arc;

/// Join every error message of `result` into one line.
fn format_errors(result: &ValidationResult) -> String {
    result.error_messages().join(", ")
}

/// Validators bound to a [`GradesSchema`].
///
/// Cloning is cheap; clones share the same schema.
#[derive(Debug, Clone, Default)]
pub struct GradesValidator {
    schema: Arc<GradesSchema>,
}

impl GradesValidator {
    pub fn new(schema: GradesSchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// Build from `MARKBOOK_SCHEMA_PATH`, or the built-in schema when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        GradesSchema::from_env().map(Self::new)
    }

    pub fn schema(&self) -> &GradesSchema {
        &self.schema
    }

    pub fn validate_student(&self, student: &Student) -> ValidationResult {
        modules::validate_student(student)
    }

    pub fn validate_course(&self, course: &Course) -> ValidationResult {
        modules::validate_course(course)
    }

    pub fn validate_exam(&self, exam: &Exam) -> ValidationResult {
        modules::validate_exam(exam)
    }

    /// Marks are checked with the schema's passing criteria, so shortfalls show up as warnings.
    pub fn validate_marks(&self, marks: &Marks) -> ValidationResult {
        modules::validate_marks(marks, Some(&self.schema.business_rules))
    }

    /// Validate every row of a marks sheet into one result.
    pub fn validate_marks_sheet(&self, rows: &[Marks]) -> ValidationResult {
        rows.iter()
            .fold(ValidationResult::new(), |mut sheet, row| {
                sheet.merge(self.validate_marks(row));
                sheet
            })
    }

    pub fn marks_error_messages(&self, marks: &Marks) -> Vec<String> {
        modules::marks_error_messages(marks, &self.schema.business_rules)
    }

    pub fn validate_grade(&self, grade: &Grade) -> ValidationResult {
        modules::validate_grade(grade, &self.schema.business_rules.grading_scheme)
    }

    pub fn validate_revaluation_request(&self, request: &RevaluationRequest) -> ValidationResult {
        modules::validate_revaluation_request(request)
    }

    pub fn validate_workflow_transition(
        &self,
        current: &str,
        new: &str,
        role: &str,
    ) -> ValidationResult {
        modules::validate_workflow_transition(current, new, role, &self.schema.permissions)
    }

    pub fn validate_moderation_transition(
        &self,
        current: &str,
        new: &str,
        role: &str,
    ) -> ValidationResult {
        modules::validate_moderation_transition(current, new, role, &self.schema.permissions)
    }

    pub fn validate_publication_transition(
        &self,
        current: &str,
        new: &str,
        role: &str,
    ) -> ValidationResult {
        modules::validate_publication_transition(current, new, role, &self.schema.permissions)
    }

    pub fn validate_revaluation_transition(
        &self,
        current: &str,
        new: &str,
        role: &str,
    ) -> ValidationResult {
        modules::validate_revaluation_transition(current, new, role, &self.schema.permissions)
    }

    pub fn validate_business_rules(&self, input: &Value, rule_type: &str) -> ValidationResult {
        modules::validate_business_rules(input, rule_type)
    }

    /// Check the schema's own rules.
    pub fn validate_rule_set(&self) -> ValidationResult {
        modules::validate_rule_set(&self.schema.business_rules)
    }

    /// Resolve marks to a grade with the schema's grading scheme.
    pub fn grade_for(&self, marks_obtained: f64, max_marks: f64) -> GradeOutcome {
        calculate_grade(
            marks_obtained,
            max_marks,
            &self.schema.business_rules.grading_scheme,
        )
    }

    /// Error messages of `result` on one line, separated by `", "`.
    pub fn summarize(&self, result: &ValidationResult) -> String {
        format_errors(result)
    }
}
