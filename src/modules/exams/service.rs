use crate::utils::checks::{check_range, details, finish, present, require_number, require_text};
use crate::utils::dates::parse_date;
use chrono::NaiveDateTime;
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::exams::{Exam, ExamType};
use serde_json::json;
use tracing::instrument;

/// Validate an exam record.
///
/// Required: `name`, `type`, `maxMarks`. The type must be a known [`ExamType`];
/// maximum marks 1–200, weightage 0–100, duration 30–480 minutes. When both
/// dates are given the exam must end strictly after it starts.
#[instrument(level = "debug", skip_all)]
pub fn validate_exam(exam: &Exam) -> ValidationResult {
    let mut result = ValidationResult::new();

    require_text(&mut result, "name", "Exam name", exam.name.as_deref());
    let exam_type = require_text(&mut result, "type", "Exam type", exam.exam_type.as_deref());
    let max_marks = require_number(&mut result, "maxMarks", "Maximum marks", exam.max_marks);

    if let Some(exam_type) = exam_type {
        if exam_type.parse::<ExamType>().is_err() {
            let allowed: Vec<&str> = ExamType::ALL.iter().map(ExamType::as_str).collect();
            result.add_error_with_details(
                "type",
                ValidationErrorType::InvalidFormat,
                format!("Exam type must be one of: {}", allowed.join(", ")),
                details(json!({ "value": exam_type, "allowed": allowed })),
            );
        }
    }

    if let Some(max_marks) = max_marks {
        check_range(
            &mut result,
            "maxMarks",
            "Maximum marks",
            max_marks,
            1.0,
            200.0,
        );
    }
    if let Some(weightage) = present(exam.weightage) {
        check_range(&mut result, "weightage", "Weightage", weightage, 0.0, 100.0);
    }
    if let Some(duration) = present(exam.duration) {
        check_range(
            &mut result,
            "duration",
            "Duration (minutes)",
            duration,
            30.0,
            480.0,
        );
    }

    let start = parse_field(
        &mut result,
        "startDate",
        "Start date",
        exam.start_date.as_deref(),
    );
    let end = parse_field(&mut result, "endDate", "End date", exam.end_date.as_deref());
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            result.add_error(
                "endDate",
                ValidationErrorType::BusinessRuleViolation,
                "End date must be after start date",
            );
        }
    }

    finish("exam", result)
}

/// Parse an optional date field, recording a format error when it does not parse.
pub(crate) fn parse_field(
    result: &mut ValidationResult,
    field: &str,
    label: &str,
    value: Option<&str>,
) -> Option<NaiveDateTime> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    let parsed = parse_date(value);
    if parsed.is_none() {
        result.add_error(
            field,
            ValidationErrorType::InvalidFormat,
            format!("{} must be a valid date (YYYY-MM-DD)", label),
        );
    }
    parsed
}
