use crate::modules::exams::service::parse_field;
use crate::utils::checks::{details, finish, present, require_id, require_text};
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::revaluation::RevaluationRequest;
use markbook_models::workflow::RevaluationState;
use serde_json::json;
use tracing::instrument;

/// Shortest acceptable explanation for a revaluation request.
pub const MIN_REASON_LENGTH: usize = 10;

/// Validate a revaluation request.
///
/// Required: `studentId`, `courseId`, `examId`, `reason`. The request must be
/// made on or before the deadline, and `status` must name a revaluation state.
#[instrument(level = "debug", skip_all)]
pub fn validate_revaluation_request(request: &RevaluationRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    require_id(
        &mut result,
        "studentId",
        "Student ID",
        request.student_id.as_ref(),
    );
    require_id(
        &mut result,
        "courseId",
        "Course ID",
        request.course_id.as_ref(),
    );
    require_id(&mut result, "examId", "Exam ID", request.exam_id.as_ref());
    let reason = require_text(&mut result, "reason", "Reason", request.reason.as_deref());

    if let Some(reason) = reason {
        let length = reason.chars().count();
        if length < MIN_REASON_LENGTH {
            result.add_error_with_details(
                "reason",
                ValidationErrorType::InvalidFormat,
                format!("Reason must be at least {} characters", MIN_REASON_LENGTH),
                details(json!({ "min": MIN_REASON_LENGTH, "length": length })),
            );
        }
    }

    if let Some(status) = request.status.as_deref() {
        match status.parse::<RevaluationState>() {
            Ok(RevaluationState::Closed) => result.add_warning(
                "status",
                "The revaluation window is closed; the request will not be processed",
            ),
            Ok(_) => {}
            Err(_) => {
                let allowed: Vec<&str> = RevaluationState::ALL.iter().map(|s| s.as_str()).collect();
                result.add_error_with_details(
                    "status",
                    ValidationErrorType::InvalidFormat,
                    format!("Status must be one of: {}", allowed.join(", ")),
                    details(json!({ "value": status, "allowed": allowed })),
                );
            }
        }
    }

    if let Some(fee) = present(request.fee) {
        if fee < 0.0 {
            result.add_error_with_details(
                "fee",
                ValidationErrorType::OutOfRange,
                "Fee cannot be negative",
                details(json!({ "min": 0, "value": fee })),
            );
        }
    }

    let requested = parse_field(
        &mut result,
        "requestDate",
        "Request date",
        request.request_date.as_deref(),
    );
    let deadline = parse_field(
        &mut result,
        "deadline",
        "Deadline",
        request.deadline.as_deref(),
    );
    if let (Some(requested), Some(deadline)) = (requested, deadline) {
        if requested > deadline {
            result.add_error(
                "requestDate",
                ValidationErrorType::BusinessRuleViolation,
                "Revaluation requested after the deadline",
            );
        }
    }

    finish("revaluation_request", result)
}
