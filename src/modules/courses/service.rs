use crate::utils::checks::{
    check_whole_at_least, check_whole_in_range, finish, present, require_number, require_text,
};
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::courses::Course;
use markbook_models::value_types::CourseCode;
use tracing::instrument;

/// Validate a course record.
///
/// Required: `code`, `name`, `credits`. The code must look like `CS101`;
/// credits are 1–6, semester 1–8 and enrolment capacity at least one.
#[instrument(level = "debug", skip_all)]
pub fn validate_course(course: &Course) -> ValidationResult {
    let mut result = ValidationResult::new();

    let code = require_text(&mut result, "code", "Course code", course.code.as_deref());
    require_text(&mut result, "name", "Course name", course.name.as_deref());
    let credits = require_number(&mut result, "credits", "Credits", course.credits);

    if let Some(code) = code {
        if let Err(err) = CourseCode::new(code) {
            result.add_error("code", ValidationErrorType::InvalidFormat, err.to_string());
        }
    }

    if let Some(credits) = credits {
        check_whole_in_range(&mut result, "credits", "Credits", credits, 1.0, 6.0);
    }
    if let Some(semester) = present(course.semester) {
        check_whole_in_range(&mut result, "semester", "Semester", semester, 1.0, 8.0);
    }
    if let Some(capacity) = present(course.max_students) {
        check_whole_at_least(
            &mut result,
            "maxStudents",
            "Maximum students",
            capacity,
            1.0,
        );
    }

    finish("course", result)
}
