use crate::utils::checks::{
    check_range, check_whole_in_range, details, finish, present, require_id, require_number,
    require_text,
};
use crate::utils::grading::round2;
use markbook_config::GradingScheme;
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::grades::Grade;
use serde_json::json;
use tracing::instrument;

/// Largest difference tolerated between a recorded and a declared grade point.
const POINT_TOLERANCE: f64 = 0.01;

/// Validate a grade record against `scheme`.
///
/// The letter must be declared by the scheme, the recorded grade point must
/// match the declared one, and a recorded percentage must fall inside the
/// letter's boundary.
#[instrument(level = "debug", skip_all)]
pub fn validate_grade(grade: &Grade, scheme: &GradingScheme) -> ValidationResult {
    let mut result = ValidationResult::new();

    require_id(
        &mut result,
        "studentId",
        "Student ID",
        grade.student_id.as_ref(),
    );
    require_id(
        &mut result,
        "courseId",
        "Course ID",
        grade.course_id.as_ref(),
    );
    let letter = require_text(
        &mut result,
        "gradeLetter",
        "Grade letter",
        grade.grade_letter.as_deref(),
    );
    let point = require_number(&mut result, "gradePoint", "Grade point", grade.grade_point)
        .filter(|&p| check_range(&mut result, "gradePoint", "Grade point", p, 0.0, 10.0));
    let percentage = present(grade.percentage)
        .filter(|&p| check_range(&mut result, "percentage", "Percentage", p, 0.0, 100.0));
    if let Some(semester) = present(grade.semester) {
        check_whole_in_range(&mut result, "semester", "Semester", semester, 1.0, 8.0);
    }

    let Some(letter) = letter else {
        return finish("grade", result);
    };
    let Some(boundary) = scheme.boundary_for(letter) else {
        result.add_error_with_details(
            "gradeLetter",
            ValidationErrorType::InvalidReference,
            format!(
                "Grade '{}' is not defined in the {} scheme",
                letter,
                scheme.name
            ),
            details(json!({ "scheme": scheme.name, "value": letter })),
        );
        return finish("grade", result);
    };

    if let Some(point) = point {
        if (point - boundary.points).abs() > POINT_TOLERANCE {
            result.add_error_with_details(
                "gradePoint",
                ValidationErrorType::BusinessRuleViolation,
                format!(
                    "Grade point {} does not match {} for grade {}",
                    point, boundary.points, boundary.grade
                ),
                details(json!({ "expected": boundary.points, "value": point })),
            );
        }
    }

    if let Some(percentage) = percentage {
        if !boundary.contains(round2(percentage)) {
            result.add_error_with_details(
                "percentage",
                ValidationErrorType::BusinessRuleViolation,
                format!(
                    "Percentage {} is outside the range {}-{} for grade {}",
                    percentage, boundary.min, boundary.max, boundary.grade
                ),
                details(json!({ "min": boundary.min, "max": boundary.max, "value": percentage })),
            );
        }
    }

    finish("grade", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_plus() -> Grade {
        Grade {
            student_id: Some("s1".into()),
            course_id: Some("c1".into()),
            grade_letter: Some("A+".to_string()),
            grade_point: Some(9.0),
            percentage: Some(84.5),
            semester: Some(3.0),
            ..Grade::default()
        }
    }

    #[test]
    fn test_valid_grade() {
        assert!(validate_grade(&a_plus(), &GradingScheme::default()).is_valid());
    }

    #[test]
    fn test_point_mismatch() {
        let grade = Grade {
            grade_point: Some(8.0),
            ..a_plus()
        };
        let result = validate_grade(&grade, &GradingScheme::default());
        let error = result.first_error().unwrap();
        assert_eq!(error.field, "gradePoint");
        assert_eq!(error.error_type, ValidationErrorType::BusinessRuleViolation);
        assert_eq!(error.details["expected"], json!(9.0));
    }

    #[test]
    fn test_unknown_letter() {
        let grade = Grade {
            grade_letter: Some("E".to_string()),
            ..a_plus()
        };
        let result = validate_grade(&grade, &GradingScheme::default());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].error_type,
            ValidationErrorType::InvalidReference
        );
    }

    #[test]
    fn test_percentage_outside_letter() {
        let grade = Grade {
            percentage: Some(91.0),
            ..a_plus()
        };
        let result = validate_grade(&grade, &GradingScheme::default());
        assert_eq!(
            result.first_error().map(|e| e.field.as_str()),
            Some("percentage")
        );
    }

    #[test]
    fn test_point_out_of_range_skips_match() {
        let grade = Grade {
            grade_point: Some(11.0),
            ..a_plus()
        };
        let result = validate_grade(&grade, &GradingScheme::default());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].error_type,
            ValidationErrorType::OutOfRange
        );
    }

    #[test]
    fn test_missing_letter_and_point() {
        let grade = Grade {
            grade_letter: None,
            grade_point: None,
            ..a_plus()
        };
        let result = validate_grade(&grade, &GradingScheme::default());
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["gradeLetter", "gradePoint"]);
    }
}
