use crate::utils::checks::{check_range, details, finish, present, require_id, require_number};
use markbook_config::BusinessRules;
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::marks::Marks;
use serde_json::json;
use tracing::instrument;

/// Validate a marks record.
///
/// Required: `studentId`, `courseId`, `examId`, `marksObtained`, `maxMarks`
/// (a numeric `0` counts as present). Maximum marks must be positive and
/// marks obtained must lie in `[0, maxMarks]`; attendance is a percentage.
///
/// When `rules` are supplied, a percentage under the per-course pass mark and
/// attendance under the required minimum are reported as warnings.
#[instrument(level = "debug", skip_all)]
pub fn validate_marks(marks: &Marks, rules: Option<&BusinessRules>) -> ValidationResult {
    let mut result = ValidationResult::new();

    require_id(
        &mut result,
        "studentId",
        "Student ID",
        marks.student_id.as_ref(),
    );
    require_id(
        &mut result,
        "courseId",
        "Course ID",
        marks.course_id.as_ref(),
    );
    require_id(&mut result, "examId", "Exam ID", marks.exam_id.as_ref());
    let obtained = require_number(
        &mut result,
        "marksObtained",
        "Marks obtained",
        marks.marks_obtained,
    );
    let max_marks = require_number(&mut result, "maxMarks", "Maximum marks", marks.max_marks);

    let max_marks = max_marks.filter(|&max| {
        if max <= 0.0 {
            result.add_error_with_details(
                "maxMarks",
                ValidationErrorType::OutOfRange,
                "Maximum marks must be greater than 0",
                details(json!({ "min": 0, "value": max })),
            );
            return false;
        }
        true
    });

    let obtained = obtained.filter(|&value| {
        if value < 0.0 {
            result.add_error_with_details(
                "marksObtained",
                ValidationErrorType::OutOfRange,
                "Marks obtained cannot be negative",
                details(json!({ "min": 0, "value": value })),
            );
            return false;
        }
        if let Some(max) = max_marks {
            if value > max {
                result.add_error_with_details(
                    "marksObtained",
                    ValidationErrorType::OutOfRange,
                    format!("Marks obtained cannot exceed {}", max),
                    details(json!({ "max": max, "value": value })),
                );
                return false;
            }
        }
        true
    });

    let attendance = present(marks.attendance)
        .filter(|&a| check_range(&mut result, "attendance", "Attendance", a, 0.0, 100.0));

    if let Some(rules) = rules {
        let criteria = &rules.passing_criteria;
        if let (Some(obtained), Some(max)) = (obtained, max_marks) {
            let percentage = obtained / max * 100.0;
            if percentage < criteria.per_course {
                result.add_warning_with_details(
                    "marksObtained",
                    format!(
                        "Marks are below the passing threshold of {}%",
                        criteria.per_course
                    ),
                    details(json!({ "percentage": percentage, "threshold": criteria.per_course })),
                );
            }
        }
        if let Some(attendance) = attendance {
            if attendance < criteria.minimum_attendance {
                result.add_warning_with_details(
                    "attendance",
                    format!(
                        "Attendance is below the minimum requirement of {}%",
                        criteria.minimum_attendance
                    ),
                    details(json!({
                        "attendance": attendance,
                        "minimum": criteria.minimum_attendance,
                    })),
                );
            }
        }
    }

    finish("marks", result)
}

/// Marks problems as plain messages: range errors on the marks obtained,
/// then range errors on attendance, then any attendance shortfall.
///
/// Runs [`validate_marks`] with `rules`, so both report the same bounds.
pub fn marks_error_messages(marks: &Marks, rules: &BusinessRules) -> Vec<String> {
    let result = validate_marks(marks, Some(rules));

    let shortfall = result
        .warnings()
        .iter()
        .filter(|w| w.field == "attendance")
        .map(|w| w.message.clone());

    range_errors(&result, "marksObtained")
        .chain(range_errors(&result, "attendance"))
        .chain(shortfall)
        .collect()
}

fn range_errors<'a>(
    result: &'a ValidationResult,
    field: &'a str,
) -> impl Iterator<Item = String> + 'a {
    result
        .errors_by_field(field)
        .filter(|e| e.error_type == ValidationErrorType::OutOfRange)
        .map(|e| e.message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_marks() {
        let marks = Marks::new("s1", "c1", "e1", 72.0, 100.0);
        let result = validate_marks(&marks, None);
        assert!(result.is_valid());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_exceeds_max() {
        let marks = Marks::new("s1", "c1", "e1", 120.0, 100.0);
        let result = validate_marks(&marks, None);
        assert!(!result.is_valid());
        let error = result.first_error().unwrap();
        assert_eq!(error.field, "marksObtained");
        assert_eq!(error.error_type, ValidationErrorType::OutOfRange);
        assert_eq!(error.message, "Marks obtained cannot exceed 100");
    }

    #[test]
    fn test_zero_marks_present() {
        let marks = Marks::new("s1", "c1", "e1", 0.0, 50.0);
        assert!(validate_marks(&marks, None).is_valid());
    }

    #[test]
    fn test_negative_and_zero_max() {
        let marks = Marks::new("s1", "c1", "e1", -1.0, 0.0);
        let result = validate_marks(&marks, None);
        assert_eq!(
            result.error_messages(),
            vec![
                "Maximum marks must be greater than 0",
                "Marks obtained cannot be negative"
            ]
        );
    }

    #[test]
    fn test_missing_ids() {
        let marks = Marks {
            marks_obtained: Some(10.0),
            max_marks: Some(20.0),
            ..Marks::default()
        };
        let result = validate_marks(&marks, None);
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["studentId", "courseId", "examId"]);
    }

    #[test]
    fn test_warnings_with_rules() {
        let rules = BusinessRules::default();
        let marks = Marks {
            attendance: Some(60.0),
            ..Marks::new("s1", "c1", "e1", 30.0, 100.0)
        };
        let result = validate_marks(&marks, Some(&rules));
        assert!(result.is_valid());
        let fields: Vec<_> = result.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["marksObtained", "attendance"]);
    }

    #[test]
    fn test_no_warning_at_threshold() {
        let rules = BusinessRules::default();
        let marks = Marks {
            attendance: Some(75.0),
            ..Marks::new("s1", "c1", "e1", 40.0, 100.0)
        };
        assert!(!validate_marks(&marks, Some(&rules)).has_warnings());
    }

    #[test]
    fn test_attendance_out_of_range_not_warned() {
        let rules = BusinessRules::default();
        let marks = Marks {
            attendance: Some(-5.0),
            ..Marks::new("s1", "c1", "e1", 80.0, 100.0)
        };
        let result = validate_marks(&marks, Some(&rules));
        assert_eq!(result.errors().len(), 1);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_error_messages_order() {
        let rules = BusinessRules::default();
        let marks = Marks {
            attendance: Some(50.0),
            ..Marks::new("s1", "c1", "e1", 120.0, 100.0)
        };
        let messages = marks_error_messages(&marks, &rules);
        assert_eq!(
            messages,
            vec![
                "Marks obtained cannot exceed 100".to_string(),
                "Attendance is below the minimum requirement of 75%".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_messages_include_attendance_range() {
        let rules = BusinessRules::default();
        let marks = Marks {
            attendance: Some(-5.0),
            ..Marks::new("s1", "c1", "e1", 80.0, 100.0)
        };
        assert_eq!(
            marks_error_messages(&marks, &rules),
            vec!["Attendance must be between 0 and 100".to_string()]
        );

        let marks = Marks {
            attendance: Some(140.0),
            ..Marks::new("s1", "c1", "e1", 120.0, 100.0)
        };
        assert_eq!(
            marks_error_messages(&marks, &rules),
            vec![
                "Marks obtained cannot exceed 100".to_string(),
                "Attendance must be between 0 and 100".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_messages_clean_record() {
        let marks = Marks::new("s1", "c1", "e1", 55.0, 100.0);
        assert!(marks_error_messages(&marks, &BusinessRules::default()).is_empty());
    }
}
