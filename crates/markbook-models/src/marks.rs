//! Marks awarded to a student in one exam.

use crate::ids::{CourseId, ExamId, MarksId, StudentId};
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marks {
    #[serde(default)]
    pub id: Option<MarksId>,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub exam_id: Option<ExamId>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub marks_obtained: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub max_marks: Option<f64>,
    /// Attendance percentage in the course, 0–100.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub attendance: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub remarks: Option<String>,
}

impl Marks {
    /// Convenience constructor for the fields every marks record needs.
    pub fn new(
        student_id: impl Into<StudentId>,
        course_id: impl Into<CourseId>,
        exam_id: impl Into<ExamId>,
        marks_obtained: f64,
        max_marks: f64,
    ) -> Self {
        Self {
            student_id: Some(student_id.into()),
            course_id: Some(course_id.into()),
            exam_id: Some(exam_id.into()),
            marks_obtained: Some(marks_obtained),
            max_marks: Some(max_marks),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_required_fields() {
        let marks = Marks::new("s1", "c1", "e1", 72.0, 100.0);
        assert_eq!(marks.student_id, Some(StudentId::new("s1")));
        assert_eq!(marks.marks_obtained, Some(72.0));
        assert!(marks.attendance.is_none());
    }

    #[test]
    fn test_zero_marks_are_present() {
        let marks: Marks = serde_json::from_str(r#"{"marksObtained": 0}"#).unwrap();
        assert_eq!(marks.marks_obtained, Some(0.0));
    }
}
