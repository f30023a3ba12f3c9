//! Exam records and the closed set of exam types.

use crate::ids::{CourseId, ExamId};
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Internal,
    Mid,
    End,
    Quiz,
    Assignment,
    Practical,
}

impl ExamType {
    pub const ALL: [ExamType; 6] = [
        ExamType::Internal,
        ExamType::Mid,
        ExamType::End,
        ExamType::Quiz,
        ExamType::Assignment,
        ExamType::Practical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Internal => "internal",
            ExamType::Mid => "mid",
            ExamType::End => "end",
            ExamType::Quiz => "quiz",
            ExamType::Assignment => "assignment",
            ExamType::Practical => "practical",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExamType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown exam type '{}'", s))
    }
}

/// An examination of a course.
///
/// `exam_type` is kept as the raw string so that an unknown type can be
/// reported as a validation error rather than a deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(default)]
    pub id: Option<ExamId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_blank_as_none")]
    pub exam_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub max_marks: Option<f64>,
    /// Share of the course grade, 0–100.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub weightage: Option<f64>,
    /// Duration in minutes.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_parse() {
        assert_eq!("mid".parse::<ExamType>(), Ok(ExamType::Mid));
        assert!("final".parse::<ExamType>().is_err());
        assert_eq!(ExamType::Practical.to_string(), "practical");
    }

    #[test]
    fn test_deserialize_type_field() {
        let exam: Exam = serde_json::from_str(
            r#"{"name": "Midterm", "type": "mid", "maxMarks": 100, "startDate": "2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(exam.exam_type.as_deref(), Some("mid"));
        assert_eq!(exam.max_marks, Some(100.0));
        assert_eq!(exam.start_date.as_deref(), Some("2024-03-01"));
    }
}
