//! Requests to re-evaluate a marked answer script.

use crate::ids::{CourseId, ExamId, RevaluationId, StudentId};
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};

/// A student's revaluation request.
///
/// `status` is the raw wire name of a
/// [`RevaluationState`](crate::workflow::RevaluationState); unknown names are a
/// validation error rather than a deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevaluationRequest {
    #[serde(default)]
    pub id: Option<RevaluationId>,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub exam_id: Option<ExamId>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub request_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub fee: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let request: RevaluationRequest = serde_json::from_str(
            r#"{"studentId": "s1", "courseId": "c1", "examId": "e1",
                "reason": "Totalling error on page 3", "fee": "500", "status": "open"}"#,
        )
        .unwrap();
        assert_eq!(request.fee, Some(500.0));
        assert_eq!(request.status.as_deref(), Some("open"));
        assert!(request.deadline.is_none());
    }
}
