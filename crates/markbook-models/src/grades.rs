//! Final course grades.

use crate::ids::{CourseId, GradeId, StudentId};
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default)]
    pub id: Option<GradeId>,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub grade_letter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub grade_point: Option<f64>,
    /// Percentage the grade was derived from, when known.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub semester: Option<f64>,
}
