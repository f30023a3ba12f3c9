//! Course records.

use crate::ids::CourseId;
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: Option<CourseId>,
    /// Course code such as `CS101`.
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub credits: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub semester: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub max_students: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_course() {
        let course: Course =
            serde_json::from_str(r#"{"code": "CS101", "name": "Programming", "credits": 4}"#)
                .unwrap();
        assert_eq!(course.code.as_deref(), Some("CS101"));
        assert_eq!(course.credits, Some(4.0));
        assert!(course.semester.is_none());
    }
}
