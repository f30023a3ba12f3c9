//! Student records.
//!
//! A student arrives with identity fields at the top level and optional
//! nested address and academic sub-records:
//!
//! ```json
//! {
//!   "rollNo": "21CS042",
//!   "name": "Asha Rao",
//!   "email": "asha@example.edu",
//!   "academicInfo": { "currentSemester": 5, "attendance": 82.5 }
//! }
//! ```

use crate::ids::StudentId;
use markbook_core::serde::{deserialize_blank_as_none, deserialize_optional_f64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: Option<StudentId>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub roll_no: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub academic_info: Option<AcademicInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub pincode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicInfo {
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub current_semester: Option<f64>,
    /// Attendance percentage, 0–100.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub attendance: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub cgpa: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub admission_year: Option<f64>,
}
