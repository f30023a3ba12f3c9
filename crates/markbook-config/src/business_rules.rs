//! Grade weightings, passing criteria and the active grading scheme.

use crate::grading_scheme::GradingScheme;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that grade weights sum to 100.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Percentage contribution of each assessment component to the final grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeWeights {
    pub internal: f64,
    pub mid_semester: f64,
    pub end_semester: f64,
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            internal: 30.0,
            mid_semester: 20.0,
            end_semester: 50.0,
        }
    }
}

impl GradeWeights {
    pub fn total(&self) -> f64 {
        self.internal + self.mid_semester + self.end_semester
    }

    /// Whether the weights sum to 100 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

/// Minimum percentages a student must reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingCriteria {
    /// Passing percentage for a single course.
    pub per_course: f64,
    /// Passing percentage across all courses.
    pub aggregate: f64,
    /// Attendance percentage required to sit examinations.
    pub minimum_attendance: f64,
}

impl Default for PassingCriteria {
    fn default() -> Self {
        Self {
            per_course: 40.0,
            aggregate: 50.0,
            minimum_attendance: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRules {
    #[serde(default)]
    pub grade_weights: GradeWeights,
    #[serde(default)]
    pub passing_criteria: PassingCriteria,
    #[serde(default)]
    pub grading_scheme: GradingScheme,
}
