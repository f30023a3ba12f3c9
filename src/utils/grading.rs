//! Derived academic metrics: grade lookup, SGPA and CGPA.
//!
//! All functions are total: degenerate inputs (no credits, zero maximum marks,
//! a scheme with gaps, non-finite numbers) produce a defined value instead of
//! `NaN`. Averages skip entries whose credits or points are not finite.

use markbook_config::GradingScheme;
use serde::{Deserialize, Serialize};

/// Grade letter recorded for a student who was absent.
pub const ABSENT_GRADE: &str = "AB";
/// Grade letter used when no boundary matches.
pub const FAIL_GRADE: &str = "F";

/// Result of resolving marks against a grading scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeOutcome {
    pub grade: String,
    pub grade_point: f64,
    /// Percentage rounded to two decimals.
    pub percentage: f64,
}

/// Credits and grade point of one course, the input to [`calculate_sgpa`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCredit {
    pub credits: f64,
    pub grade_point: f64,
}

/// SGPA and credit load of one semester, the input to [`calculate_cgpa`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterResult {
    pub sgpa: f64,
    pub total_credits: f64,
}

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve marks to a grade.
///
/// `0` out of `0` is an absence (`AB`, 0 points). Any other non-positive
/// maximum yields `F` at 0%. Otherwise the percentage is rounded to two
/// decimals and the scheme's boundaries are scanned in declaration order; the
/// first one containing it wins, and `F` with 0 points is returned when none does.
pub fn calculate_grade(
    marks_obtained: f64,
    max_marks: f64,
    scheme: &GradingScheme,
) -> GradeOutcome {
    if marks_obtained == 0.0 && max_marks == 0.0 {
        return GradeOutcome {
            grade: ABSENT_GRADE.to_string(),
            grade_point: 0.0,
            percentage: 0.0,
        };
    }

    if !max_marks.is_finite() || !marks_obtained.is_finite() || max_marks <= 0.0 {
        return GradeOutcome {
            grade: FAIL_GRADE.to_string(),
            grade_point: 0.0,
            percentage: 0.0,
        };
    }

    let percentage = round2(marks_obtained / max_marks * 100.0);
    match scheme.lookup(percentage) {
        Some(boundary) => GradeOutcome {
            grade: boundary.grade.clone(),
            grade_point: boundary.points,
            percentage,
        },
        None => GradeOutcome {
            grade: FAIL_GRADE.to_string(),
            grade_point: 0.0,
            percentage,
        },
    }
}

/// Credit-weighted mean grade point of one semester. `0` when there are no credits.
pub fn calculate_sgpa(courses: &[CourseCredit]) -> f64 {
    weighted_mean(courses.iter().map(|c| (c.credits, c.grade_point)))
}

/// Credit-weighted mean of semester SGPAs. `0` when there are no credits.
pub fn calculate_cgpa(semesters: &[SemesterResult]) -> f64 {
    weighted_mean(semesters.iter().map(|s| (s.total_credits, s.sgpa)))
}

fn weighted_mean(entries: impl Iterator<Item = (f64, f64)>) -> f64 {
    let (weighted, total_credits) = entries
        .filter(|(credits, points)| credits.is_finite() && points.is_finite())
        .fold((0.0, 0.0), |(weighted, total), (credits, points)| {
            (weighted + credits * points, total + credits)
        });
    if total_credits == 0.0 {
        return 0.0;
    }
    let mean = weighted / total_credits;
    if mean.is_finite() { mean } else { 0.0 }
}
