//! Grading schemes: grade-letter boundaries over the 0–100 percentage scale.
//!
//! Boundaries are kept in declaration order. Lookups scan them in that order
//! and return the first boundary whose closed `[min, max]` range contains the
//! percentage, so a scheme with overlapping ranges resolves to whichever grade
//! was declared first. Schemes registered through
//! [`GradesSchema`](crate::GradesSchema) are checked with
//! [`GradingScheme::check_boundaries`] and never overlap.

use crate::errors::SchemeError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Widest gap tolerated between two adjacent boundaries.
///
/// Percentages are resolved to two decimals, so `79.99` followed by `80` is contiguous.
pub const BOUNDARY_GAP_TOLERANCE: f64 = 0.01;

const EPSILON: f64 = 1e-9;

/// One grade letter and the percentage range that earns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBoundary {
    pub grade: String,
    pub min: f64,
    pub max: f64,
    pub points: f64,
}

impl GradeBoundary {
    pub fn new(grade: impl Into<String>, min: f64, max: f64, points: f64) -> Self {
        Self {
            grade: grade.into(),
            min,
            max,
            points,
        }
    }

    /// Whether `percentage` lies within the closed range `[min, max]`.
    #[inline]
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.min && percentage <= self.max
    }
}

/// A named set of grade boundaries plus its applicability window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingScheme {
    pub name: String,
    #[serde(default)]
    pub boundaries: Vec<GradeBoundary>,
    pub passing_marks: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub applicable_from: Option<NaiveDate>,
    #[serde(default)]
    pub applicable_to: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl Default for GradingScheme {
    /// The ten-point scheme used when nothing else is configured.
    fn default() -> Self {
        Self {
            name: "10-point".to_string(),
            boundaries: vec![
                GradeBoundary::new("O", 90.0, 100.0, 10.0),
                GradeBoundary::new("A+", 80.0, 89.99, 9.0),
                GradeBoundary::new("A", 70.0, 79.99, 8.0),
                GradeBoundary::new("B+", 60.0, 69.99, 7.0),
                GradeBoundary::new("B", 50.0, 59.99, 6.0),
                GradeBoundary::new("C", 45.0, 49.99, 5.0),
                GradeBoundary::new("P", 40.0, 44.99, 4.0),
                GradeBoundary::new("F", 0.0, 39.99, 0.0),
            ],
            passing_marks: 40.0,
            is_active: true,
            applicable_from: None,
            applicable_to: None,
        }
    }
}

impl GradingScheme {
    /// Boundary declared for `grade`, if any.
    pub fn boundary_for(&self, grade: &str) -> Option<&GradeBoundary> {
        self.boundaries.iter().find(|b| b.grade == grade)
    }

    /// Grade points declared for `grade`, if any.
    pub fn points_for(&self, grade: &str) -> Option<f64> {
        self.boundary_for(grade).map(|b| b.points)
    }

    /// First boundary, in declaration order, containing `percentage`.
    pub fn lookup(&self, percentage: f64) -> Option<&GradeBoundary> {
        self.boundaries.iter().find(|b| b.contains(percentage))
    }

    /// Whether the scheme is active and `date` falls inside its window.
    ///
    /// An unset bound leaves that side of the window open.
    pub fn is_applicable_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.applicable_from.is_none_or(|from| from <= date)
            && self.applicable_to.is_none_or(|to| date <= to)
    }

    /// Verify the boundaries tile `[0, 100]` without overlaps.
    ///
    /// Each range must satisfy `0 <= min <= max <= 100`, grade letters must be
    /// unique, adjacent ranges may not share any percentage, and the gap between
    /// them may not exceed [`BOUNDARY_GAP_TOLERANCE`].
    pub fn check_boundaries(&self) -> Result<(), SchemeError> {
        if self.boundaries.is_empty() {
            return Err(SchemeError::Empty(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for b in &self.boundaries {
            if !b.min.is_finite()
                || !b.max.is_finite()
                || b.min < 0.0
                || b.max > 100.0
                || b.min > b.max
            {
                return Err(SchemeError::InvalidRange {
                    grade: b.grade.clone(),
                    min: b.min,
                    max: b.max,
                });
            }
            if !seen.insert(b.grade.as_str()) {
                return Err(SchemeError::DuplicateGrade(b.grade.clone()));
            }
        }

        let mut sorted: Vec<&GradeBoundary> = self.boundaries.iter().collect();
        sorted.sort_by(|a, b| a.min.total_cmp(&b.min));

        let lowest = sorted[0];
        if lowest.min > EPSILON {
            return Err(SchemeError::Gap {
                from: 0.0,
                to: lowest.min,
            });
        }

        for pair in sorted.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if upper.min <= lower.max {
                return Err(SchemeError::Overlap {
                    first: lower.grade.clone(),
                    second: upper.grade.clone(),
                });
            }
            if upper.min - lower.max > BOUNDARY_GAP_TOLERANCE + EPSILON {
                return Err(SchemeError::Gap {
                    from: lower.max,
                    to: upper.min,
                });
            }
        }

        let highest = sorted[sorted.len() - 1];
        if highest.max < 100.0 - EPSILON {
            return Err(SchemeError::Gap {
                from: highest.max,
                to: 100.0,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(boundaries: Vec<GradeBoundary>) -> GradingScheme {
        GradingScheme {
            name: "test".to_string(),
            boundaries,
            ..GradingScheme::default()
        }
    }

    #[test]
    fn test_default_scheme_is_contiguous() {
        assert!(GradingScheme::default().check_boundaries().is_ok());
    }

    #[test]
    fn test_points_for() {
        let scheme = GradingScheme::default();
        assert_eq!(scheme.points_for("A+"), Some(9.0));
        assert_eq!(scheme.points_for("F"), Some(0.0));
        assert_eq!(scheme.points_for("Z"), None);
    }

    #[test]
    fn test_lookup_first_match_in_declaration_order() {
        let overlapping = scheme(vec![
            GradeBoundary::new("X", 50.0, 100.0, 8.0),
            GradeBoundary::new("Y", 40.0, 60.0, 6.0),
        ]);
        assert_eq!(
            overlapping.lookup(55.0).map(|b| b.grade.as_str()),
            Some("X")
        );
        assert_eq!(
            overlapping.lookup(45.0).map(|b| b.grade.as_str()),
            Some("Y")
        );
        assert!(overlapping.lookup(10.0).is_none());
    }

    #[test]
    fn test_empty_scheme_rejected() {
        assert_eq!(
            scheme(vec![]).check_boundaries(),
            Err(SchemeError::Empty("test".to_string()))
        );
    }

    #[test]
    fn test_overlap_rejected() {
        let result = scheme(vec![
            GradeBoundary::new("A", 50.0, 100.0, 8.0),
            GradeBoundary::new("B", 0.0, 50.0, 4.0),
        ])
        .check_boundaries();
        assert!(matches!(result, Err(SchemeError::Overlap { .. })));
    }

    #[test]
    fn test_gap_rejected() {
        let result = scheme(vec![
            GradeBoundary::new("A", 60.0, 100.0, 8.0),
            GradeBoundary::new("B", 0.0, 50.0, 4.0),
        ])
        .check_boundaries();
        assert_eq!(
            result,
            Err(SchemeError::Gap {
                from: 50.0,
                to: 60.0,
            })
        );
    }

    #[test]
    fn test_uncovered_ends_rejected() {
        let top = scheme(vec![GradeBoundary::new("A", 0.0, 90.0, 8.0)]).check_boundaries();
        assert_eq!(
            top,
            Err(SchemeError::Gap {
                from: 90.0,
                to: 100.0,
            })
        );

        let bottom = scheme(vec![GradeBoundary::new("A", 10.0, 100.0, 8.0)]).check_boundaries();
        assert_eq!(
            bottom,
            Err(SchemeError::Gap {
                from: 0.0,
                to: 10.0,
            })
        );
    }

    #[test]
    fn test_invalid_range_and_duplicates_rejected() {
        let inverted = scheme(vec![GradeBoundary::new("A", 100.0, 0.0, 8.0)]).check_boundaries();
        assert!(matches!(inverted, Err(SchemeError::InvalidRange { .. })));

        let duplicate = scheme(vec![
            GradeBoundary::new("A", 50.0, 100.0, 8.0),
            GradeBoundary::new("A", 0.0, 49.99, 4.0),
        ])
        .check_boundaries();
        assert_eq!(duplicate, Err(SchemeError::DuplicateGrade("A".to_string())));
    }

    #[test]
    fn test_applicability_window() {
        let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let mut scheme = GradingScheme {
            applicable_from: Some(date("2024-01-01")),
            applicable_to: Some(date("2024-12-31")),
            ..GradingScheme::default()
        };
        assert!(scheme.is_applicable_on(date("2024-06-01")));
        assert!(!scheme.is_applicable_on(date("2025-01-01")));

        scheme.is_active = false;
        assert!(!scheme.is_applicable_on(date("2024-06-01")));
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"name": "pass-fail", "passingMarks": 50,
            "boundaries": [{"grade": "P", "min": 50, "max": 100, "points": 1},
                           {"grade": "F", "min": 0, "max": 49.99, "points": 0}]}"#;
        let scheme: GradingScheme = serde_json::from_str(json).unwrap();
        assert!(scheme.is_active);
        assert!(scheme.applicable_from.is_none());
        assert_eq!(scheme.boundaries[0].grade, "P");
        assert!(scheme.check_boundaries().is_ok());
    }
}
