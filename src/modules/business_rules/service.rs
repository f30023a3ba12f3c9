use crate::utils::checks::{check_range, details, finish};
use markbook_config::{BusinessRules, GradeBoundary, GradingScheme, WEIGHT_SUM_TOLERANCE};
use markbook_core::{ValidationErrorType, ValidationResult};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Which part of the rule registry a business-rule payload describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    GradeWeights,
    PassingCriteria,
    GradingScheme,
}

impl RuleType {
    pub const ALL: [RuleType; 3] = [
        RuleType::GradeWeights,
        RuleType::PassingCriteria,
        RuleType::GradingScheme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::GradeWeights => "gradeWeights",
            RuleType::PassingCriteria => "passingCriteria",
            RuleType::GradingScheme => "gradingScheme",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown rule type: {}", s))
    }
}

const PASSING_KEYS: [(&str, &str); 3] = [
    ("perCourse", "Per-course passing percentage"),
    ("aggregate", "Aggregate passing percentage"),
    ("minimumAttendance", "Minimum attendance"),
];

/// Boundary entry in the `{"A": {"min": .., "max": .., "points": ..}}` form.
#[derive(Deserialize)]
struct BoundaryRange {
    min: f64,
    max: f64,
    points: f64,
}

/// Validate a loosely-typed rule payload.
///
/// - `gradeWeights`: every numeric value is summed; the sum must be 100.
/// - `passingCriteria`: `perCourse`, `aggregate` and `minimumAttendance` are
///   percentages when given.
/// - `gradingScheme`: `boundaries` (a list, or a map keyed by grade letter)
///   must be present and tile `[0, 100]` without overlaps.
///
/// An unrecognised `rule_type` is reported as an `INVALID_FORMAT` error on
/// `ruleType`.
#[instrument(level = "debug", skip(input))]
pub fn validate_business_rules(input: &Value, rule_type: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    let rule_type = match rule_type.parse::<RuleType>() {
        Ok(rule_type) => rule_type,
        Err(message) => {
            let allowed: Vec<&str> = RuleType::ALL.iter().map(RuleType::as_str).collect();
            result.add_error_with_details(
                "ruleType",
                ValidationErrorType::InvalidFormat,
                message,
                details(json!({ "value": rule_type, "allowed": allowed })),
            );
            return finish("business_rules", result);
        }
    };

    let Some(map) = input.as_object() else {
        result.add_error(
            "input",
            ValidationErrorType::InvalidFormat,
            format!("{} rules must be a JSON object", rule_type),
        );
        return finish("business_rules", result);
    };

    match rule_type {
        RuleType::GradeWeights => {
            let sum: f64 = map.values().filter_map(Value::as_f64).sum();
            check_weight_sum(&mut result, sum);
        }
        RuleType::PassingCriteria => {
            for (key, label) in PASSING_KEYS {
                match map.get(key) {
                    None | Some(Value::Null) => {}
                    Some(value) => match value.as_f64() {
                        Some(n) => {
                            check_range(&mut result, key, label, n, 0.0, 100.0);
                        }
                        None => result.add_error(
                            key,
                            ValidationErrorType::InvalidFormat,
                            format!("{} must be a number", label),
                        ),
                    },
                }
            }
        }
        RuleType::GradingScheme => check_scheme_payload(&mut result, map),
    }

    finish("business_rules", result)
}

/// Validate a typed rule registry: weights, passing criteria and grading scheme together.
#[instrument(level = "debug", skip_all)]
pub fn validate_rule_set(rules: &BusinessRules) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_weight_sum(&mut result, rules.grade_weights.total());

    let criteria = &rules.passing_criteria;
    let values = [criteria.per_course, criteria.aggregate, criteria.minimum_attendance];
    for ((key, label), value) in PASSING_KEYS.into_iter().zip(values) {
        check_range(&mut result, key, label, value, 0.0, 100.0);
    }

    check_scheme(&mut result, &rules.grading_scheme);

    finish("business_rules", result)
}

fn check_weight_sum(result: &mut ValidationResult, sum: f64) {
    if (sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
        result.add_error_with_details(
            "gradeWeights",
            ValidationErrorType::BusinessRuleViolation,
            format!("Grade weights must sum to 100, got {}", sum),
            details(json!({ "expected": 100, "sum": sum })),
        );
    }
}

fn check_scheme_payload(result: &mut ValidationResult, map: &Map<String, Value>) {
    let boundaries = match map.get("boundaries") {
        Some(Value::Array(list)) if !list.is_empty() => {
            serde_json::from_value::<Vec<GradeBoundary>>(Value::Array(list.clone()))
        }
        Some(Value::Object(entries)) if !entries.is_empty() => entries
            .iter()
            .map(|(grade, range)| -> Result<GradeBoundary, serde_json::Error> {
                let range = BoundaryRange::deserialize(range)?;
                Ok(GradeBoundary::new(grade.clone(), range.min, range.max, range.points))
            })
            .collect(),
        _ => {
            result.add_error(
                "boundaries",
                ValidationErrorType::RequiredField,
                "Grade boundaries are required",
            );
            return;
        }
    };

    match boundaries {
        Ok(boundaries) => {
            let scheme = GradingScheme {
                name: map
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("custom")
                    .to_string(),
                boundaries,
                ..GradingScheme::default()
            };
            check_scheme(result, &scheme);
        }
        Err(err) => result.add_error(
            "boundaries",
            ValidationErrorType::InvalidFormat,
            format!("Grade boundaries could not be read: {}", err),
        ),
    }
}

fn check_scheme(result: &mut ValidationResult, scheme: &GradingScheme) {
    if let Err(err) = scheme.check_boundaries() {
        result.add_error_with_details(
            "boundaries",
            ValidationErrorType::BusinessRuleViolation,
            err.to_string(),
            details(json!({ "scheme": scheme.name })),
        );
    }
}
