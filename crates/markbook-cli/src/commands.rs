use anyhow::{Context, Result};
use clap::ValueEnum;
use markbook::utils::grading::{
    CourseCredit, SemesterResult, calculate_cgpa, calculate_sgpa, round2,
};
use markbook::{GradesValidator, ValidationResult};
use markbook_models::{Course, Exam, Grade, Marks, RevaluationRequest, Student};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use tracing::debug;

/// Record types accepted by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Student,
    Course,
    Exam,
    Marks,
    Grade,
    Revaluation,
}

/// Workflows accepted by `transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Workflow {
    MarksEntry,
    Moderation,
    Publication,
    Revaluation,
}

/// Aggregate GPA printed by `sgpa` and `cgpa`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaReport {
    pub value: f64,
    pub rounded: f64,
    pub total_credits: f64,
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    serde_json::from_str(json).with_context(|| format!("Failed to parse {} JSON", what))
}

/// Deserialize one record of `entity` and validate it.
pub fn validate_record(
    validator: &GradesValidator,
    entity: Entity,
    json: &str,
) -> Result<ValidationResult> {
    debug!(?entity, "Validating record");
    let result = match entity {
        Entity::Student => validator.validate_student(&parse::<Student>(json, "student")?),
        Entity::Course => validator.validate_course(&parse::<Course>(json, "course")?),
        Entity::Exam => validator.validate_exam(&parse::<Exam>(json, "exam")?),
        Entity::Marks => validator.validate_marks(&parse::<Marks>(json, "marks")?),
        Entity::Grade => validator.validate_grade(&parse::<Grade>(json, "grade")?),
        Entity::Revaluation => {
            let request = parse::<RevaluationRequest>(json, "revaluation request")?;
            validator.validate_revaluation_request(&request)
        }
    };
    Ok(result)
}

pub fn check_rules(
    validator: &GradesValidator,
    rule_type: &str,
    json: &str,
) -> Result<ValidationResult> {
    let input: serde_json::Value = parse(json, "rules")?;
    Ok(validator.validate_business_rules(&input, rule_type))
}

pub fn check_transition(
    validator: &GradesValidator,
    workflow: Workflow,
    from: &str,
    to: &str,
    role: &str,
) -> ValidationResult {
    match workflow {
        Workflow::MarksEntry => validator.validate_workflow_transition(from, to, role),
        Workflow::Moderation => validator.validate_moderation_transition(from, to, role),
        Workflow::Publication => validator.validate_publication_transition(from, to, role),
        Workflow::Revaluation => validator.validate_revaluation_transition(from, to, role),
    }
}

/// SGPA of a JSON list of `{credits, gradePoint}`.
pub fn sgpa(json: &str) -> Result<GpaReport> {
    let courses: Vec<CourseCredit> = parse(json, "course credits")?;
    let value = calculate_sgpa(&courses);
    Ok(GpaReport {
        value,
        rounded: round2(value),
        total_credits: courses.iter().map(|c| c.credits).sum(),
    })
}

/// CGPA of a JSON list of `{sgpa, totalCredits}`.
pub fn cgpa(json: &str) -> Result<GpaReport> {
    let semesters: Vec<SemesterResult> = parse(json, "semester results")?;
    let value = calculate_cgpa(&semesters);
    Ok(GpaReport {
        value,
        rounded: round2(value),
        total_credits: semesters.iter().map(|s| s.total_credits).sum(),
    })
}
