pub mod business_rules;
pub mod courses;
pub mod exams;
pub mod grades;
pub mod marks;
pub mod revaluation;
pub mod students;
pub mod workflow;

pub use self::business_rules::{RuleType, validate_business_rules, validate_rule_set};
pub use self::courses::validate_course;
pub use self::exams::validate_exam;
pub use self::grades::validate_grade;
pub use self::marks::{marks_error_messages, validate_marks};
pub use self::revaluation::validate_revaluation_request;
pub use self::students::validate_student;
pub use self::workflow::{
    validate_moderation_transition, validate_publication_transition,
    validate_revaluation_transition, validate_transition, validate_workflow_transition,
};
