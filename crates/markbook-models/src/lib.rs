//! # Markbook Models
//!
//! Plain academic records handed to Markbook's validators, plus the small
//! typed vocabulary the validators check them against.
//!
//! # Modules
//!
//! - [`ids`]: opaque string ID newtypes for each entity
//! - [`value_types`]: format-checked values (email, roll number, course code, ...)
//! - [`students`], [`courses`], [`exams`], [`marks`], [`grades`], [`revaluation`]:
//!   one record type per entity, deserialised from camelCase JSON
//! - [`workflow`]: the four results workflows and their transition tables
//!
//! Every record field is optional so that a missing value can be reported as a
//! validation error instead of failing deserialisation.
//!
//! # Example
//!
//! ```
//! use markbook_models::marks::Marks;
//!
//! let marks: Marks = serde_json::from_str(
//!     r#"{"studentId": "s1", "courseId": "c1", "examId": "e1", "marksObtained": 72, "maxMarks": 100}"#,
//! ).unwrap();
//! assert_eq!(marks.marks_obtained, Some(72.0));
//! ```

pub mod courses;
pub mod exams;
pub mod grades;
pub mod ids;
pub mod marks;
pub mod revaluation;
pub mod students;
pub mod value_types;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use courses::Course;
pub use exams::{Exam, ExamType};
pub use grades::Grade;
pub use ids::{CourseId, ExamId, GradeId, MarksId, RevaluationId, StudentId};
pub use marks::Marks;
pub use revaluation::RevaluationRequest;
pub use students::{AcademicInfo, Address, Student};
pub use value_types::{CourseCode, Email, PhoneNumber, PinCode, RollNumber, ValueTypeError};
pub use workflow::{
    MarksEntryState, ModerationState, PublicationState, RevaluationState, WorkflowState,
};
