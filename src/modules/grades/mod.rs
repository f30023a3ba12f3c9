//! Grade record validation against a grading scheme.

pub mod service;

pub use service::validate_grade;
