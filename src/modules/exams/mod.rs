//! Exam record validation.

pub mod service;

pub use service::validate_exam;
