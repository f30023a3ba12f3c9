//! Course record validation.

pub mod service;

pub use service::validate_course;
