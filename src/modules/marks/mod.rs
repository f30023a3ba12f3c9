//! Marks record validation and the plain-message adapter used by older callers.

pub mod service;

pub use service::{marks_error_messages, validate_marks};
