//! Revaluation request validation.

pub mod service;

pub use service::validate_revaluation_request;
