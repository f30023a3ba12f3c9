//! Permission-checked transitions for the four results workflows.

pub mod service;

pub use service::{
    validate_moderation_transition, validate_publication_transition,
    validate_revaluation_transition, validate_transition, validate_workflow_transition,
};
