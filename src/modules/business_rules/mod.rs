//! Checks for grade weightings, passing criteria and grading schemes.

pub mod service;

pub use service::{RuleType, validate_business_rules, validate_rule_set};
