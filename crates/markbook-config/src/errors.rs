use std::path::PathBuf;

/// A grading scheme whose boundaries cannot be registered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemeError {
    #[error("grading scheme '{0}' declares no grade boundaries")]
    Empty(String),

    #[error("grade '{grade}' has an invalid range [{min}, {max}]")]
    InvalidRange { grade: String, min: f64, max: f64 },

    #[error("grade '{0}' is declared more than once")]
    DuplicateGrade(String),

    #[error("grades '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },

    #[error("no grade covers percentages between {from} and {to}")]
    Gap { from: f64, to: f64 },
}

/// Failure to build or load a [`GradesSchema`](crate::GradesSchema).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid grading scheme: {0}")]
    Scheme(#[from] SchemeError),

    #[error("grade weights must sum to 100, got {0}")]
    Weights(f64),
}
