//! # Markbook CLI
//!
//! Command implementations behind the `markbook-cli` binary. Each command
//! takes already-read JSON text so it can be exercised without touching the
//! filesystem.
//!
//! ## Usage
//!
//! ```bash
//! markbook-cli validate marks --file marks.json
//! markbook-cli rules --rule-type gradeWeights --file weights.json
//! markbook-cli transition --workflow marks-entry --from draft --to submitted --role faculty
//! markbook-cli grade --marks 72 --max 100
//! markbook-cli sgpa --file courses.json
//! ```

pub mod commands;
