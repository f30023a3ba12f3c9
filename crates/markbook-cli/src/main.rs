use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use markbook::{GradesValidator, ValidationResult};
use markbook_cli::commands::{self, Entity, Workflow};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "markbook-cli")]
#[command(about = "Markbook CLI - Validate grade records and compute GPAs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single record read from a JSON file
    Validate {
        /// Kind of record in the file
        #[arg(value_enum)]
        entity: Entity,

        /// Path to the JSON record
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Validate a business rule payload
    Rules {
        /// gradeWeights, passingCriteria or gradingScheme
        #[arg(short = 't', long)]
        rule_type: String,

        /// Path to the JSON payload
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Check whether a role may move a workflow between two states
    Transition {
        #[arg(short = 'w', long, value_enum, default_value = "marks-entry")]
        workflow: Workflow,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(short = 'r', long)]
        role: String,
    },
    /// Resolve marks to a grade using the configured scheme
    Grade {
        #[arg(short = 'm', long)]
        marks: f64,

        #[arg(long)]
        max: f64,
    },
    /// Semester GPA from a JSON list of {credits, gradePoint}
    Sgpa {
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Cumulative GPA from a JSON list of {sgpa, totalCredits}
    Cgpa {
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    markbook_observability::init_logging();

    let cli = Cli::parse();
    let validator = GradesValidator::from_env()?;

    match cli.command {
        Commands::Validate { entity, file } => {
            let json = commands::read_file(&file)?;
            report(&commands::validate_record(&validator, entity, &json)?)
        }
        Commands::Rules { rule_type, file } => {
            let json = commands::read_file(&file)?;
            report(&commands::check_rules(&validator, &rule_type, &json)?)
        }
        Commands::Transition {
            workflow,
            from,
            to,
            role,
        } => report(&commands::check_transition(&validator, workflow, &from, &to, &role)),
        Commands::Grade { marks, max } => print_json(&validator.grade_for(marks, max)),
        Commands::Sgpa { file } => print_json(&commands::sgpa(&commands::read_file(&file)?)?),
        Commands::Cgpa { file } => print_json(&commands::cgpa(&commands::read_file(&file)?)?),
    }
}

fn report(result: &ValidationResult) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(result)?);
    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::info!(errors = result.errors().len(), "Validation failed");
        Ok(ExitCode::FAILURE)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::SUCCESS)
}
