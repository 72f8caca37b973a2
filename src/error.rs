use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AnodraError {
    #[error("Directory already exists: {path}")]
    #[diagnostic(help("Choose a different project name or remove the existing directory"))]
    ProjectExists { path: PathBuf },

    #[error("No mapping for selection '{value}'")]
    #[diagnostic(help("The prompt offered a choice the plan builder does not know; this is a bug"))]
    InvalidSelection { value: String },

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("Step '{step}' failed: {message}")]
    #[diagnostic(help(
        "Completed steps are not rolled back; remove the project directory before retrying"
    ))]
    StepFailed { step: String, message: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnodraError>;
