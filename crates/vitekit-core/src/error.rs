//! Error taxonomy for template rendering and project assembly

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the template micro-engine when strict mode is enabled.
/// In the default permissive mode the engine never fails: malformed
/// directives are left in the output verbatim.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unmatched block directive '{directive}' at byte {position}")]
    UnmatchedBlock { directive: String, position: usize },

    #[error("partial '{0}' nested deeper than {1} levels")]
    PartialTooDeep(String, usize),
}

/// Errors surfaced by the assembly pipeline. Precondition violations are
/// raised before any file is written; generation failures abort the
/// remaining steps and leave already-written files on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("invalid project name '{name}': {}", .errors.join(", "))]
    InvalidProjectName { name: String, errors: Vec<String> },

    #[error("output path '{path}' generated by both '{first}' and '{second}'")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },

    #[error("invalid plugin registration: {0}")]
    InvalidPlugin(String),

    #[error("script '{key}' contributed by both '{first}' and '{second}'")]
    ScriptCollision {
        key: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Template(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dependency installation failed ({command} exited with code {code})")]
    InstallFailed { command: String, code: i32 },
}
