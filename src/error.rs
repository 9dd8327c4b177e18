//! Error types and handling for Skillpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillpackError {
    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(skillpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(skillpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy into: {path}")]
    #[diagnostic(
        code(skillpack::fs::copy_failed),
        help("Check permissions on the target directory, then re-run install")
    )]
    CopyFailed { path: String, reason: String },

    #[error("Failed to remove: {path}")]
    #[diagnostic(code(skillpack::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to list directory: {path}")]
    #[diagnostic(code(skillpack::fs::list_failed))]
    ListFailed { path: String, reason: String },

    // Audit errors
    #[error("Unknown agent: {name}")]
    #[diagnostic(
        code(skillpack::audit::unknown_agent),
        help("Supported agents: Antigravity, OpenCode, Windsurf, Claude Code")
    )]
    UnknownAgent { name: String },

    // Report / manifest serialization
    #[error("Failed to serialize: {reason}")]
    #[diagnostic(code(skillpack::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillpackError {
    fn from(err: std::io::Error) -> Self {
        SkillpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillpackError {
    fn from(err: serde_json::Error) -> Self {
        SkillpackError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillpackError>;
