//! Error types and handling for textpatch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors on the patch target
//! - [`patch`]: Patch guard and pattern errors
//! - [`config`]: Patch definition file errors

pub mod config;
pub mod fs;
pub mod patch;


use miette::Diagnostic;
use thiserror::Error;

/// Process exit status for a patch whose expected text was not found
pub const EXIT_PATCH_MISMATCH: i32 = 2;

/// Process exit status for every other failure
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for textpatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum TextpatchError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(textpatch::fs::not_found),
        help("Check that the target path is correct")
    )]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    #[diagnostic(code(textpatch::fs::permission_denied))]
    PermissionDenied { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(textpatch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("File is not valid UTF-8: {path}")]
    #[diagnostic(
        code(textpatch::fs::invalid_encoding),
        help("Only UTF-8 encoded text files can be patched")
    )]
    InvalidEncoding { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(textpatch::fs::write_failed))]
    WriteFailure { path: String, reason: String },

    // Patch errors
    #[error("Pattern not found in {path}")]
    #[diagnostic(
        code(textpatch::patch::mismatch),
        help(
            "The file content no longer matches the expected text. Nothing was written; inspect the file before retrying"
        )
    )]
    PatchMismatch { path: String },

    #[error("Expected text must not be empty")]
    #[diagnostic(code(textpatch::patch::empty_pattern))]
    EmptyPattern,

    // Configuration errors
    #[error("Input file not found: {path}")]
    #[diagnostic(code(textpatch::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read input file: {path}: {reason}")]
    #[diagnostic(code(textpatch::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse patch file: {path}: {reason}")]
    #[diagnostic(code(textpatch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid patch definition: {message}")]
    #[diagnostic(
        code(textpatch::config::invalid),
        help("Provide a target, --expected or --expected-file, and --replacement or --replacement-file")
    )]
    ConfigInvalid { message: String },
}

impl TextpatchError {
    /// Process exit status for this error
    ///
    /// A mismatch gets its own status so operators can tell drifted content
    /// apart from environment failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            TextpatchError::PatchMismatch { .. } => EXIT_PATCH_MISMATCH,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<serde_yaml::Error> for TextpatchError {
    fn from(err: serde_yaml::Error) -> Self {
        TextpatchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TextpatchError>;
