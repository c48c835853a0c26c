//! Patch definition file errors

use std::io::ErrorKind;
use std::path::Path;

use super::TextpatchError;

/// Maps an I/O error raised while reading a patch or literal file
pub fn read_failed(path: &Path, err: &std::io::Error) -> TextpatchError {
    let path = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => TextpatchError::ConfigNotFound { path },
        _ => TextpatchError::ConfigReadFailed {
            path,
            reason: err.to_string(),
        },
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> TextpatchError {
    TextpatchError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> TextpatchError {
    TextpatchError::ConfigInvalid {
        message: message.into(),
    }
}
