//! File system errors

use std::io::ErrorKind;
use std::path::Path;

use super::TextpatchError;

/// Maps an I/O error raised while reading the target to its error variant
pub fn read_failed(path: &Path, err: &std::io::Error) -> TextpatchError {
    let path = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => TextpatchError::FileNotFound { path },
        ErrorKind::PermissionDenied => TextpatchError::PermissionDenied { path },
        ErrorKind::InvalidData => TextpatchError::InvalidEncoding { path },
        _ => TextpatchError::FileReadFailed {
            path,
            reason: err.to_string(),
        },
    }
}

/// Creates a write failure error
pub fn write_failed(path: &Path, err: &std::io::Error) -> TextpatchError {
    TextpatchError::WriteFailure {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
