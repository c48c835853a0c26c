//! Patch guard errors

use std::path::Path;

use super::TextpatchError;

/// Creates a patch mismatch error for a target
pub fn mismatch(path: &Path) -> TextpatchError {
    TextpatchError::PatchMismatch {
        path: path.display().to_string(),
    }
}
