//! Guarded find-and-replace over a single file
//!
//! [`TextPatcher::apply_patch`] runs read → validate+transform → write. The
//! target is only written after the expected text has been found, so a
//! mismatch leaves the file exactly as it was. There is no temp file or
//! rename step: the final write overwrites the target in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{self, Result};
use crate::patch::{PatchSpec, ReplaceMode};

/// Result of a successful patch application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub occurrences: usize,
    pub replaced: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

/// Original and patched content of a target, computed without writing
#[derive(Debug, Clone)]
pub struct Preview {
    pub path: PathBuf,
    pub original: String,
    pub patched: String,
    pub occurrences: usize,
    pub replaced: usize,
}

impl Preview {
    /// Summary of this change, as `apply_patch` would report it
    pub fn outcome(&self) -> PatchOutcome {
        PatchOutcome {
            path: self.path.clone(),
            occurrences: self.occurrences,
            replaced: self.replaced,
            bytes_before: self.original.len(),
            bytes_after: self.patched.len(),
        }
    }
}

/// Applies a [`PatchSpec`] to files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPatcher {
    mode: ReplaceMode,
}

impl TextPatcher {
    pub fn new(mode: ReplaceMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ReplaceMode {
        self.mode
    }

    /// Read the target and compute the patched content without writing
    pub fn preview(&self, path: &Path, spec: &PatchSpec) -> Result<Preview> {
        let original = read_document(path)?;

        let Some(sub) = spec.apply_to(&original, self.mode) else {
            warn!(path = %path.display(), "expected text not found");
            return Err(error::patch::mismatch(path));
        };

        debug!(
            path = %path.display(),
            occurrences = sub.occurrences,
            replaced = sub.replaced,
            mode = %self.mode,
            "expected text located"
        );

        Ok(Preview {
            path: path.to_path_buf(),
            original,
            patched: sub.content,
            occurrences: sub.occurrences,
            replaced: sub.replaced,
        })
    }

    /// Replace the expected text in the file at `path` and write it back
    ///
    /// Fails with `PatchMismatch` and writes nothing when the expected text
    /// is absent. Applying the same patch twice therefore fails the second
    /// time.
    pub fn apply_patch(&self, path: &Path, spec: &PatchSpec) -> Result<PatchOutcome> {
        let preview = self.preview(path, spec)?;
        self.write(&preview)
    }

    /// Persist a previously computed preview over its target
    pub fn write(&self, preview: &Preview) -> Result<PatchOutcome> {
        let path = preview.path.as_path();
        fs::write(path, preview.patched.as_bytes())
            .map_err(|e| error::fs::write_failed(path, &e))?;

        let outcome = preview.outcome();
        info!(
            path = %path.display(),
            replaced = outcome.replaced,
            bytes_before = outcome.bytes_before,
            bytes_after = outcome.bytes_after,
            "patch applied"
        );

        Ok(outcome)
    }
}

fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))?;
    debug!(path = %path.display(), bytes = content.len(), "read target");
    Ok(content)
}
