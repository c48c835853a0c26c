//! Command helper utilities

use std::path::PathBuf;

use tracing::debug;

use crate::cli::PatchInput;
use crate::config::{self, PatchFile};
use crate::error::{self, Result};
use crate::patch::{PatchSpec, ReplaceMode};

/// A patch with every input source merged
#[derive(Debug)]
pub struct ResolvedPatch {
    pub target: PathBuf,
    pub spec: PatchSpec,
    pub mode: ReplaceMode,
}

/// Merge command-line inputs with an optional patch file
///
/// Flags win over fields of the patch file. `replacement` is the already
/// read replacement text, if the command accepts one; when `None`, the patch
/// file's replacement is used, or an empty replacement if `needs_replacement`
/// is false.
pub fn resolve_patch(
    input: &PatchInput,
    replacement: Option<String>,
    needs_replacement: bool,
) -> Result<ResolvedPatch> {
    let file = input.patch.as_deref().map(PatchFile::load).transpose()?;

    if let (Some(file), Some(path)) = (&file, &input.patch) {
        debug!(
            patch = %path.display(),
            description = file.description.as_deref().unwrap_or(""),
            "loaded patch file"
        );
    }

    let expected = match (&input.expected, &input.expected_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => config::read_literal(path)?,
        (None, None) => file
            .as_ref()
            .map(|f| f.expected.clone())
            .ok_or_else(|| error::config::invalid("no expected text given"))?,
    };

    let replacement = match replacement.or_else(|| file.as_ref().map(|f| f.replacement.clone())) {
        Some(text) => text,
        None if needs_replacement => {
            return Err(error::config::invalid("no replacement text given"));
        }
        None => String::new(),
    };

    let target = input
        .target
        .clone()
        .or_else(|| file.as_ref().map(|f| f.target.clone()))
        .ok_or_else(|| error::config::invalid("no target file given"))?;

    let mode = if input.first {
        ReplaceMode::First
    } else {
        file.as_ref().map(|f| f.mode).unwrap_or_default()
    };

    Ok(ResolvedPatch {
        target,
        spec: PatchSpec::new(expected, replacement)?,
        mode,
    })
}

/// Read replacement text from the inline flag or a literal file
pub fn read_replacement(
    inline: Option<&str>,
    file: Option<&std::path::Path>,
) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text.to_string())),
        (None, Some(path)) => config::read_literal(path).map(Some),
        (None, None) => Ok(None),
    }
}
