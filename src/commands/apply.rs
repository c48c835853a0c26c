//! Apply command implementation

use tracing::debug;

use crate::cli::ApplyArgs;
use crate::commands::helpers::{read_replacement, resolve_patch};
use crate::error::Result;
use crate::patcher::TextPatcher;
use crate::ui;

/// Run apply command
pub fn run(args: ApplyArgs) -> Result<()> {
    let replacement = read_replacement(
        args.replacement.as_deref(),
        args.replacement_file.as_deref(),
    )?;
    let resolved = resolve_patch(&args.input, replacement, true)?;
    let patcher = TextPatcher::new(resolved.mode);

    debug!(
        target_file = %resolved.target.display(),
        expected_bytes = resolved.spec.expected().len(),
        replacement_bytes = resolved.spec.replacement().len(),
        dry_run = args.dry_run,
        "applying patch"
    );

    let outcome = if args.diff || args.dry_run {
        let preview = patcher.preview(&resolved.target, &resolved.spec)?;
        if args.diff {
            ui::print_diff(&preview);
        }

        if args.dry_run {
            preview.outcome()
        } else {
            patcher.write(&preview)?
        }
    } else {
        patcher.apply_patch(&resolved.target, &resolved.spec)?
    };

    ui::print_outcome(&outcome, patcher.mode(), args.dry_run);

    Ok(())
}
