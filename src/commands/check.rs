//! Check command implementation
//!
//! Runs the patch guard without writing: succeeds when the expected text is
//! present, fails with a mismatch otherwise.

use crate::cli::CheckArgs;
use crate::commands::helpers::resolve_patch;
use crate::error::Result;
use crate::patcher::TextPatcher;
use crate::ui;

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    let resolved = resolve_patch(&args.input, None, false)?;
    let preview = TextPatcher::new(resolved.mode).preview(&resolved.target, &resolved.spec)?;
    ui::print_check(&preview);

    Ok(())
}
