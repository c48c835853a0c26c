//! Terminal output for patch results
//!
//! Status lines go to stdout, errors to stderr. Styling comes from `console`,
//! which drops colors automatically when output is not a terminal.

use console::Style;
use miette::Diagnostic;
use similar::{ChangeTag, TextDiff};

use crate::error::TextpatchError;
use crate::patch::ReplaceMode;
use crate::patcher::{PatchOutcome, Preview};

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Print the result of an apply or dry run
pub fn print_outcome(outcome: &PatchOutcome, mode: ReplaceMode, dry_run: bool) {
    let (label, verb) = if dry_run {
        (Style::new().yellow().bold().apply_to("Dry run"), "would replace")
    } else {
        (Style::new().green().bold().apply_to("Patched"), "replaced")
    };

    println!(
        "{} {}: {} {} of {} occurrence{} (mode: {})",
        label,
        Style::new().bold().apply_to(outcome.path.display()),
        verb,
        outcome.replaced,
        outcome.occurrences,
        plural(outcome.occurrences),
        mode,
    );
}

/// Print the result of a successful guard check
pub fn print_check(preview: &Preview) {
    println!(
        "{} {}: expected text found ({} occurrence{})",
        Style::new().green().bold().apply_to("OK"),
        Style::new().bold().apply_to(preview.path.display()),
        preview.occurrences,
        plural(preview.occurrences),
    );
}

/// Kind of a rendered diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Header,
    Hunk,
    Added,
    Removed,
    Context,
}

/// Unified diff lines, each tagged with what it represents
///
/// Kinds come from the diff itself rather than from the line text, so a
/// removed `---` document separator is still a removal.
fn diff_lines(preview: &Preview) -> Vec<(LineKind, String)> {
    let name = preview.path.display().to_string();
    let diff = TextDiff::from_lines(&preview.original, &preview.patched);
    let mut unified = diff.unified_diff();
    unified.context_radius(3);

    let mut lines = Vec::new();
    for hunk in unified.iter_hunks() {
        if lines.is_empty() {
            lines.push((LineKind::Header, format!("--- a/{name}")));
            lines.push((LineKind::Header, format!("+++ b/{name}")));
        }
        lines.push((LineKind::Hunk, hunk.header().to_string()));

        for change in hunk.iter_changes() {
            let (kind, sign) = match change.tag() {
                ChangeTag::Delete => (LineKind::Removed, '-'),
                ChangeTag::Insert => (LineKind::Added, '+'),
                ChangeTag::Equal => (LineKind::Context, ' '),
            };
            let text = change.value().trim_end_matches(['\r', '\n']);
            lines.push((kind, format!("{sign}{text}")));
        }
    }
    lines
}

/// Render a unified diff between the original and patched content
pub fn render_diff(preview: &Preview) -> String {
    diff_lines(preview)
        .into_iter()
        .map(|(_, line)| line + "\n")
        .collect()
}

/// Print a colored unified diff
pub fn print_diff(preview: &Preview) {
    for (kind, line) in diff_lines(preview) {
        let style = match kind {
            LineKind::Header => Style::new().bold(),
            LineKind::Hunk => Style::new().cyan(),
            LineKind::Added => Style::new().green(),
            LineKind::Removed => Style::new().red(),
            LineKind::Context => Style::new(),
        };
        println!("{}", style.apply_to(line));
    }
}

/// Print an error with its help text
pub fn print_error(err: &TextpatchError) {
    eprintln!(
        "{} {}",
        Style::new().for_stderr().red().bold().apply_to("Error:"),
        err
    );
    if let Some(help) = err.help() {
        eprintln!(
            "  {} {}",
            Style::new().for_stderr().cyan().apply_to("help:"),
            help
        );
    }
}
