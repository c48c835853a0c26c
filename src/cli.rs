//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// textpatch - guarded find-and-replace for text files
///
/// Replace an exact block of text in a file, refusing to write anything when
/// the block is not there.
#[derive(Parser, Debug)]
#[command(
    name = "textpatch",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Guarded literal find-and-replace for text files",
    long_about = "textpatch performs a guarded, literal find-and-replace: it replaces an exact \
                  block of text in a single file and writes the file back in place. If the expected text is not present the file is left \
                  untouched and textpatch exits with status 2.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  textpatch apply config.yaml --expected-file old.txt --replacement-file new.txt\n    \
                  textpatch apply --patch expand-scope.yaml --diff\n    \
                  textpatch check config.yaml --expected 'name: old'\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the expected text and write the file back
    Apply(ApplyArgs),

    /// Verify the expected text is present without writing
    Check(CheckArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Inputs shared by commands that locate a patch
#[derive(Args, Debug, Clone, Default)]
pub struct PatchInput {
    /// File to patch (overrides the patch file's target)
    pub target: Option<PathBuf>,

    /// Load target, expected and replacement text from a YAML patch file
    #[arg(long, short = 'p', value_name = "FILE")]
    pub patch: Option<PathBuf>,

    /// Expected text, matched literally
    #[arg(
        long,
        short = 'e',
        value_name = "TEXT",
        allow_hyphen_values = true,
        conflicts_with = "expected_file"
    )]
    pub expected: Option<String>,

    /// Read the expected text verbatim from a file
    #[arg(long, value_name = "FILE")]
    pub expected_file: Option<PathBuf>,

    /// Replace only the first occurrence instead of every occurrence
    #[arg(long)]
    pub first: bool,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replace inline text:\n    textpatch apply notes.txt -e 'B' -r 'B2'\n\n\
                  Replace multi-line blocks kept in files:\n    textpatch apply index.yaml --expected-file old.txt --replacement-file new.txt\n\n\
                  Apply a patch definition:\n    textpatch apply --patch expand-scope.yaml\n\n\
                  Preview without writing:\n    textpatch apply --patch expand-scope.yaml --dry-run --diff")]
pub struct ApplyArgs {
    #[command(flatten)]
    pub input: PatchInput,

    /// Replacement text
    #[arg(
        long,
        short = 'r',
        value_name = "TEXT",
        allow_hyphen_values = true,
        conflicts_with = "replacement_file"
    )]
    pub replacement: Option<String>,

    /// Read the replacement text verbatim from a file
    #[arg(long, value_name = "FILE")]
    pub replacement_file: Option<PathBuf>,

    /// Report what would change without writing the file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print a unified diff of the change
    #[arg(long)]
    pub diff: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check inline text:\n    textpatch check notes.txt -e 'B'\n\n\
                  Check a patch definition still applies:\n    textpatch check --patch expand-scope.yaml")]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: PatchInput,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    textpatch completions --shell bash > ~/.bash_completion.d/textpatch\n\n\
                  Generate zsh completions:\n    textpatch completions --shell zsh > ~/.zfunc/_textpatch\n\n\
                  Generate fish completions:\n    textpatch completions --shell fish > ~/.config/fish/completions/textpatch.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
