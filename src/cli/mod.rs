//! CLI definitions using clap derive API
//!
//! Range and source options are global so `fixnotes list --low v0.120.0`
//! works the same as `fixnotes --low v0.120.0 list`.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

/// fixnotes - Hugo upgrade guide generator
///
/// Concatenate the fix notes for a range of Hugo releases into one guide.
#[derive(Parser, Debug)]
#[command(
    name = "fixnotes",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Concatenate Hugo fix notes for a range of releases",
    long_about = "fixnotes prints the fix notes bundled with it, ordered by Hugo version and \
                  limited to an inclusive --low/--high range, as a single markdown upgrade guide.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fixnotes                                  \x1b[90m# Every bundled fix note\x1b[0m\n   \
                  fixnotes --low v0.110.0 --high v0.156.0   \x1b[90m# Notes for an upgrade range\x1b[0m\n   \
                  fixnotes --low v0.120.0 > UPGRADE.md      \x1b[90m# Save the guide\x1b[0m\n   \
                  fixnotes list                             \x1b[90m# Show the available versions\x1b[0m\n   \
                  fixnotes --fixes-dir ./fixes              \x1b[90m# Use notes from disk\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Lowest Hugo version to include, inclusive (e.g. v0.110.0)
    #[arg(long, global = true, value_name = "VERSION")]
    pub low: Option<String>,

    /// Highest Hugo version to include, inclusive (e.g. v0.156.0)
    #[arg(long, global = true, value_name = "VERSION")]
    pub high: Option<String>,

    /// Read fix notes from this directory instead of the bundled set
    #[arg(long, global = true, env = "FIXNOTES_DIR", value_name = "DIR")]
    pub fixes_dir: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the fix note versions in range
    List,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
