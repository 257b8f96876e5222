//! Diagnostic output on stderr
//!
//! stdout carries only the guide itself, so everything informational goes
//! through a [`Reporter`]. The quiet reporter is used unless `--verbose` is set.

use console::Style;

/// Sink for diagnostic messages
pub trait Reporter {
    /// Report a step that is worth seeing with `--verbose`
    fn info(&self, message: &str);

    /// Report an input that was passed over
    fn skipped(&self, name: &str, reason: &str);
}

/// Reporter for `--verbose`: styled lines on stderr
pub struct VerboseReporter;

impl Reporter for VerboseReporter {
    fn info(&self, message: &str) {
        eprintln!("{}", Style::new().dim().apply_to(message));
    }

    fn skipped(&self, name: &str, reason: &str) {
        eprintln!(
            "{} {} {}",
            Style::new().yellow().apply_to("skip"),
            Style::new().bold().apply_to(name),
            Style::new().dim().apply_to(format!("({reason})"))
        );
    }
}

/// Reporter that drops everything
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn info(&self, _message: &str) {}

    fn skipped(&self, _name: &str, _reason: &str) {}
}

/// Pick the reporter matching the `--verbose` flag
pub fn reporter(verbose: bool) -> Box<dyn Reporter> {
    if verbose {
        Box::new(VerboseReporter)
    } else {
        Box::new(QuietReporter)
    }
}
