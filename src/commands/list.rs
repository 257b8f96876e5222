//! List command implementation
//!
//! Shows which fix notes the current range selects without printing them.

use console::Style;
use std::io::Write;

use crate::commands::helpers::{SelectOptions, select_notes};
use crate::error::Result;
use crate::fixes::FixNote;
use crate::selector::Versioned;
use crate::ui::Reporter;

/// Run list command
pub fn run(options: &SelectOptions, reporter: &dyn Reporter) -> Result<()> {
    let notes = select_notes(options, reporter)?;

    let mut stdout = std::io::stdout().lock();
    write_list(&mut stdout, &notes)?;
    stdout.flush()?;

    Ok(())
}

/// Write the listing for notes already in ascending order
fn write_list(out: &mut impl Write, notes: &[FixNote]) -> Result<()> {
    if notes.is_empty() {
        writeln!(out, "No fix notes in range.")?;
        return Ok(());
    }

    writeln!(out, "Fix notes ({}):", notes.len())?;
    for note in notes {
        writeln!(
            out,
            "  {}  {}",
            Style::new().bold().yellow().apply_to(note.version()),
            Style::new().dim().apply_to(note.name())
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixnotesError;
    use crate::fixes::{FixBody, FixCatalog};

    /// Writer whose reader has gone away, like stdout piped into `head -0`
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn catalog() -> FixCatalog {
        FixCatalog::from_entries([
            ("v0.110.0.md", FixBody::Bundled("a")),
            ("v0.120.3.md", FixBody::Bundled("b")),
        ])
    }

    #[test]
    fn test_write_list() {
        let mut out = Vec::new();
        write_list(&mut out, catalog().notes()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Fix notes (2):\n"));
        assert!(text.contains("v0.110.0.md"));
        assert!(text.contains("v0.120.3.md"));
    }

    #[test]
    fn test_write_list_empty() {
        let mut out = Vec::new();
        write_list(&mut out, &[]).unwrap();
        assert_eq!(out, b"No fix notes in range.\n");
    }

    #[test]
    fn test_write_list_closed_pipe_is_an_error() {
        let err = write_list(&mut ClosedPipe, catalog().notes()).unwrap_err();
        assert!(matches!(err, FixnotesError::IoError { .. }));
    }
}
