//! Default command: print the upgrade guide
//!
//! The guide is the generated header followed by every selected note in
//! ascending version order, each followed by a newline.

use std::io::Write;

use crate::commands::helpers::{SelectOptions, select_notes};
use crate::error::{FixnotesError, Result};
use crate::fixes::FixNote;
use crate::selector::build_header;
use crate::ui::Reporter;

/// Run the default command
pub fn run(options: &SelectOptions, reporter: &dyn Reporter) -> Result<()> {
    let notes = select_notes(options, reporter)?;
    let guide = render_guide(&notes)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&guide)?;
    stdout.flush()?;

    Ok(())
}

/// Assemble the guide for notes already in ascending order
///
/// All contents are read before anything is returned, so a failing note
/// never leaves a partial guide on stdout. Note bytes are copied verbatim.
pub fn render_guide(notes: &[FixNote]) -> Result<Vec<u8>> {
    let mut guide = build_header(notes)
        .ok_or(FixnotesError::NoFixesInRange)?
        .into_bytes();

    for note in notes {
        guide.extend_from_slice(&note.content()?);
        guide.push(b'\n');
    }

    Ok(guide)
}
