//! Command helper utilities shared by `render` and `list`

use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::fixes::{FixCatalog, FixNote};
use crate::selector::{VersionRange, select_and_order};
use crate::ui::Reporter;
use crate::version::{SemanticVersion, parse_version};

/// Range and source options common to every selecting command
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    pub low: Option<String>,
    pub high: Option<String>,
    pub fixes_dir: Option<PathBuf>,
}

/// Parse the optional `--low`/`--high` values into a range
///
/// A bad value is reported against the flag it came from. An empty value
/// leaves that side unbounded, same as omitting the flag.
pub fn parse_range(low: Option<&str>, high: Option<&str>) -> Result<VersionRange> {
    Ok(VersionRange::new(
        parse_flag("--low", low)?,
        parse_flag("--high", high)?,
    ))
}

fn parse_flag(flag: &str, value: Option<&str>) -> Result<Option<SemanticVersion>> {
    value
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            parse_version(raw).map_err(|e| {
                let reason = match e {
                    error::FixnotesError::InvalidVersion { reason, .. } => reason,
                    other => other.to_string(),
                };
                error::version::invalid_flag(flag, raw, reason)
            })
        })
        .transpose()
}

/// Load the catalog from `--fixes-dir` if given, otherwise the bundled notes
pub fn load_catalog(fixes_dir: Option<&Path>, reporter: &dyn Reporter) -> Result<FixCatalog> {
    let catalog = match fixes_dir {
        Some(dir) => {
            reporter.info(&format!("Reading fix notes from {}", dir.display()));
            FixCatalog::from_dir(dir)?
        }
        None => {
            reporter.info("Using bundled fix notes");
            FixCatalog::embedded()
        }
    };

    for name in catalog.skipped() {
        reporter.skipped(name, "not a version-named markdown file");
    }

    Ok(catalog)
}

/// Parse the range, load the catalog and return the notes in range, ascending
pub fn select_notes(options: &SelectOptions, reporter: &dyn Reporter) -> Result<Vec<FixNote>> {
    let range = parse_range(options.low.as_deref(), options.high.as_deref())?;
    let catalog = load_catalog(options.fixes_dir.as_deref(), reporter)?;
    let available = catalog.notes().len();

    let selected = select_and_order(catalog.into_notes(), &range);
    reporter.info(&format!(
        "Selected {} of {} fix notes",
        selected.len(),
        available
    ));

    Ok(selected)
}
