//! The set of fix notes the guide is assembled from
//!
//! A fix note is a markdown file named after the Hugo release it applies to,
//! e.g. `v0.146.0.md`. Notes come either from the table bundled into the
//! binary ([`embedded`]) or from a directory on disk ([`directory`]).
//! Entries that are not markdown or whose stem is not a version are skipped.

pub mod directory;
pub mod embedded;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::selector::Versioned;
use crate::version::SemanticVersion;

/// File extension of fix notes
pub const FIX_EXTENSION: &str = ".md";

/// Where a fix note's content lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixBody {
    /// Compiled into the binary
    Bundled(&'static str),
    /// A file on disk, read when the content is asked for
    File(PathBuf),
}

/// A single version-tagged fix note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixNote {
    name: String,
    version: SemanticVersion,
    body: FixBody,
}

impl FixNote {
    pub fn new(name: impl Into<String>, version: SemanticVersion, body: FixBody) -> Self {
        Self {
            name: name.into(),
            version,
            body,
        }
    }

    /// File name the note was found under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The note's raw content
    ///
    /// Notes on disk are passed through byte for byte, whatever their encoding.
    pub fn content(&self) -> Result<Cow<'static, [u8]>> {
        match &self.body {
            FixBody::Bundled(text) => Ok(Cow::Borrowed(text.as_bytes())),
            FixBody::File(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string())),
        }
    }
}

impl Versioned for FixNote {
    fn version(&self) -> SemanticVersion {
        self.version
    }
}

/// Derive a version from a fix note file name such as `v0.110.0.md`
///
/// Returns `None` for anything that is not a version-named markdown file.
pub fn version_from_file_name(name: &str) -> Option<SemanticVersion> {
    name.strip_suffix(FIX_EXTENSION)?.parse().ok()
}

/// Fix notes available for selection, plus the names that were passed over
#[derive(Debug, Default)]
pub struct FixCatalog {
    notes: Vec<FixNote>,
    skipped: Vec<String>,
}

impl FixCatalog {
    /// Build a catalog from named entries, keeping only version-named markdown files
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, FixBody)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (name, body) in entries {
            let name = name.into();
            match version_from_file_name(&name) {
                Some(version) => catalog.notes.push(FixNote::new(name, version, body)),
                None => catalog.skipped.push(name),
            }
        }
        catalog
    }

    /// Catalog over the notes bundled into the binary
    pub fn embedded() -> Self {
        Self::from_entries(
            embedded::BUNDLED_FIXES
                .iter()
                .map(|(name, text)| (*name, FixBody::Bundled(*text))),
        )
    }

    /// Catalog over the files directly inside `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let entries = directory::list_files(dir)?;
        Ok(Self::from_entries(
            entries
                .into_iter()
                .map(|(name, path)| (name, FixBody::File(path))),
        ))
    }

    pub fn notes(&self) -> &[FixNote] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<FixNote> {
        self.notes
    }

    /// Entry names ignored because they are not version-named markdown files
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}
