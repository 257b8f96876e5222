//! Range filtering and ordering of version-tagged documents
//!
//! Everything here is pure: callers hand in already-loaded items and decide
//! what an empty selection means for them.

use crate::version::SemanticVersion;

/// Anything tagged with a single semantic version
pub trait Versioned {
    fn version(&self) -> SemanticVersion;
}

impl Versioned for SemanticVersion {
    fn version(&self) -> SemanticVersion {
        *self
    }
}

/// Inclusive version bounds; `None` means unbounded on that side
///
/// `low > high` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub low: Option<SemanticVersion>,
    pub high: Option<SemanticVersion>,
}

impl VersionRange {
    pub fn new(low: Option<SemanticVersion>, high: Option<SemanticVersion>) -> Self {
        Self { low, high }
    }

    /// Check whether a version falls inside the range (both ends inclusive)
    pub fn contains(&self, version: &SemanticVersion) -> bool {
        self.low.is_none_or(|low| *version >= low) && self.high.is_none_or(|high| *version <= high)
    }
}

/// Keep the items inside `range` and sort them ascending by version
///
/// The sort is stable, so items sharing a version keep their input order.
pub fn select_and_order<T: Versioned>(items: Vec<T>, range: &VersionRange) -> Vec<T> {
    let mut selected: Vec<T> = items
        .into_iter()
        .filter(|item| range.contains(&item.version()))
        .collect();
    selected.sort_by_key(T::version);
    selected
}

/// Build the guide header for an ordered, non-empty selection
///
/// The bounds come from the first and last selected items, not from the
/// requested range. Returns `None` for an empty selection.
pub fn build_header<T: Versioned>(ordered: &[T]) -> Option<String> {
    let first = ordered.first()?.version();
    let last = ordered.last()?.version();

    Some(format!(
        "## Fixes from Hugo {first} to Hugo {last}\n\
         \n\
         Note that these upgrades typically also requires upgrading to Hugo {last} in e.g. netlify.toml.\n\
         \t\n"
    ))
}
