//! Fix note loading errors

use super::FixnotesError;

/// Creates a fix read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FixnotesError {
    FixnotesError::FixReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a fixes directory not found error
pub fn dir_not_found(path: impl Into<String>) -> FixnotesError {
    FixnotesError::FixesDirNotFound { path: path.into() }
}
