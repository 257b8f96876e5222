//! Version parsing errors

use super::FixnotesError;

/// Creates an invalid version error
pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> FixnotesError {
    FixnotesError::InvalidVersion {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid version error attributed to a command-line flag
pub fn invalid_flag(
    flag: impl Into<String>,
    value: impl Into<String>,
    reason: impl Into<String>,
) -> FixnotesError {
    FixnotesError::InvalidVersionFlag {
        flag: flag.into(),
        value: value.into(),
        reason: reason.into(),
    }
}
