//! Error types and handling for fixnotes
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`version`]: Version parsing errors
//! - [`fs`]: Fix note loading errors

pub mod fs;
pub mod version;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fixnotes operations
#[derive(Error, Diagnostic, Debug)]
pub enum FixnotesError {
    // Version errors
    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(
        code(fixnotes::version::invalid),
        help("Versions look like v0.110.0 or 0.110.0")
    )]
    InvalidVersion { input: String, reason: String },

    #[error("Invalid {flag} version '{value}': {reason}")]
    #[diagnostic(
        code(fixnotes::version::invalid_flag),
        help("Versions look like v0.110.0 or 0.110.0")
    )]
    InvalidVersionFlag {
        flag: String,
        value: String,
        reason: String,
    },

    // Selection errors
    #[error("no fix files found for the specified version range")]
    #[diagnostic(
        code(fixnotes::select::empty),
        help("Run 'fixnotes list' to see the available versions")
    )]
    NoFixesInRange,

    // Fix note loading errors
    #[error("Failed to read fix file: {path}: {reason}")]
    #[diagnostic(code(fixnotes::fs::read_failed))]
    FixReadFailed { path: String, reason: String },

    #[error("Fixes directory not found: {path}")]
    #[diagnostic(
        code(fixnotes::fs::dir_not_found),
        help("Pass an existing directory to --fixes-dir or unset FIXNOTES_DIR")
    )]
    FixesDirNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fixnotes::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(fixnotes::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for FixnotesError {
    fn from(err: std::io::Error) -> Self {
        FixnotesError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FixnotesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_no_fixes_display() {
        assert_eq!(
            FixnotesError::NoFixesInRange.to_string(),
            "no fix files found for the specified version range"
        );
    }

    #[test]
    fn test_error_code() {
        let err = FixnotesError::NoFixesInRange;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("fixnotes::select::empty".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FixnotesError = io_err.into();
        assert!(matches!(err, FixnotesError::IoError { .. }));
    }

    test_error_contains!(
        test_invalid_version_error,
        version::invalid("1.2.x", "bad patch"),
        "Invalid version",
        "1.2.x",
        "bad patch"
    );

    test_error_contains!(
        test_invalid_flag_error,
        version::invalid_flag("--low", "abc", "expected three components"),
        "--low",
        "abc"
    );

    test_error_contains!(
        test_read_failed_error,
        fs::read_failed("fixes/v0.110.0.md", "permission denied"),
        "Failed to read fix file",
        "v0.110.0.md"
    );

    test_error_contains!(
        test_dir_not_found_error,
        fs::dir_not_found("/no/such/dir"),
        "Fixes directory not found",
        "/no/such/dir"
    );

    test_error_contains!(
        test_unknown_shell_error,
        FixnotesError::UnknownShell {
            shell: "tcsh".to_string()
        },
        "Unknown shell: tcsh"
    );
}
