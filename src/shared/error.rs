use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a license policy violation
/// from a misconfiguration or an environment failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced and no policy violated
    Success = 0,
    /// A fail-on or allow-only rule was violated
    PolicyViolation = 1,
    /// Invalid command-line arguments or configuration values
    InvalidArguments = 2,
    /// Application error (interpreter failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolation => write!(f, "Policy Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license auditing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each failure.
#[derive(Debug, Error)]
pub enum LicenseAuditError {
    #[error("Invalid value for '{option}': {value}\n\n💡 Hint: Valid values are: {expected}")]
    InvalidOption {
        option: String,
        value: String,
        expected: String,
    },

    #[error("'{option}' requires the '{required}' option to be set\n\n💡 Hint: Add '{required}' or remove '{option}'")]
    IncompatibleOptions { option: String, required: String },

    #[error("Failed to discover installed packages: {reason}\n\n💡 Hint: {suggestion}")]
    PackageDiscovery { reason: String, suggestion: String },

    #[error("Failed to read package metadata: {path}\nDetails: {details}\n\n💡 Hint: The distribution may be corrupted; reinstalling it usually helps")]
    MetadataReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LicenseAuditError {
    /// Returns the exit code this error maps to when it terminates the run
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LicenseAuditError::InvalidOption { .. }
            | LicenseAuditError::IncompatibleOptions { .. }
            | LicenseAuditError::Validation { .. } => ExitCode::InvalidArguments,
            LicenseAuditError::PackageDiscovery { .. }
            | LicenseAuditError::MetadataReadError { .. }
            | LicenseAuditError::FileWriteError { .. } => ExitCode::ApplicationError,
        }
    }
}
