use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapper scripts to distinguish between a bad
/// invocation and a run that failed while talking to the remote services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was written
    Success = 0,
    /// Application error (missing API key, API error, network error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the compatibility report.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Each variant carries a hint pointing the operator at the likely fix.
#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Addigy API key is missing\n\n💡 Hint: Set the {env_var} environment variable")]
    MissingApiKey { env_var: &'static str },

    #[error("Addigy API error: status: {status}, body: {body}")]
    ApiError { status: u16, body: String },

    #[error("Received unexpected policy total for {policy_id} - got {count}, expected 1")]
    UnexpectedPolicyCount { policy_id: String, count: usize },

    #[error("Did not find any policies matching: {}\n\n💡 Hint: Policy names are case-sensitive", names.join(", "))]
    NoMatchingPolicies { names: Vec<String> },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
