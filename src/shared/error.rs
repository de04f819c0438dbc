use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - conan-packages.cmake was generated
    Success = 0,
    /// Application error (missing or malformed build info, I/O failure, etc.)
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

/// Application-specific errors for the dependency metadata export.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("conanbuildinfo.json not found: {path}\n\n💡 Hint: {suggestion}")]
    BuildInfoNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse conanbuildinfo.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was generated by Conan's 'json' generator")]
    BuildInfoParseError { path: PathBuf, details: String },

    #[error("Dependency '{package}' is missing required metadata field '{field}'\n\n💡 Hint: Re-run 'conan install' so the build info is regenerated completely")]
    MissingMetadata { package: String, field: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for domain value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
