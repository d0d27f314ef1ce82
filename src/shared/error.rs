use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested file was written and every command succeeded
    Success = 0,
    /// A document, lookup or external command failed
    Failure = 1,
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
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while patching build module documents or driving the
/// external build tools.
///
/// Every variant is fatal for the current batch: nothing is written for the
/// file being processed when one of these is returned.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unable to access file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read and write permissions")]
    Io { path: PathBuf, details: String },

    #[error("Unable to decode TOML document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid TOML")]
    Decode { path: PathBuf, details: String },

    #[error("Unable to encode TOML document: {path}\nDetails: {details}")]
    Encode { path: PathBuf, details: String },

    #[error("Unexpected document structure: {message}\n\n💡 Hint: Please verify that the path points at the right kind of document (buildpack.toml, builder.toml or package.toml)")]
    Structure { message: String },

    #[error("Unable to compile {kind} pattern '{pattern}'\nDetails: {details}")]
    Pattern {
        kind: String,
        pattern: String,
        details: String,
    },

    #[error("Unable to fetch end-of-life date for {product} {version}\nDetails: {details}")]
    Lookup {
        product: String,
        version: String,
        details: String,
    },

    #[error("Unable to execute `{command}`\nDetails: {details}")]
    Command { command: String, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Backup copy already exists: {path}\n\n💡 Hint: A previous build must have failed, please reset the buildpack directory")]
    BackupExists { path: PathBuf },
}

impl ToolError {
    pub fn structure(message: impl Into<String>) -> Self {
        ToolError::Structure {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ToolError::Validation {
            message: message.into(),
        }
    }
}
