//! Error types shared by every stage of server provisioning
//!
//! Every error is fatal to the run. Nothing here is retried internally; the
//! front end maps any `ScaffoldError` to exit code 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the scaffolding library
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory `{}` already exists. Please choose a new name.", .path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Failed to reach {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse manifest from {url}: {source}")]
    ManifestParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Version {0} was not found in the version manifest")]
    VersionNotFound(String),

    #[error("Version {0} does not publish a server download")]
    MissingServerDownload(String),

    #[error("Unsupported version: {0}")]
    InvalidVersion(String),

    #[error("No release versions are available. A version must be selected to continue.")]
    NoVersions,

    #[error("Unknown server type '{name}'. Available types: {available}")]
    UnknownTemplate { name: String, available: String },

    #[error("`{command}` exited with {}", describe_exit(.code))]
    ExternalProcess { command: String, code: Option<i32> },

    #[error("Failed to start `{command}`: {source}")]
    ProcessSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Convenience alias used throughout the crate.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Build an IO error tagged with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }

    /// User-initiated cancellation terminates silently
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::Cancelled)
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_process_message() {
        let err = ScaffoldError::ExternalProcess {
            command: "curl --silent -o server.jar https://example.com".to_string(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "`curl --silent -o server.jar https://example.com` exited with exit code 1"
        );
    }

    #[test]
    fn test_directory_exists_message() {
        let err = ScaffoldError::DirectoryExists {
            path: PathBuf::from("srv"),
        };
        assert!(err.to_string().contains("`srv` already exists"));
    }

    #[test]
    fn test_only_cancelled_is_cancelled() {
        assert!(ScaffoldError::Cancelled.is_cancelled());
        assert!(!ScaffoldError::InvalidVersion("1.2".into()).is_cancelled());
    }
}
