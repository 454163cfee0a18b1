//! Error types for livetrack.
//!
//! Each collaborator has its own error enum; `LiveError` is the top-level
//! type returned by the live view and converts from all of them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for live-view operations.
#[derive(Debug, Error)]
pub enum LiveError {
    /// An output without live configuration was treated as a live output.
    #[error("Output '{path}' has no live configuration")]
    MissingLiveConfig {
        /// The declared output path.
        path: String,
    },

    /// A live output's path cannot name a summary file.
    #[error("Cannot derive a summary file from live path '{path}'")]
    InvalidLivePath {
        /// The declared output path.
        path: String,
    },

    /// The path handed to the live view does not exist.
    #[error("Live path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A metrics subsystem failure.
    #[error("{0}")]
    Metrics(#[from] MetricsError),

    /// A plots subsystem failure.
    #[error("{0}")]
    Plots(#[from] PlotsError),

    /// A stage definition or launch failure.
    #[error("{0}")]
    Stage(#[from] StageError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LiveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors reported by a metrics reader.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// None of the requested targets held parseable metrics.
    #[error("No metrics files found in: {}", display_paths(.targets))]
    NoMetrics {
        /// The targets that were read.
        targets: Vec<PathBuf>,
    },

    /// IO error while reading a metrics file.
    #[error("Metrics IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetricsError {
    /// Creates a no-metrics error for the given targets.
    #[must_use]
    pub fn no_metrics(targets: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self::NoMetrics {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true for the "nothing usable" condition.
    #[must_use]
    pub fn is_no_metrics(&self) -> bool {
        matches!(self, Self::NoMetrics { .. })
    }
}

/// Errors reported by a plots reader.
#[derive(Debug, Error)]
pub enum PlotsError {
    /// The requested revision has no tree to read from.
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// A plot file could not be parsed.
    #[error("Failed to parse plot file '{}': {message}", path.display())]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// IO error while discovering or reading plots.
    #[error("Plots IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotsError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors related to stage definitions and process launch.
#[derive(Debug, Error)]
pub enum StageError {
    /// A stage declared more than one live output.
    #[error("Stage '{stage}' declares more than one live output")]
    MultipleLiveOutputs {
        /// The stage name.
        stage: String,
    },

    /// The stage definition is invalid.
    #[error("Invalid stage definition: {0}")]
    Definition(String),

    /// The stage command could not be spawned.
    #[error("Failed to launch stage '{stage}': {source}")]
    Launch {
        /// The stage name.
        stage: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_metrics_message_lists_targets() {
        let err = MetricsError::no_metrics(["logs.json", "other.json"]);
        assert!(err.is_no_metrics());
        assert!(err.to_string().contains("logs.json, other.json"));
    }

    #[test]
    fn test_io_error_is_not_no_metrics() {
        let err = MetricsError::from(std::io::Error::other("disk gone"));
        assert!(!err.is_no_metrics());
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn test_live_error_from_subsystems() {
        let err: LiveError = PlotsError::UnknownRevision("v9".to_string()).into();
        assert!(matches!(err, LiveError::Plots(PlotsError::UnknownRevision(_))));

        let err: LiveError = MetricsError::no_metrics(["a.json"]).into();
        assert!(matches!(err, LiveError::Metrics(_)));
    }

    #[test]
    fn test_invalid_live_path_message() {
        let err = LiveError::InvalidLivePath {
            path: "..".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot derive a summary file from live path '..'");
    }
}
