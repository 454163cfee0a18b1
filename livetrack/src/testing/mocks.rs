//! Mock readers for testing.

use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::{MetricsError, PlotsError};
use crate::metrics::{MetricsReader, MetricsResult};
use crate::plots::{PlotsReader, PlotsResult};

type MetricsFailure = Box<dyn Fn() -> MetricsError + Send + Sync>;
type PlotsFailure = Box<dyn Fn() -> PlotsError + Send + Sync>;

/// A metrics reader that records targets and returns a fixed outcome.
pub struct RecordingMetricsReader {
    outcome: Result<MetricsResult, MetricsFailure>,
    calls: Mutex<Vec<Vec<PathBuf>>>,
}

impl RecordingMetricsReader {
    /// Creates a reader that always returns `metrics`.
    #[must_use]
    pub fn found(metrics: MetricsResult) -> Self {
        Self {
            outcome: Ok(metrics),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a reader that always fails with the error built by `error`.
    #[must_use]
    pub fn failing(error: impl Fn() -> MetricsError + Send + Sync + 'static) -> Self {
        Self {
            outcome: Err(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the targets of each call.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls.lock().clone()
    }
}

impl fmt::Debug for RecordingMetricsReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingMetricsReader")
            .field("fails", &self.outcome.is_err())
            .field("calls", &self.calls.lock().len())
            .finish()
    }
}

impl MetricsReader for RecordingMetricsReader {
    fn show(&self, targets: &[PathBuf]) -> Result<MetricsResult, MetricsError> {
        self.calls.lock().push(targets.to_vec());
        match &self.outcome {
            Ok(metrics) => Ok(metrics.clone()),
            Err(error) => Err(error()),
        }
    }
}

/// A recorded plots request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotsCall {
    /// The requested path.
    pub path: PathBuf,
    /// Whether recursion was requested.
    pub recursive: bool,
    /// The revision filter passed in.
    pub revisions: Option<Vec<String>>,
}

/// A plots reader that records requests and returns a fixed outcome.
pub struct RecordingPlotsReader {
    outcome: Result<PlotsResult, PlotsFailure>,
    calls: Mutex<Vec<PlotsCall>>,
}

impl RecordingPlotsReader {
    /// Creates a reader that always returns `plots`.
    #[must_use]
    pub fn new(plots: PlotsResult) -> Self {
        Self {
            outcome: Ok(plots),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a reader that always fails with the error built by `error`.
    #[must_use]
    pub fn failing(error: impl Fn() -> PlotsError + Send + Sync + 'static) -> Self {
        Self {
            outcome: Err(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns all recorded requests.
    #[must_use]
    pub fn calls(&self) -> Vec<PlotsCall> {
        self.calls.lock().clone()
    }
}

impl fmt::Debug for RecordingPlotsReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingPlotsReader")
            .field("fails", &self.outcome.is_err())
            .field("calls", &self.calls.lock().len())
            .finish()
    }
}

impl PlotsReader for RecordingPlotsReader {
    fn show(
        &self,
        path: &Path,
        recursive: bool,
        revisions: Option<&[String]>,
    ) -> Result<PlotsResult, PlotsError> {
        self.calls.lock().push(PlotsCall {
            path: path.to_path_buf(),
            recursive,
            revisions: revisions.map(<[String]>::to_vec),
        });
        match &self.outcome {
            Ok(plots) => Ok(plots.clone()),
            Err(error) => Err(error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_reader_records_targets() {
        let reader = RecordingMetricsReader::found(MetricsResult::new());
        reader.show(&[PathBuf::from("a.json")]).unwrap();
        reader.show(&[PathBuf::from("b.json")]).unwrap();

        assert_eq!(
            reader.calls(),
            vec![vec![PathBuf::from("a.json")], vec![PathBuf::from("b.json")]]
        );
    }

    #[test]
    fn test_failing_metrics_reader() {
        let reader = RecordingMetricsReader::failing(|| MetricsError::no_metrics(["a.json"]));
        assert!(reader.show(&[]).unwrap_err().is_no_metrics());
        assert_eq!(reader.calls().len(), 1);
    }

    #[test]
    fn test_plots_reader_records_request() {
        let reader = RecordingPlotsReader::new(PlotsResult::new());
        let revisions = vec!["workspace".to_string()];
        reader
            .show(Path::new("logs"), false, Some(revisions.as_slice()))
            .unwrap();

        assert_eq!(
            reader.calls(),
            vec![PlotsCall {
                path: PathBuf::from("logs"),
                recursive: false,
                revisions: Some(revisions),
            }]
        );
    }
}
