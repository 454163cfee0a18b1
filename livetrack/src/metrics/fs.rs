//! Filesystem metrics reader.

use super::{MetricsReader, MetricsResult};
use crate::config::ReaderConfig;
use crate::errors::MetricsError;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads JSON metrics files relative to a working tree root.
///
/// Missing files and files that do not hold a JSON object are skipped; if
/// nothing usable remains the read fails with [`MetricsError::NoMetrics`].
#[derive(Debug, Clone)]
pub struct FsMetricsReader {
    root: PathBuf,
    config: ReaderConfig,
}

impl FsMetricsReader {
    /// Creates a reader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ReaderConfig::default(),
        }
    }

    /// Sets the reader configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    fn read_target(
        &self,
        target: &Path,
    ) -> Result<Option<BTreeMap<String, serde_json::Value>>, MetricsError> {
        let has_extension = target
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.config.metrics_extension));
        if !has_extension {
            debug!(target = %target.display(), "Skipping non-metrics target");
            return Ok(None);
        }

        let file = self.root.join(target);
        if file.exists() && !file.is_file() {
            debug!(target = %target.display(), "Metrics target is not a file");
            return Ok(None);
        }

        let raw = match std::fs::read_to_string(&file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target = %target.display(), "Metrics target does not exist");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(map)) => Ok(Some(map.into_iter().collect())),
            Ok(_) => {
                warn!(target = %target.display(), "Metrics file is not a JSON object");
                Ok(None)
            }
            Err(e) => {
                warn!(target = %target.display(), error = %e, "Failed to parse metrics file");
                Ok(None)
            }
        }
    }
}

impl MetricsReader for FsMetricsReader {
    fn show(&self, targets: &[PathBuf]) -> Result<MetricsResult, MetricsError> {
        let mut result = MetricsResult::new();

        for target in targets {
            if let Some(metrics) = self.read_target(target)? {
                result.insert(target.display().to_string(), metrics);
            }
        }

        if result.is_empty() {
            return Err(MetricsError::no_metrics(targets.iter().cloned()));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_summary_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("logs.json"),
            r#"{"step": 3, "loss": -0.6, "accuracy": 0.6}"#,
        )
        .unwrap();

        let reader = FsMetricsReader::new(dir.path());
        let result = reader.show(&[PathBuf::from("logs.json")]).unwrap();

        assert_eq!(result.get("logs.json", "step"), Some(&serde_json::json!(3)));
        assert_eq!(result.get("logs.json", "accuracy"), Some(&serde_json::json!(0.6)));
    }

    #[test]
    fn test_missing_file_is_no_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsMetricsReader::new(dir.path())
            .show(&[PathBuf::from("logs.json")])
            .unwrap_err();
        assert!(err.is_no_metrics());
    }

    #[test]
    fn test_unparseable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "not json").unwrap();
        std::fs::write(dir.path().join("list.json"), "[1, 2]").unwrap();
        std::fs::write(dir.path().join("good.json"), r#"{"auc": 0.9}"#).unwrap();

        let reader = FsMetricsReader::new(dir.path());
        let err = reader
            .show(&[PathBuf::from("bad.json"), PathBuf::from("list.json")])
            .unwrap_err();
        assert!(err.is_no_metrics());

        let result = reader
            .show(&[PathBuf::from("bad.json"), PathBuf::from("good.json")])
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.scope("good.json").is_some());
    }

    #[test]
    fn test_directory_target_is_no_metrics() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("logs.json")).unwrap();

        let err = FsMetricsReader::new(dir.path())
            .show(&[PathBuf::from("logs.json")])
            .unwrap_err();
        assert!(err.is_no_metrics());
    }

    #[test]
    fn test_wrong_extension_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logs.tsv"), "step\tloss\n0\t1.0\n").unwrap();

        let err = FsMetricsReader::new(dir.path())
            .show(&[PathBuf::from("logs.tsv")])
            .unwrap_err();
        assert!(err.is_no_metrics());
    }
}
