//! Metrics reading.
//!
//! The live view only depends on the [`MetricsReader`] trait. [`FsMetricsReader`]
//! reads JSON summary files from a working tree.

mod fs;

pub use fs::FsMetricsReader;

use crate::errors::MetricsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::PathBuf;

/// Metric values keyed by scope (file path), then by metric name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsResult(BTreeMap<String, BTreeMap<String, serde_json::Value>>);

impl MetricsResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the metrics of one scope.
    #[must_use]
    pub fn with_scope(
        mut self,
        scope: impl Into<String>,
        metrics: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        self.insert(scope, metrics);
        self
    }

    /// Inserts the metrics of one scope.
    pub fn insert(&mut self, scope: impl Into<String>, metrics: BTreeMap<String, serde_json::Value>) {
        self.0.insert(scope.into(), metrics);
    }

    /// Returns the metrics of a scope.
    #[must_use]
    pub fn scope(&self, scope: &str) -> Option<&BTreeMap<String, serde_json::Value>> {
        self.0.get(scope)
    }

    /// Looks up a single metric.
    #[must_use]
    pub fn get(&self, scope: &str, name: &str) -> Option<&serde_json::Value> {
        self.scope(scope).and_then(|m| m.get(name))
    }

    /// Iterates scopes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, serde_json::Value>)> {
        self.0.iter()
    }

    /// Number of scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no scope holds metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads structured metric values from file targets.
pub trait MetricsReader: Send + Sync + Debug {
    /// Returns metrics for `targets`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::NoMetrics`] when none of the targets hold
    /// usable metrics; other variants for genuine failures.
    fn show(&self, targets: &[PathBuf]) -> Result<MetricsResult, MetricsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_lookup() {
        let mut metrics = BTreeMap::new();
        metrics.insert("loss".to_string(), serde_json::json!(-0.6));
        let result = MetricsResult::new().with_scope("logs.json", metrics);

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("logs.json", "loss"), Some(&serde_json::json!(-0.6)));
        assert_eq!(result.get("logs.json", "accuracy"), None);
        assert!(result.scope("other.json").is_none());
    }

    #[test]
    fn test_result_serializes_as_plain_map() {
        let mut metrics = BTreeMap::new();
        metrics.insert("step".to_string(), serde_json::json!(3));
        let result = MetricsResult::new().with_scope("logs.json", metrics);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"logs.json": {"step": 3}})
        );
    }
}
