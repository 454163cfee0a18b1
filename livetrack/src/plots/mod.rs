//! Plot discovery and reading.
//!
//! [`PlotsReader`] is the contract the live view depends on. [`FsPlotsReader`]
//! discovers series files under a path in each requested revision tree.

mod fs;
mod parse;

pub use fs::FsPlotsReader;

use crate::errors::PlotsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;

/// One row of a series: column name to value.
pub type Datapoint = BTreeMap<String, serde_json::Value>;

/// The rows of one plot file as seen in one revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionSeries {
    /// The revision the rows were read from.
    pub revision: String,
    /// Rows in file order.
    pub datapoints: Vec<Datapoint>,
}

/// Renderable data for a single plot, ordered by requested revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// Series per revision.
    pub series: Vec<RevisionSeries>,
}

impl PlotData {
    /// Returns the rows read from `revision`.
    #[must_use]
    pub fn revision(&self, revision: &str) -> Option<&[Datapoint]> {
        self.series
            .iter()
            .find(|s| s.revision == revision)
            .map(|s| s.datapoints.as_slice())
    }

    /// Revisions present, in order.
    #[must_use]
    pub fn revisions(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.revision.as_str()).collect()
    }
}

/// Plot data keyed by plot identifier (tree-relative file path).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotsResult(BTreeMap<String, PlotData>);

impl PlotsResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends rows for `plot` read from `revision`.
    pub fn push(
        &mut self,
        plot: impl Into<String>,
        revision: impl Into<String>,
        datapoints: Vec<Datapoint>,
    ) {
        self.0
            .entry(plot.into())
            .or_default()
            .series
            .push(RevisionSeries {
                revision: revision.into(),
                datapoints,
            });
    }

    /// Returns the data of a plot.
    #[must_use]
    pub fn get(&self, plot: &str) -> Option<&PlotData> {
        self.0.get(plot)
    }

    /// Returns true if `plot` was found.
    #[must_use]
    pub fn contains(&self, plot: &str) -> bool {
        self.0.contains_key(plot)
    }

    /// Plot identifiers in order.
    pub fn plots(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of plots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no plot was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads time-series plot data.
pub trait PlotsReader: Send + Sync + Debug {
    /// Returns plots found at `path`.
    ///
    /// With `recursive` set, plot files anywhere below `path` are included.
    /// `revisions` restricts the read to those revisions, in order; `None`
    /// means the reader's default (the working state).
    fn show(
        &self,
        path: &Path,
        recursive: bool,
        revisions: Option<&[String]>,
    ) -> Result<PlotsResult, PlotsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(step: i64) -> Datapoint {
        let mut p = Datapoint::new();
        p.insert("step".to_string(), serde_json::json!(step));
        p
    }

    #[test]
    fn test_push_keeps_revision_order() {
        let mut result = PlotsResult::new();
        result.push("logs/loss.tsv", "workspace", vec![point(0), point(1)]);
        result.push("logs/loss.tsv", "v1", vec![point(0)]);

        let data = result.get("logs/loss.tsv").unwrap();
        assert_eq!(data.revisions(), vec!["workspace", "v1"]);
        assert_eq!(data.revision("workspace").unwrap().len(), 2);
        assert!(data.revision("v2").is_none());
    }
}
