//! Live experiment view.
//!
//! Correlates the metrics summary and the time-series plots written by a
//! running training process. Two entry points exist:
//!
//! - [`summary_path_info`] derives the summary file from a declared output's
//!   live configuration (extension replaced by `.json`);
//! - [`LiveView::show`] works from a concrete path and always reads
//!   `<path>.json`, whatever the output's summary setting.
//!
//! ```rust,ignore
//! let repo = Repo::open(".");
//! let view = repo.live().show("logs", Some(&["v1".to_string()]))?;
//! match view.metrics {
//!     MetricsLookup::Found(metrics) => render_table(&metrics),
//!     MetricsLookup::NotFound => println!("no summary yet"),
//! }
//! ```

mod summary;

pub use summary::summary_path_info;

use crate::config::SUMMARY_SUFFIX;
use crate::errors::LiveError;
use crate::metrics::MetricsResult;
use crate::observability::SpanTimer;
use crate::path_info::PathInfo;
use crate::plots::PlotsResult;
use crate::repo::Repo;
use crate::revisions::RevisionRequest;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of reading a summary file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "metrics", rename_all = "snake_case")]
pub enum MetricsLookup {
    /// Metrics were read from the summary file.
    Found(MetricsResult),
    /// No usable summary exists (yet).
    NotFound,
}

impl MetricsLookup {
    /// Returns the metrics, if found.
    #[must_use]
    pub fn found(&self) -> Option<&MetricsResult> {
        match self {
            Self::Found(metrics) => Some(metrics),
            Self::NotFound => None,
        }
    }

    /// Returns true if metrics were found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Converts into an `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<MetricsResult> {
        match self {
            Self::Found(metrics) => Some(metrics),
            Self::NotFound => None,
        }
    }
}

/// Combined result of [`LiveView::show`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveShow {
    /// Summary metrics, possibly absent.
    pub metrics: MetricsLookup,
    /// Plot data found under the live path.
    pub plots: PlotsResult,
}

impl LiveShow {
    /// Splits into `(metrics, plots)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<MetricsResult>, PlotsResult) {
        (self.metrics.into_option(), self.plots)
    }
}

/// Read-time coordinator over a repository's metrics and plots subsystems.
#[derive(Debug, Clone, Copy)]
pub struct LiveView<'a> {
    repo: &'a Repo,
}

impl<'a> LiveView<'a> {
    /// Creates a live view over `repo`.
    #[must_use]
    pub fn new(repo: &'a Repo) -> Self {
        Self { repo }
    }

    /// Reads the summary metrics and the plots of a live path.
    ///
    /// `path` is relative to the repository root and must exist. When
    /// `revisions` is non-empty, plots are read for the working state
    /// followed by those revisions; otherwise the plots subsystem's default
    /// applies.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::PathNotFound`] for a missing `path`. Metrics
    /// failures other than "no metrics" and all plots failures propagate.
    pub fn show(
        &self,
        path: impl AsRef<Path>,
        revisions: Option<&[String]>,
    ) -> Result<LiveShow, LiveError> {
        let timer = SpanTimer::start("live.show");
        let path = path.as_ref();
        let request = RevisionRequest::from_revisions(revisions);
        let effective = request.effective();

        if !self.repo.root().join(path).exists() {
            return Err(LiveError::PathNotFound(path.to_path_buf()));
        }

        let summary = PathInfo::new(path).append_suffix(SUMMARY_SUFFIX);
        debug!(path = %path.display(), summary = %summary, revisions = ?effective, "Showing live output");

        let metrics = match self.repo.metrics().show(&[summary.into_path_buf()]) {
            Ok(metrics) => MetricsLookup::Found(metrics),
            Err(e) if e.is_no_metrics() => {
                info!(path = %path.display(), "No summary metrics for live output");
                MetricsLookup::NotFound
            }
            Err(e) => return Err(e.into()),
        };

        let plots = self
            .repo
            .plots()
            .show(path, true, effective.as_deref())?;

        timer.finish();
        Ok(LiveShow { metrics, plots })
    }
}
