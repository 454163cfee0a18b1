//! Repository handle shared by the live view and its readers.

use crate::config::ReaderConfig;
use crate::live::LiveView;
use crate::metrics::{FsMetricsReader, MetricsReader};
use crate::plots::{FsPlotsReader, PlotsReader};
use crate::tree::{DirTrees, RevisionTrees};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A pipeline repository: a root directory plus the metrics and plots
/// subsystems that read from it.
#[derive(Debug, Clone)]
pub struct Repo {
    root: PathBuf,
    metrics: Arc<dyn MetricsReader>,
    plots: Arc<dyn PlotsReader>,
}

impl Repo {
    /// Opens a repository with filesystem readers over the workspace only.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::open_with_trees(root.clone(), Arc::new(DirTrees::new(root)), ReaderConfig::default())
    }

    /// Opens a repository with filesystem readers over explicit revision trees.
    #[must_use]
    pub fn open_with_trees(
        root: impl Into<PathBuf>,
        trees: Arc<dyn RevisionTrees>,
        config: ReaderConfig,
    ) -> Self {
        let root = root.into();
        let metrics = FsMetricsReader::new(root.clone()).with_config(config.clone());
        let plots = FsPlotsReader::new(trees).with_config(config);
        Self::with_readers(root, Arc::new(metrics), Arc::new(plots))
    }

    /// Creates a repository from arbitrary readers.
    #[must_use]
    pub fn with_readers(
        root: impl Into<PathBuf>,
        metrics: Arc<dyn MetricsReader>,
        plots: Arc<dyn PlotsReader>,
    ) -> Self {
        Self {
            root: root.into(),
            metrics,
            plots,
        }
    }

    /// Returns the repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the metrics subsystem.
    #[must_use]
    pub fn metrics(&self) -> &dyn MetricsReader {
        self.metrics.as_ref()
    }

    /// Returns the plots subsystem.
    #[must_use]
    pub fn plots(&self) -> &dyn PlotsReader {
        self.plots.as_ref()
    }

    /// Returns the live view over this repository.
    #[must_use]
    pub fn live(&self) -> LiveView<'_> {
        LiveView::new(self)
    }
}
