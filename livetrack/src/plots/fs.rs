//! Filesystem plots reader.

use super::parse::parse_plot_file;
use super::{PlotsReader, PlotsResult};
use crate::config::{ReaderConfig, WORKSPACE};
use crate::errors::PlotsError;
use crate::tree::RevisionTrees;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Discovers and reads plot files in per-revision directory trees.
#[derive(Debug, Clone)]
pub struct FsPlotsReader {
    trees: Arc<dyn RevisionTrees>,
    config: ReaderConfig,
}

impl FsPlotsReader {
    /// Creates a reader over `trees`.
    #[must_use]
    pub fn new(trees: Arc<dyn RevisionTrees>) -> Self {
        Self {
            trees,
            config: ReaderConfig::default(),
        }
    }

    /// Sets the reader configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    fn is_plot_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.config.is_plot_extension(e))
    }

    /// Lists plot files at `target`, sorted for stable output.
    fn discover(&self, target: &Path, recursive: bool) -> Result<Vec<PathBuf>, PlotsError> {
        if target.is_file() {
            return Ok(if self.is_plot_file(target) {
                vec![target.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        let mut walker = WalkDir::new(target).min_depth(1).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                PlotsError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("filesystem loop while discovering plots")
                }))
            })?;
            if entry.file_type().is_file() && self.is_plot_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Tree-relative identifier with forward slashes.
fn plot_id(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl PlotsReader for FsPlotsReader {
    fn show(
        &self,
        path: &Path,
        recursive: bool,
        revisions: Option<&[String]>,
    ) -> Result<PlotsResult, PlotsError> {
        let default_revisions = [WORKSPACE.to_string()];
        let revisions = revisions.unwrap_or(&default_revisions[..]);

        let mut result = PlotsResult::new();
        for revision in revisions {
            let root = self
                .trees
                .root(revision)
                .ok_or_else(|| PlotsError::UnknownRevision(revision.clone()))?;

            let target = root.join(path);
            if !target.exists() {
                debug!(revision = %revision, target = %target.display(), "Plot path absent in revision");
                continue;
            }

            for file in self.discover(&target, recursive)? {
                let datapoints = match parse_plot_file(&file) {
                    Ok(datapoints) => datapoints,
                    Err(PlotsError::Parse { path, message }) => {
                        warn!(
                            revision = %revision,
                            file = %path.display(),
                            error = %message,
                            "Skipping unparseable plot file"
                        );
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                result.push(plot_id(&root, &file), revision.clone(), datapoints);
            }
        }

        debug!(plots = result.len(), "Read plots");
        Ok(result)
    }
}
