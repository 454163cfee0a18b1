//! Mapping revisions to readable directory trees.

use crate::config::WORKSPACE;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Resolves a revision identifier to the root of its checked-out tree.
pub trait RevisionTrees: Send + Sync + Debug {
    /// Returns the tree root for `revision`, or `None` if unknown.
    fn root(&self, revision: &str) -> Option<PathBuf>;
}

/// Trees backed by a workspace plus explicitly registered revisions.
///
/// The workspace marker always maps to the workspace root.
#[derive(Debug, Clone)]
pub struct DirTrees {
    workspace: PathBuf,
    revisions: BTreeMap<String, PathBuf>,
}

impl DirTrees {
    /// Creates trees for a workspace with no historical revisions.
    #[must_use]
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            revisions: BTreeMap::new(),
        }
    }

    /// Registers the checkout directory of a revision.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.revisions.insert(revision.into(), root.into());
        self
    }

    /// Returns the workspace root.
    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

impl RevisionTrees for DirTrees {
    fn root(&self, revision: &str) -> Option<PathBuf> {
        if revision == WORKSPACE {
            return Some(self.workspace.clone());
        }
        self.revisions.get(revision).cloned()
    }
}
