//! Revision requests for multi-revision reads.

use crate::config::WORKSPACE;
use serde::{Deserialize, Serialize};

/// A request for data across revisions.
///
/// When any base revisions are requested the working state is read as well,
/// always ahead of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRequest {
    /// Revisions explicitly requested by the caller, in order.
    pub base_revisions: Vec<String>,
    /// Whether the workspace marker leads the effective list.
    pub include_workspace: bool,
}

impl RevisionRequest {
    /// Builds a request from an optional caller-supplied list.
    ///
    /// An absent or empty list yields an unfiltered request.
    #[must_use]
    pub fn from_revisions(revisions: Option<&[String]>) -> Self {
        let base_revisions = revisions.map(<[String]>::to_vec).unwrap_or_default();
        let include_workspace = !base_revisions.is_empty();
        Self {
            base_revisions,
            include_workspace,
        }
    }

    /// Returns true when no revision filter applies.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.base_revisions.is_empty()
    }

    /// Resolves the list passed downstream, or `None` when unfiltered.
    #[must_use]
    pub fn effective(&self) -> Option<Vec<String>> {
        if self.is_unfiltered() {
            return None;
        }

        let mut revisions = Vec::with_capacity(self.base_revisions.len() + 1);
        if self.include_workspace {
            revisions.push(WORKSPACE.to_string());
        }
        revisions.extend(self.base_revisions.iter().cloned());
        Some(revisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_workspace_prepended() {
        let supplied = revs(&["v1", "v2"]);
        let request = RevisionRequest::from_revisions(Some(supplied.as_slice()));

        assert!(request.include_workspace);
        assert_eq!(request.effective(), Some(revs(&["workspace", "v1", "v2"])));
        // caller list untouched
        assert_eq!(supplied, revs(&["v1", "v2"]));
    }

    #[test]
    fn test_absent_is_unfiltered() {
        let request = RevisionRequest::from_revisions(None);
        assert!(request.is_unfiltered());
        assert_eq!(request.effective(), None);
    }

    #[test]
    fn test_empty_is_unfiltered() {
        let empty: Vec<String> = Vec::new();
        let request = RevisionRequest::from_revisions(Some(empty.as_slice()));
        assert_eq!(request.effective(), None);
    }

    #[test]
    fn test_explicit_workspace_kept_in_order() {
        let supplied = revs(&["workspace", "v1"]);
        let request = RevisionRequest::from_revisions(Some(supplied.as_slice()));
        assert_eq!(
            request.effective(),
            Some(revs(&["workspace", "workspace", "v1"]))
        );
    }
}
