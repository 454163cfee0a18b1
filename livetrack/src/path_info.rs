//! Immutable filesystem locations with suffix manipulation.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem location used for declared outputs and derived files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathInfo(PathBuf);

impl PathInfo {
    /// Creates a new path info.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns a copy with the extension replaced by `suffix`.
    ///
    /// `suffix` carries its leading dot (`".json"`). A path without an
    /// extension simply gains it. Returns `None` when the path has no file
    /// name to carry a suffix (`""`, `".."`, `"/"`).
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Option<Self> {
        let mut path = self.0.clone();
        path.set_extension(suffix.trim_start_matches('.')).then_some(Self(path))
    }

    /// Returns a copy with `suffix` appended to the final component.
    #[must_use]
    pub fn append_suffix(&self, suffix: &str) -> Self {
        let mut raw: OsString = self.0.clone().into_os_string();
        raw.push(suffix);
        Self(PathBuf::from(raw))
    }

    /// Joins `other` onto this path.
    #[must_use]
    pub fn join(&self, other: impl AsRef<Path>) -> Self {
        Self(self.0.join(other))
    }

    /// Consumes the value, returning the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for PathInfo {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for PathInfo {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<PathBuf> for PathInfo {
    fn from(value: PathBuf) -> Self {
        Self(value)
    }
}

impl fmt::Display for PathInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
