//! Configuration and fixed naming conventions.

use serde::{Deserialize, Serialize};

/// Suffix of a live output's summary file.
pub const SUMMARY_SUFFIX: &str = ".json";

/// Revision identifier for the uncommitted working state.
pub const WORKSPACE: &str = "workspace";

/// Child environment variable carrying the live output's base path.
pub const ENV_LIVE_PATH: &str = "LIVE_PATH";

/// Child environment variable carrying the summary flag (`"1"`/`"0"`).
pub const ENV_LIVE_SUMMARY: &str = "LIVE_SUMMARY";

/// Configuration for the filesystem readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// File extensions treated as plot files during discovery.
    #[serde(default = "default_plot_extensions")]
    pub plot_extensions: Vec<String>,
    /// File extension accepted as a metrics file.
    #[serde(default = "default_metrics_extension")]
    pub metrics_extension: String,
}

fn default_plot_extensions() -> Vec<String> {
    vec!["tsv".to_string(), "csv".to_string(), "json".to_string()]
}

fn default_metrics_extension() -> String {
    "json".to_string()
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            plot_extensions: default_plot_extensions(),
            metrics_extension: default_metrics_extension(),
        }
    }
}

impl ReaderConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the plot extensions.
    #[must_use]
    pub fn with_plot_extensions(
        mut self,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.plot_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `extension` names a plot file.
    #[must_use]
    pub fn is_plot_extension(&self, extension: &str) -> bool {
        self.plot_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: ReaderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReaderConfig::default());
        assert_eq!(config.metrics_extension, "json");
    }

    #[test]
    fn test_plot_extension_match_is_case_insensitive() {
        let config = ReaderConfig::new().with_plot_extensions(["tsv"]);
        assert!(config.is_plot_extension("TSV"));
        assert!(!config.is_plot_extension("csv"));
    }
}
