//! Declared stage outputs and their live configuration.

use crate::path_info::PathInfo;
use serde::{Deserialize, Serialize};

/// Live configuration of an output.
///
/// A bare flag (`live: true`) maps to [`LiveOutput::Enabled`]; a keyed
/// configuration maps to [`LiveOutput::Configured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveOutput {
    /// Live tracking with default options.
    Enabled,
    /// Live tracking with explicit options.
    Configured {
        /// Whether a summary file is written.
        summary: bool,
    },
}

impl LiveOutput {
    /// Returns whether a summary file is expected.
    #[must_use]
    pub fn summary(&self) -> bool {
        match self {
            Self::Enabled => true,
            Self::Configured { summary } => *summary,
        }
    }
}

/// A declared artifact of a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// The declared path.
    pub path: PathInfo,
    /// Live configuration, if this output is a live output.
    #[serde(default, with = "live_serde", skip_serializing_if = "Option::is_none")]
    pub live: Option<LiveOutput>,
}

impl Output {
    /// Creates a plain output.
    #[must_use]
    pub fn new(path: impl Into<PathInfo>) -> Self {
        Self {
            path: path.into(),
            live: None,
        }
    }

    /// Creates a live output with default options.
    #[must_use]
    pub fn live(path: impl Into<PathInfo>) -> Self {
        Self::new(path).with_live(LiveOutput::Enabled)
    }

    /// Sets the live configuration.
    #[must_use]
    pub fn with_live(mut self, live: LiveOutput) -> Self {
        self.live = Some(live);
        self
    }

    /// Returns true if this output is tracked live.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

mod live_serde {
    use super::LiveOutput;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum RawLive {
        Flag(bool),
        Options(LiveOptions),
    }

    #[derive(Serialize, Deserialize)]
    struct LiveOptions {
        #[serde(default = "default_summary")]
        summary: bool,
    }

    fn default_summary() -> bool {
        true
    }

    pub fn serialize<S: Serializer>(
        live: &Option<LiveOutput>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let raw = live.map(|l| match l {
            LiveOutput::Enabled => RawLive::Flag(true),
            LiveOutput::Configured { summary } => RawLive::Options(LiveOptions { summary }),
        });
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<LiveOutput>, D::Error> {
        let raw = Option::<RawLive>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(RawLive::Flag(false)) => None,
            Some(RawLive::Flag(true)) => Some(LiveOutput::Enabled),
            Some(RawLive::Options(options)) => Some(LiveOutput::Configured {
                summary: options.summary,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_flag_deserializes_to_enabled() {
        let out: Output = serde_json::from_str(r#"{"path": "logs", "live": true}"#).unwrap();
        assert_eq!(out.live, Some(LiveOutput::Enabled));
        assert!(out.live.unwrap().summary());
    }

    #[test]
    fn test_false_flag_is_not_live() {
        let out: Output = serde_json::from_str(r#"{"path": "logs", "live": false}"#).unwrap();
        assert!(!out.is_live());
    }

    #[test]
    fn test_structured_config() {
        let out: Output =
            serde_json::from_str(r#"{"path": "logs", "live": {"summary": false}}"#).unwrap();
        assert_eq!(out.live, Some(LiveOutput::Configured { summary: false }));

        let out: Output = serde_json::from_str(r#"{"path": "logs", "live": {}}"#).unwrap();
        assert_eq!(out.live, Some(LiveOutput::Configured { summary: true }));
    }

    #[test]
    fn test_missing_live_field() {
        let out: Output = serde_json::from_str(r#"{"path": "model.pkl"}"#).unwrap();
        assert_eq!(out, Output::new("model.pkl"));
    }

    #[test]
    fn test_serialize_shapes() {
        let json = serde_json::to_value(Output::live("logs")).unwrap();
        assert_eq!(json, serde_json::json!({"path": "logs", "live": true}));

        let json = serde_json::to_value(
            Output::new("logs").with_live(LiveOutput::Configured { summary: false }),
        )
        .unwrap();
        assert_eq!(json, serde_json::json!({"path": "logs", "live": {"summary": false}}));

        let json = serde_json::to_value(Output::new("model.pkl")).unwrap();
        assert_eq!(json, serde_json::json!({"path": "model.pkl"}));
    }
}
