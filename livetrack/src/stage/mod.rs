//! Pipeline stage definitions.
//!
//! A stage declares a command, its dependencies and its outputs. At most one
//! output may be tracked live; its configuration determines the environment
//! the stage command is launched with.

mod command;
mod env;
mod output;

pub use command::StageCommand;
pub use env::live_env;
pub use output::{LiveOutput, Output};

use crate::errors::{LiveError, StageError};
use crate::path_info::PathInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Definition of a single pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDefinition {
    /// The unique name of the stage.
    pub name: String,
    /// Shell command run by the stage.
    pub cmd: String,
    /// Declared dependencies.
    #[serde(default)]
    pub deps: Vec<PathInfo>,
    /// Declared outputs.
    #[serde(default)]
    pub outs: Vec<Output>,
}

impl StageDefinition {
    /// Creates a new stage definition.
    #[must_use]
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cmd: cmd.into(),
            deps: Vec::new(),
            outs: Vec::new(),
        }
    }

    /// Parses a stage definition from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, LiveError> {
        let stage: Self = serde_json::from_str(json)?;
        stage.validate()?;
        Ok(stage)
    }

    /// Loads a stage definition from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LiveError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Sets the dependencies.
    #[must_use]
    pub fn with_deps(mut self, deps: impl IntoIterator<Item = impl Into<PathInfo>>) -> Self {
        self.deps = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an output.
    #[must_use]
    pub fn with_out(mut self, out: Output) -> Self {
        self.outs.push(out);
        self
    }

    /// Adds live outputs sharing one summary setting.
    #[must_use]
    pub fn with_live(
        mut self,
        paths: impl IntoIterator<Item = impl Into<PathInfo>>,
        summary: bool,
    ) -> Self {
        self.outs.extend(
            paths
                .into_iter()
                .map(|p| Output::new(p).with_live(LiveOutput::Configured { summary })),
        );
        self
    }

    /// Validates the stage definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or command is empty or more than one
    /// output is live.
    pub fn validate(&self) -> Result<(), StageError> {
        if self.name.trim().is_empty() {
            return Err(StageError::Definition(
                "Stage name cannot be empty or whitespace-only".to_string(),
            ));
        }
        if self.cmd.trim().is_empty() {
            return Err(StageError::Definition(format!(
                "Stage '{}' has an empty command",
                self.name
            )));
        }
        self.live_output().map(|_| ())
    }

    /// Returns the stage's live output, if any.
    pub fn live_output(&self) -> Result<Option<&Output>, StageError> {
        let mut live = self.outs.iter().filter(|o| o.is_live());
        let first = live.next();
        if live.next().is_some() {
            return Err(StageError::MultipleLiveOutputs {
                stage: self.name.clone(),
            });
        }
        Ok(first)
    }

    /// Environment contributed by the live output; empty without one.
    pub fn live_env(&self) -> Result<BTreeMap<String, String>, LiveError> {
        match self.live_output()? {
            Some(out) => live_env(out),
            None => Ok(BTreeMap::new()),
        }
    }
}
