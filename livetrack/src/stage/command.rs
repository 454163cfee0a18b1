//! Launching a stage command with its live environment.

use crate::errors::{LiveError, StageError};
use crate::stage::StageDefinition;
use std::path::PathBuf;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{debug, info};

/// Builds and runs the shell command of a stage.
#[derive(Debug, Clone)]
pub struct StageCommand {
    stage: StageDefinition,
    working_dir: PathBuf,
}

impl StageCommand {
    /// Creates a command for `stage`, run from `working_dir`.
    #[must_use]
    pub fn new(stage: StageDefinition, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            stage,
            working_dir: working_dir.into(),
        }
    }

    /// Returns the stage being launched.
    #[must_use]
    pub fn stage(&self) -> &StageDefinition {
        &self.stage
    }

    /// Builds the process command (`sh -c <cmd>`) with the live environment set.
    pub fn build(&self) -> Result<Command, LiveError> {
        self.stage.validate()?;
        let env = self.stage.live_env()?;

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(&self.stage.cmd);
        cmd.current_dir(&self.working_dir);
        cmd.envs(&env);

        debug!(stage = %self.stage.name, ?env, "Built stage command");
        Ok(cmd)
    }

    /// Spawns the command and waits for it to exit.
    pub async fn run(&self) -> Result<ExitStatus, LiveError> {
        let mut cmd = self.build()?;
        let status = cmd.status().await.map_err(|source| StageError::Launch {
            stage: self.stage.name.clone(),
            source,
        })?;

        info!(stage = %self.stage.name, code = ?status.code(), "Stage command exited");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn env_of(cmd: &Command, key: &str) -> Option<String> {
        cmd.as_std()
            .get_envs()
            .find(|(k, _)| *k == OsStr::new(key))
            .and_then(|(_, v)| v)
            .map(|v| v.to_string_lossy().into_owned())
    }

    #[test]
    fn test_build_sets_live_env() {
        for summary in [true, false] {
            let stage = StageDefinition::new("run_logger", "mkdir logs && touch logs.json")
                .with_deps(["src"])
                .with_live(["logs"], summary);
            let cmd = StageCommand::new(stage, ".").build().unwrap();

            assert_eq!(env_of(&cmd, "LIVE_PATH").as_deref(), Some("logs"));
            let expected = if summary { "1" } else { "0" };
            assert_eq!(env_of(&cmd, "LIVE_SUMMARY").as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_build_without_live_output_adds_nothing() {
        let stage = StageDefinition::new("build", "make");
        let cmd = StageCommand::new(stage, ".").build().unwrap();
        assert_eq!(cmd.as_std().get_envs().count(), 0);
    }

    #[test]
    fn test_build_rejects_invalid_stage() {
        let stage = StageDefinition::new("train", "true").with_live(["a", "b"], true);
        assert!(matches!(
            StageCommand::new(stage, ".").build(),
            Err(LiveError::Stage(StageError::MultipleLiveOutputs { .. }))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_exposes_env_to_child() {
        let dir = tempfile::tempdir().unwrap();
        let stage = StageDefinition::new(
            "run_logger",
            r#"printf '%s:%s' "$LIVE_PATH" "$LIVE_SUMMARY" > seen.txt"#,
        )
        .with_live(["logs"], false);

        let status = StageCommand::new(stage, dir.path()).run().await.unwrap();

        assert!(status.success());
        let seen = std::fs::read_to_string(dir.path().join("seen.txt")).unwrap();
        assert_eq!(seen, "logs:0");
    }
}
