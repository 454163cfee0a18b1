//! Environment handed to a process that writes a live output.

use crate::config::{ENV_LIVE_PATH, ENV_LIVE_SUMMARY};
use crate::errors::LiveError;
use crate::stage::Output;
use std::collections::BTreeMap;

/// Builds the child environment for a live output.
///
/// Produces exactly `LIVE_PATH` and `LIVE_SUMMARY`; the summary flag is
/// encoded as `"1"` or `"0"`.
///
/// # Errors
///
/// Returns [`LiveError::MissingLiveConfig`] if `output` is not live.
pub fn live_env(output: &Output) -> Result<BTreeMap<String, String>, LiveError> {
    let live = output.live.ok_or_else(|| LiveError::MissingLiveConfig {
        path: output.path.to_string(),
    })?;

    let mut env = BTreeMap::new();
    env.insert(ENV_LIVE_PATH.to_string(), output.path.to_string());
    env.insert(
        ENV_LIVE_SUMMARY.to_string(),
        if live.summary() { "1" } else { "0" }.to_string(),
    );
    Ok(env)
}
