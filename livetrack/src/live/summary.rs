//! Locating the summary file of a live output.

use crate::config::SUMMARY_SUFFIX;
use crate::errors::LiveError;
use crate::path_info::PathInfo;
use crate::stage::Output;

/// Resolves where `output`'s summary file lives.
///
/// Returns `None` when the output's live configuration disables the summary.
/// The summary path is the declared path with its extension replaced by
/// `.json`.
///
/// # Errors
///
/// Returns [`LiveError::MissingLiveConfig`] if `output` is not a live output
/// and [`LiveError::InvalidLivePath`] if its path has no file name to carry
/// the summary suffix.
pub fn summary_path_info(output: &Output) -> Result<Option<PathInfo>, LiveError> {
    let live = output.live.ok_or_else(|| LiveError::MissingLiveConfig {
        path: output.path.to_string(),
    })?;

    if !live.summary() {
        return Ok(None);
    }

    output
        .path
        .with_suffix(SUMMARY_SUFFIX)
        .map(Some)
        .ok_or_else(|| LiveError::InvalidLivePath {
            path: output.path.to_string(),
        })
}
