//! # Livetrack
//!
//! Live experiment tracking for a pipeline-versioning tool.
//!
//! A training process launched by a pipeline stage writes time-series plot
//! files under a declared *live output* and, optionally, a consolidated
//! summary file next to it. Livetrack provides:
//!
//! - **Live configuration**: stage outputs declared live with a bare flag or
//!   a structured `{ "summary": bool }` configuration
//! - **Summary resolution**: where a live output's summary file lives
//! - **Combined view**: summary metrics plus plots across revisions, with a
//!   missing summary reported as absent rather than as an error
//! - **Launch environment**: `LIVE_PATH` and `LIVE_SUMMARY` for the spawned
//!   process
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use livetrack::prelude::*;
//!
//! let repo = Repo::open("/path/to/project");
//! let show = repo.live().show("logs", None)?;
//! if let Some(metrics) = show.metrics.found() {
//!     println!("{:?}", metrics.get("logs.json", "accuracy"));
//! }
//! for plot in show.plots.plots() {
//!     println!("{plot}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod live;
pub mod metrics;
pub mod observability;
pub mod path_info;
pub mod plots;
pub mod repo;
pub mod revisions;
pub mod stage;
pub mod testing;
pub mod tree;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        ReaderConfig, ENV_LIVE_PATH, ENV_LIVE_SUMMARY, SUMMARY_SUFFIX, WORKSPACE,
    };
    pub use crate::errors::{LiveError, MetricsError, PlotsError, StageError};
    pub use crate::live::{summary_path_info, LiveShow, LiveView, MetricsLookup};
    pub use crate::metrics::{FsMetricsReader, MetricsReader, MetricsResult};
    pub use crate::observability::{init_tracing, LogFormat};
    pub use crate::path_info::PathInfo;
    pub use crate::plots::{FsPlotsReader, PlotData, PlotsReader, PlotsResult};
    pub use crate::repo::Repo;
    pub use crate::revisions::RevisionRequest;
    pub use crate::stage::{live_env, LiveOutput, Output, StageCommand, StageDefinition};
    pub use crate::tree::{DirTrees, RevisionTrees};
}
