//! Storage module for the marathon state document.
//!
//! The whole document is rewritten as JSON on every change. Files written by
//! earlier versions of the timer (`state.json`) load unchanged.

mod document;
mod error;
mod store;

pub use document::{MarathonDocument, StageRecord};
pub use error::StorageError;
pub use store::StateStore;

use std::path::PathBuf;

/// Default directory for timer data: `~/.local/share/fractal-timer/`.
/// Falls back to the working directory when no data dir is known.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("fractal-timer"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default marathon state file path
pub fn default_state_path() -> PathBuf {
    data_dir().join("state.json")
}
