//! # World-Diff Persistence
//!
//! A saved world is its seed plus the sparse set of cells the player changed.
//! Loading regenerates from the seed and replays the changes.

use thiserror::Error;

pub mod diff;
pub mod save;

pub use diff::WorldDiff;
pub use save::{PlayerSnapshot, SaveData, SAVE_VERSION};

/// Why a save could not be read or written.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Not JSON, or the fields have the wrong shape.
    #[error("malformed save data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A version tag this crate does not understand.
    #[error("unsupported save version {found}")]
    UnsupportedVersion {
        /// The version found in the payload
        found: u32,
    },

    /// The seed is not a whole number in `u32` range.
    #[error("invalid world seed {0}")]
    InvalidSeed(f64),

    /// The reader or writer failed.
    #[error("save I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
