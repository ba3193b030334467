//! Versioned save payload: a seed plus the edit diff.
//!
//! ```json
//! { "version": 1, "seed": 1337, "changes": [[5120, 0], [5121, 7]], "player": { "x": 1.5, "y": 40.0, "z": 9.5 } }
//! ```

use std::io::{Read, Write};

use cgmath::Point3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::voxels::{block::BlockTypeSize, generation::GenerationConfig, world::VoxelWorld};

use super::{diff::WorldDiff, SaveError};

/// The only save format version this crate reads and writes.
pub const SAVE_VERSION: u32 = 1;

/// Where the player stood when the game was saved.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Z position
    pub z: f32,
}

impl From<Point3<f32>> for PlayerSnapshot {
    fn from(p: Point3<f32>) -> Self {
        PlayerSnapshot { x: p.x, y: p.y, z: p.z }
    }
}

impl From<PlayerSnapshot> for Point3<f32> {
    fn from(p: PlayerSnapshot) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

/// A validated save.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaveData {
    /// Format version, always [`SAVE_VERSION`].
    pub version: u32,
    /// The world seed.
    pub seed: u32,
    /// `(index, block)` edits against the generated world.
    pub changes: Vec<(usize, BlockTypeSize)>,
    /// The player position, if one was saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerSnapshot>,
}

/// The payload as it arrives, before the seed and version are checked.
#[derive(Deserialize)]
struct RawSave {
    version: u32,
    seed: f64,
    changes: Vec<(usize, BlockTypeSize)>,
    #[serde(default)]
    player: Option<PlayerSnapshot>,
}

fn validate_seed(seed: f64) -> Result<u32, SaveError> {
    let valid = seed.is_finite() && seed >= 0.0 && seed.fract() == 0.0 && seed <= u32::MAX as f64;
    if valid {
        Ok(seed as u32)
    } else {
        Err(SaveError::InvalidSeed(seed))
    }
}

impl SaveData {
    /// Snapshots a world's seed and edits.
    pub fn capture(world: &VoxelWorld, diff: &WorldDiff, player: Option<Point3<f32>>) -> Self {
        SaveData {
            version: SAVE_VERSION,
            seed: world.seed(),
            changes: diff.entries(),
            player: player.map(PlayerSnapshot::from),
        }
    }

    /// Serializes to JSON.
    pub fn to_json_string(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SaveError> {
        let raw: RawSave = serde_json::from_str(json)?;
        Self::validate(raw)
    }

    /// Writes JSON to any writer.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        serde_json::to_writer(writer, self).map_err(|e| {
            if e.is_io() {
                SaveError::Io(e.into())
            } else {
                SaveError::Malformed(e)
            }
        })
    }

    /// Reads and validates JSON from any reader.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, SaveError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    fn validate(raw: RawSave) -> Result<Self, SaveError> {
        if raw.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion { found: raw.version });
        }
        Ok(SaveData {
            version: raw.version,
            seed: validate_seed(raw.seed)?,
            changes: raw.changes,
            player: raw.player,
        })
    }

    /// Regenerates the saved world and replays its edits.
    pub fn restore(&self, size_x: i32, size_y: i32, size_z: i32, config: &GenerationConfig) -> (VoxelWorld, WorldDiff) {
        let mut world = VoxelWorld::new(size_x, size_y, size_z, self.seed);
        world.generate_with(config);

        let mut diff = WorldDiff::new();
        let applied = diff.replay(&mut world, &self.changes);
        info!("Restored seed {} with {} edits", self.seed, applied);
        (world, diff)
    }
}
