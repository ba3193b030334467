//! Generation tunables.
//!
//! All densities are expressed per unit of world area or volume so the same
//! config produces comparable worlds at any size.

use serde::{Deserialize, Serialize};

/// Columns per density unit for area-scaled features.
pub const COLUMNS_PER_UNIT: f64 = 10_000.0;

/// Cells per density unit for volume-scaled features.
pub const CELLS_PER_UNIT: f64 = 1_000_000.0;

/// Tunables for [`TerrainGenerator`](super::TerrainGenerator).
///
/// Missing fields in JSON fall back to their defaults, so a config file only
/// needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Sea level as a fraction of world height.
    pub sea_level_ratio: f64,
    /// Height of the bedrock walls around the world edge.
    pub border_wall_height: i32,
    /// Cave worms per 10k columns.
    pub cave_worms_per_10k_columns: f64,
    /// Shortest worm walk, in steps.
    pub worm_min_length: u32,
    /// Longest worm walk, in steps.
    pub worm_max_length: u32,
    /// Standalone chambers per 10k columns.
    pub chambers_per_10k_columns: f64,
    /// Tree placement attempts per 10k columns.
    pub tree_attempts_per_10k_columns: f64,
    /// House candidate sites per 10k columns.
    pub house_sites_per_10k_columns: f64,
    /// Multiplier applied to every ore tier's probe density.
    pub ore_density_scale: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            sea_level_ratio: 0.44,
            border_wall_height: 14,
            cave_worms_per_10k_columns: 1.05,
            worm_min_length: 55,
            worm_max_length: 110,
            chambers_per_10k_columns: 0.3,
            tree_attempts_per_10k_columns: 60.0,
            house_sites_per_10k_columns: 0.6,
            ore_density_scale: 1.0,
        }
    }
}

impl GenerationConfig {
    /// Parses a config from JSON. Absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The sea level for a world of the given height.
    pub fn sea_level(&self, size_y: i32) -> i32 {
        (size_y as f64 * self.sea_level_ratio).round() as i32
    }
}

/// Scales a density to a feature count: `ceil(density * amount / unit)`.
pub fn scaled_count(density: f64, amount: f64, unit: f64) -> usize {
    if density <= 0.0 || amount <= 0.0 {
        return 0;
    }
    (density * amount / unit).ceil() as usize
}
