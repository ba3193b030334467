//! Ore veins.
//!
//! Ores are only seeded where a cavity exposes them: a probe succeeds when it
//! lands on host rock next to air or water, then grows a small jittered
//! cluster around that point.

use cgmath::Point3;
use fastrand::Rng;

use crate::voxels::{block::BlockType, world::VoxelWorld};

use super::{
    config::{scaled_count, GenerationConfig, CELLS_PER_UNIT},
    rand_span,
};

/// Probes stay this far from the X/Z edges of the world.
const PROBE_MARGIN: i32 = 8;

/// The vertical band an ore tier may be probed in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DepthBand {
    /// `min ..size_y - below_top`
    BelowTop {
        /// Lowest probe height.
        min: i32,
        /// Distance kept from the ceiling.
        below_top: i32,
    },
    /// `min ..ceil(size_y * fraction)`
    Fraction {
        /// Lowest probe height.
        min: i32,
        /// Upper limit as a fraction of world height.
        fraction: f64,
    },
}

impl DepthBand {
    /// The half-open `[low, high)` probe range for a world height.
    pub fn range(self, size_y: i32) -> (i32, i32) {
        match self {
            DepthBand::BelowTop { min, below_top } => (min, size_y - below_top),
            DepthBand::Fraction { min, fraction } => {
                (min, (size_y as f64 * fraction).ceil() as i32)
            }
        }
    }
}

/// One ore tier's placement rules.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OreTier {
    /// The ore block.
    pub ore: BlockType,
    /// Probes per million cells.
    pub probes_per_million: f64,
    /// Where probes land.
    pub band: DepthBand,
    /// Smallest vein.
    pub min_vein: i32,
    /// Largest vein.
    pub max_vein: i32,
}

/// Ore tiers in ascending rarity and depth.
pub const ORE_TIERS: [OreTier; 5] = [
    OreTier {
        ore: BlockType::SLIVER_ORE,
        probes_per_million: 350.0,
        band: DepthBand::BelowTop { min: 3, below_top: 7 },
        min_vein: 2,
        max_vein: 8,
    },
    OreTier {
        ore: BlockType::RUBY_ORE,
        probes_per_million: 130.0,
        band: DepthBand::BelowTop { min: 2, below_top: 14 },
        min_vein: 2,
        max_vein: 8,
    },
    OreTier {
        ore: BlockType::GOLD_ORE,
        probes_per_million: 75.0,
        band: DepthBand::Fraction { min: 2, fraction: 0.45 },
        min_vein: 2,
        max_vein: 6,
    },
    OreTier {
        ore: BlockType::SAPPHIRE_ORE,
        probes_per_million: 45.0,
        band: DepthBand::Fraction { min: 2, fraction: 0.35 },
        min_vein: 2,
        max_vein: 5,
    },
    OreTier {
        ore: BlockType::DIAMOND_ORE,
        probes_per_million: 22.0,
        band: DepthBand::Fraction { min: 2, fraction: 0.25 },
        min_vein: 1,
        max_vein: 4,
    },
];

/// Returns true if any of the six face neighbours is air or water.
pub fn is_exposed(world: &VoxelWorld, x: i32, y: i32, z: i32) -> bool {
    [
        (1, 0, 0),
        (-1, 0, 0),
        (0, 1, 0),
        (0, -1, 0),
        (0, 0, 1),
        (0, 0, -1),
    ]
    .iter()
    .any(|&(dx, dy, dz)| !world.is_solid(x + dx, y + dy, z + dz))
}

/// Grows a vein around `origin` and returns how many cells became ore.
///
/// The vein size is drawn first, then each member draws its x, y and z
/// jitter in that order. Members at `y <= 1` or off the grid are skipped, and
/// only host rock is replaced.
pub fn place_vein(
    world: &mut VoxelWorld,
    rng: &mut Rng,
    origin: Point3<i32>,
    ore: BlockType,
    min_size: i32,
    max_size: i32,
) -> usize {
    let size = min_size + (rng.f64() * (max_size - min_size + 1).max(1) as f64).floor() as i32;
    let mut placed = 0;

    for _ in 0..size {
        let vx = origin.x + ((rng.f64() - 0.5) * 4.0).floor() as i32;
        let vy = origin.y + ((rng.f64() - 0.5) * 3.0).floor() as i32;
        let vz = origin.z + ((rng.f64() - 0.5) * 4.0).floor() as i32;
        if !world.in_bounds(vx, vy, vz) || vy <= 1 {
            continue;
        }
        if world.get(vx, vy, vz).is_replaceable_by_ore() {
            world.set(vx, vy, vz, ore);
            placed += 1;
        }
    }
    placed
}

/// Runs every probe for one tier. Returns the number of veins started.
pub fn seed_tier(world: &mut VoxelWorld, rng: &mut Rng, tier: &OreTier, density_scale: f64) -> usize {
    let probes = scaled_count(
        tier.probes_per_million * density_scale,
        world.volume() as f64,
        CELLS_PER_UNIT,
    );
    let (low, high) = tier.band.range(world.size_y());
    let mut veins = 0;

    for _ in 0..probes {
        let x = rand_span(rng, PROBE_MARGIN, world.size_x() - 2 * PROBE_MARGIN);
        let y = rand_span(rng, low, high - low);
        let z = rand_span(rng, PROBE_MARGIN, world.size_z() - 2 * PROBE_MARGIN);

        if !world.get(x, y, z).is_replaceable_by_ore() || !is_exposed(world, x, y, z) {
            continue;
        }
        place_vein(world, rng, Point3::new(x, y, z), tier.ore, tier.min_vein, tier.max_vein);
        veins += 1;
    }
    veins
}

/// Seeds every tier in order. Returns the total number of veins.
pub fn seed_ores(world: &mut VoxelWorld, rng: &mut Rng, config: &GenerationConfig) -> usize {
    ORE_TIERS
        .iter()
        .map(|tier| seed_tier(world, rng, tier, config.ore_density_scale))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_world_height() {
        assert_eq!(ORE_TIERS[0].band.range(100), (3, 93));
        assert_eq!(ORE_TIERS[2].band.range(100), (2, 45));
        assert_eq!(ORE_TIERS[4].band.range(48), (2, 12));
    }

    #[test]
    fn exposure_counts_water_and_air() {
        let mut world = VoxelWorld::new(5, 5, 5, 0);
        world.fill(BlockType::STONE);
        assert!(!is_exposed(&world, 2, 2, 2));
        world.set(2, 3, 2, BlockType::WATER);
        assert!(is_exposed(&world, 2, 2, 2));
    }

    #[test]
    fn veins_never_replace_structure_blocks() {
        let mut world = VoxelWorld::new(10, 10, 10, 0);
        world.fill(BlockType::BRICK);
        let placed = place_vein(
            &mut world,
            &mut Rng::with_seed(3),
            Point3::new(5, 5, 5),
            BlockType::GOLD_ORE,
            4,
            8,
        );
        assert_eq!(placed, 0);
        assert!(world.blocks().iter().all(|&b| b == BlockType::BRICK.id()));
    }
}
