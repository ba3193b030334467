//! # Terrain Generation
//!
//! Deterministic world generation driven by the world seed alone.
//!
//! ## Pipeline
//!
//! Stages run strictly in order, each depending on the previous:
//!
//! 1. **Bedrock shell**: floor at `y = 0` and low border walls
//! 2. **Height field**: biome-driven column heights and materials
//! 3. **Caves**: drifting worm tunnels, then standalone chambers
//! 4. **Water**: flood columns below sea level
//! 5. **Ores**: exposed veins, tier by tier
//! 6. **Vegetation**: biome-gated trees on grass
//! 7. **Structures**: houses on flat dry ground
//!
//! ## Determinism
//!
//! A single `fastrand::Rng` seeded from the world seed is threaded through
//! caves, chambers, ores, trees and structures in that order. Per-cell
//! decisions use [`hash::lattice_hash`] instead so they never shift the
//! sequence. Generating twice with the same seed and dimensions yields
//! identical grids, which is what lets a save file store only a seed and a
//! diff.

use fastrand::Rng;
use log::{debug, info};
use web_time::Instant;

use super::world::VoxelWorld;

pub mod biome;
pub mod caves;
pub mod config;
pub mod hash;
pub mod ores;
pub mod structures;
pub mod terrain;
pub mod vegetation;
pub mod water;

pub use biome::{Biome, BiomeSampler};
pub use config::GenerationConfig;

use config::{scaled_count, COLUMNS_PER_UNIT};

/// `lo + floor(f * len)` for a fresh `f` in `[0, 1)`.
///
/// A non-positive `len` yields `lo` but still consumes one draw, so sequence
/// positions do not depend on world size.
pub fn rand_span(rng: &mut Rng, lo: i32, len: i32) -> i32 {
    lo + (rng.f64() * len.max(0) as f64).floor() as i32
}

/// Runs the full generation pipeline for one seed.
pub struct TerrainGenerator {
    seed: u32,
    config: GenerationConfig,
}

impl TerrainGenerator {
    /// Creates a generator for a seed and set of tunables.
    pub fn new(seed: u32, config: GenerationConfig) -> Self {
        TerrainGenerator { seed, config }
    }

    /// The tunables in use.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Clears `world` and fills it from scratch.
    pub fn generate(&self, world: &mut VoxelWorld) {
        let total = Instant::now();
        let config = &self.config;
        let sea_level = config.sea_level(world.size_y());
        let columns = world.size_x() as f64 * world.size_z() as f64;
        let sampler = BiomeSampler::new(self.seed, sea_level);
        let mut rng = Rng::with_seed(self.seed as u64);

        info!(
            "Generating {}x{}x{} world with seed {} (sea level {})",
            world.size_x(),
            world.size_y(),
            world.size_z(),
            self.seed,
            sea_level
        );

        let stage = Instant::now();
        world.clear();
        terrain::place_bedrock_shell(world, config.border_wall_height);
        terrain::fill_height_field(world, &sampler);
        info!("Height field done in {:?}", stage.elapsed());

        let stage = Instant::now();
        let worms = scaled_count(config.cave_worms_per_10k_columns, columns, COLUMNS_PER_UNIT);
        let mut worm_steps = 0;
        for _ in 0..worms {
            worm_steps += caves::carve_worm(world, &mut rng, config.worm_min_length, config.worm_max_length);
        }
        let chambers = scaled_count(config.chambers_per_10k_columns, columns, COLUMNS_PER_UNIT);
        for _ in 0..chambers {
            caves::carve_chamber(world, &mut rng, sea_level);
        }
        debug!("Carved {} worms ({} steps) and {} chambers", worms, worm_steps, chambers);
        info!("Caves done in {:?}", stage.elapsed());

        let stage = Instant::now();
        let flooded = water::fill_water(world, sea_level);
        debug!("Flooded {} cells", flooded);
        info!("Water done in {:?}", stage.elapsed());

        let stage = Instant::now();
        let veins = ores::seed_ores(world, &mut rng, config);
        debug!("Placed {} ore veins", veins);
        info!("Ores done in {:?}", stage.elapsed());

        let stage = Instant::now();
        let attempts = scaled_count(config.tree_attempts_per_10k_columns, columns, COLUMNS_PER_UNIT);
        let trees = (0..attempts)
            .filter(|_| vegetation::try_plant_tree(world, &mut rng, &sampler))
            .count();
        debug!("Planted {} trees from {} attempts", trees, attempts);
        info!("Vegetation done in {:?}", stage.elapsed());

        let stage = Instant::now();
        let sites = scaled_count(config.house_sites_per_10k_columns, columns, COLUMNS_PER_UNIT);
        let houses = (0..sites)
            .filter(|_| structures::try_place_house(world, &mut rng, sea_level))
            .count();
        debug!("Built {} houses from {} sites", houses, sites);
        info!("Structures done in {:?}", stage.elapsed());

        info!("World generated in {:?}", total.elapsed());
    }
}
