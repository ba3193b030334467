//! # Biomes
//!
//! Biomes are derived, never stored: a pure function of `(x, z, seed)`. Four
//! low-frequency noise bands (temperature, moisture, continentalness and
//! ridge) are classified into a small set of biomes, each owning its own
//! height profile, surface materials and tree density.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin, RidgedMulti};

use crate::voxels::block::BlockType;

const TEMPERATURE_SCALE: f64 = 0.0035;
const MOISTURE_SCALE: f64 = 0.0042;
const CONTINENTAL_SCALE: f64 = 0.0022;
const RIDGE_SCALE: f64 = 0.006;
const DETAIL_SCALE: f64 = 0.045;
const HILL_SCALE: f64 = 0.02;

/// Mountains above `sea_level + BARE_STONE_ABOVE_SEA` have no soil.
pub const BARE_STONE_ABOVE_SEA: i32 = 18;

/// The discrete biome a column belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Gentle grassland with low hills.
    Plains,
    /// Flat sand with no trees.
    Desert,
    /// Below sea level, floored with sand.
    Ocean,
    /// Grassland with dense trees.
    Forest,
    /// Tall ridged peaks, bare stone at altitude.
    Mountains,
}

impl Biome {
    /// Every biome.
    pub const ALL: [Biome; 5] = [
        Biome::Plains,
        Biome::Desert,
        Biome::Ocean,
        Biome::Forest,
        Biome::Mountains,
    ];

    /// The block placed at the top of a column.
    pub fn surface_block(self) -> BlockType {
        match self {
            Biome::Plains | Biome::Forest | Biome::Mountains => BlockType::GRASS,
            Biome::Desert | Biome::Ocean => BlockType::SAND,
        }
    }

    /// The block placed between the surface and the stone.
    pub fn subsoil_block(self) -> BlockType {
        match self {
            Biome::Plains | Biome::Forest | Biome::Mountains => BlockType::DIRT,
            Biome::Desert | Biome::Ocean => BlockType::SAND,
        }
    }

    /// How many cells of subsoil sit under the surface block.
    pub fn subsoil_depth(self) -> i32 {
        match self {
            Biome::Desert => 4,
            Biome::Plains | Biome::Forest => 3,
            Biome::Ocean | Biome::Mountains => 2,
        }
    }

    /// Probability that a tree attempt in this biome goes ahead.
    pub fn tree_chance(self) -> f64 {
        match self {
            Biome::Ocean | Biome::Desert => 0.0,
            Biome::Plains => 0.12,
            Biome::Forest => 0.85,
            Biome::Mountains => 0.06,
        }
    }
}

/// The raw noise bands and classification for one column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnSample {
    /// The classified biome.
    pub biome: Biome,
    /// Temperature band, roughly `[-1, 1]`.
    pub temperature: f64,
    /// Moisture band, roughly `[-1, 1]`.
    pub moisture: f64,
    /// Continentalness band, roughly `[-1, 1]`. Low values are ocean.
    pub continentalness: f64,
    /// Ridge band, roughly `[-1, 1]`. High values are mountain spines.
    pub ridge: f64,
}

/// Classifies the four bands into a biome.
pub fn classify(temperature: f64, moisture: f64, continentalness: f64, ridge: f64) -> Biome {
    if continentalness < -0.35 {
        Biome::Ocean
    } else if continentalness > 0.15 && ridge > 0.55 {
        Biome::Mountains
    } else if temperature > 0.3 && moisture < -0.1 {
        Biome::Desert
    } else if moisture > 0.15 {
        Biome::Forest
    } else {
        Biome::Plains
    }
}

/// Seeded noise bands for biome classification and surface height.
pub struct BiomeSampler {
    temperature: Perlin,
    moisture: Perlin,
    continentalness: Fbm<Perlin>,
    ridge: RidgedMulti<Perlin>,
    detail: Perlin,
    hills: Perlin,
    sea_level: i32,
}

impl BiomeSampler {
    /// Creates the bands for a world seed. Each band gets its own derived seed.
    pub fn new(seed: u32, sea_level: i32) -> Self {
        BiomeSampler {
            temperature: Perlin::new(seed.wrapping_add(11)),
            moisture: Perlin::new(seed.wrapping_add(23)),
            continentalness: Fbm::<Perlin>::new(seed.wrapping_add(37)).set_octaves(4),
            ridge: RidgedMulti::<Perlin>::new(seed.wrapping_add(41)).set_octaves(3),
            detail: Perlin::new(seed.wrapping_add(53)),
            hills: Perlin::new(seed.wrapping_add(67)),
            sea_level,
        }
    }

    /// The sea level the height profiles are relative to.
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    /// Samples all bands for a column.
    pub fn sample(&self, x: i32, z: i32) -> ColumnSample {
        let (fx, fz) = (x as f64, z as f64);
        let temperature = self.temperature.get([fx * TEMPERATURE_SCALE, fz * TEMPERATURE_SCALE]);
        let moisture = self.moisture.get([fx * MOISTURE_SCALE + 71.3, fz * MOISTURE_SCALE - 12.9]);
        let continentalness = self
            .continentalness
            .get([fx * CONTINENTAL_SCALE, fz * CONTINENTAL_SCALE]);
        let ridge = self.ridge.get([fx * RIDGE_SCALE, fz * RIDGE_SCALE]);

        ColumnSample {
            biome: classify(temperature, moisture, continentalness, ridge),
            temperature,
            moisture,
            continentalness,
            ridge,
        }
    }

    /// The biome of a column.
    pub fn biome_at(&self, x: i32, z: i32) -> Biome {
        self.sample(x, z).biome
    }

    /// The unclamped surface height of a column.
    pub fn raw_height(&self, x: i32, z: i32, sample: &ColumnSample) -> f64 {
        let (fx, fz) = (x as f64, z as f64);
        let n = self.detail.get([fx * DETAIL_SCALE, fz * DETAIL_SCALE]);
        let base = self.sea_level as f64;

        match sample.biome {
            Biome::Ocean => base - 6.0 + n * 3.0,
            Biome::Desert => base + 3.0 + n * 2.0,
            Biome::Plains => {
                let hills = self.hills.get([fx * HILL_SCALE, fz * HILL_SCALE]).max(0.0) * 5.0;
                base + 6.0 + hills + n * 1.5
            }
            Biome::Forest => base + 7.0 + n * 3.0,
            Biome::Mountains => {
                let peak = ((sample.ridge - 0.55) / 0.45).max(0.0);
                base + 10.0 + peak * peak * 60.0 + n * 4.0
            }
        }
    }

    /// The surface height of a column clamped into `[low, high]`.
    ///
    /// `high` wins when the bounds cross, so tiny worlds never panic.
    pub fn surface_height(&self, x: i32, z: i32, sample: &ColumnSample, low: i32, high: i32) -> i32 {
        (self.raw_height(x, z, sample).floor() as i32).max(low).min(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(0.0, 0.0, -0.5, 0.9), Biome::Ocean);
        assert_eq!(classify(0.0, 0.0, 0.2, 0.6), Biome::Mountains);
        assert_eq!(classify(0.5, -0.3, 0.0, 0.0), Biome::Desert);
        assert_eq!(classify(0.0, 0.3, 0.0, 0.0), Biome::Forest);
        assert_eq!(classify(0.0, 0.0, 0.0, 0.0), Biome::Plains);
    }

    #[test]
    fn barren_biomes_grow_no_trees() {
        assert_eq!(Biome::Ocean.tree_chance(), 0.0);
        assert_eq!(Biome::Desert.tree_chance(), 0.0);
        assert!(Biome::Forest.tree_chance() > Biome::Plains.tree_chance());
    }

    #[test]
    fn sampling_is_a_pure_function_of_seed() {
        let a = BiomeSampler::new(42, 30);
        let b = BiomeSampler::new(42, 30);
        for (x, z) in [(0, 0), (17, -4), (900, 311)] {
            assert_eq!(a.sample(x, z), b.sample(x, z));
        }
    }

    #[test]
    fn surface_height_respects_bounds_even_when_crossed() {
        let sampler = BiomeSampler::new(1, 30);
        let sample = sampler.sample(5, 5);
        let h = sampler.surface_height(5, 5, &sample, 3, 40);
        assert!((3..=40).contains(&h));
        assert_eq!(sampler.surface_height(5, 5, &sample, 10, 2), 2);
    }
}
