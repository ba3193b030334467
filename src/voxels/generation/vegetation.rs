//! Trees.

use fastrand::Rng;

use crate::voxels::{block::BlockType, world::VoxelWorld};

use super::{biome::BiomeSampler, rand_span};

/// Stamps a tree whose trunk rises from the grass cell at `(x, top_y, z)`.
///
/// The canopy is a Manhattan-distance blob around the top of the trunk and
/// only fills air, so it never eats into terrain or other trunks.
pub fn place_tree(world: &mut VoxelWorld, x: i32, top_y: i32, z: i32, trunk_height: i32) {
    for y in 1..=trunk_height {
        world.set(x, top_y + y, z, BlockType::WOOD);
    }

    let leaf_start = top_y + trunk_height - 1;
    for ox in -2..=2_i32 {
        for oz in -2..=2_i32 {
            for oy in 0..=2_i32 {
                if ox.abs() + oz.abs() + oy > 4 {
                    continue;
                }
                let (lx, ly, lz) = (x + ox, leaf_start + oy, z + oz);
                if world.get(lx, ly, lz) == BlockType::AIR {
                    world.set(lx, ly, lz, BlockType::LEAVES);
                }
            }
        }
    }
}

/// One tree attempt. Returns true if a tree was planted.
///
/// Draws the column, then the biome roll, then (only when the roll passes
/// and the column is grass-topped) the trunk height.
pub fn try_plant_tree(world: &mut VoxelWorld, rng: &mut Rng, sampler: &BiomeSampler) -> bool {
    let x = rand_span(rng, 4, world.size_x() - 8);
    let z = rand_span(rng, 4, world.size_z() - 8);
    let roll = rng.f64();

    if roll >= sampler.biome_at(x, z).tree_chance() {
        return false;
    }
    let top_y = world.highest_solid_y(x, z);
    if world.get(x, top_y, z) != BlockType::GRASS {
        return false;
    }

    let trunk_height = rand_span(rng, 3, 3);
    place_tree(world, x, top_y, z, trunk_height);
    true
}
