//! Bedrock shell and height-field surface.

use crate::voxels::{block::BlockType, world::VoxelWorld};

use super::biome::{Biome, BiomeSampler, BARE_STONE_ABOVE_SEA};
use super::hash::{lattice_unit, SALT_COBBLE, SALT_SANDY};

/// Lowest surface height any column may have.
pub const MIN_SURFACE_HEIGHT: i32 = 3;

/// Surface heights stay this far below the world ceiling.
pub const CEILING_CLEARANCE: i32 = 8;

/// Writes the bedrock floor at `y = 0` and the bedrock walls around the edge.
pub fn place_bedrock_shell(world: &mut VoxelWorld, wall_height: i32) {
    let (max_x, max_z) = (world.size_x() - 1, world.size_z() - 1);

    for x in 0..world.size_x() {
        for z in 0..world.size_z() {
            world.set(x, 0, z, BlockType::BEDROCK);
        }
    }

    for y in 1..=wall_height {
        for x in 0..world.size_x() {
            world.set(x, y, 0, BlockType::BEDROCK);
            world.set(x, y, max_z, BlockType::BEDROCK);
        }
        for z in 0..world.size_z() {
            world.set(0, y, z, BlockType::BEDROCK);
            world.set(max_x, y, z, BlockType::BEDROCK);
        }
    }
}

/// The block at height `y` of a column whose surface is at `height`.
fn column_block(
    biome: Biome,
    height: i32,
    y: i32,
    sea_level: i32,
    sandy_patch: bool,
    cobble_roll: f64,
) -> BlockType {
    let depth = biome.subsoil_depth();
    let bare = biome == Biome::Mountains && height > sea_level + BARE_STONE_ABOVE_SEA;
    let beach = matches!(biome, Biome::Plains | Biome::Forest) && (height - sea_level).abs() <= 1;

    if y == height {
        if bare {
            BlockType::STONE
        } else if beach || sandy_patch {
            BlockType::SAND
        } else {
            biome.surface_block()
        }
    } else if y > height - 1 - depth && !bare {
        if beach {
            BlockType::SAND
        } else {
            biome.subsoil_block()
        }
    } else if y > height - 4 - depth && cobble_roll > 0.9 {
        BlockType::COBBLESTONE
    } else {
        BlockType::STONE
    }
}

/// Fills every column from `y = 1` up to its biome surface height.
///
/// Bedrock already written by [`place_bedrock_shell`] is left intact.
pub fn fill_height_field(world: &mut VoxelWorld, sampler: &BiomeSampler) {
    let seed = world.seed();
    let sea_level = sampler.sea_level();
    let high = world.size_y() - CEILING_CLEARANCE;

    for x in 0..world.size_x() {
        for z in 0..world.size_z() {
            let sample = sampler.sample(x, z);
            let height = sampler.surface_height(x, z, &sample, MIN_SURFACE_HEIGHT, high);
            let sandy_patch =
                sample.biome == Biome::Plains && lattice_unit(x, 0, z, seed, SALT_SANDY) > 0.92;

            for y in 1..=height {
                if world.get(x, y, z) == BlockType::BEDROCK {
                    continue;
                }
                let cobble_roll = lattice_unit(x, y, z, seed, SALT_COBBLE);
                let block = column_block(sample.biome, height, y, sea_level, sandy_patch, cobble_roll);
                world.set(x, y, z, block);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_covers_floor_and_walls() {
        let mut world = VoxelWorld::new(10, 20, 12, 0);
        place_bedrock_shell(&mut world, 5);
        assert_eq!(world.get(4, 0, 4), BlockType::BEDROCK);
        assert_eq!(world.get(0, 5, 6), BlockType::BEDROCK);
        assert_eq!(world.get(9, 3, 6), BlockType::BEDROCK);
        assert_eq!(world.get(4, 5, 11), BlockType::BEDROCK);
        assert_eq!(world.get(0, 6, 6), BlockType::AIR);
        assert_eq!(world.get(4, 1, 4), BlockType::AIR);
    }

    #[test]
    fn column_layers() {
        let b = |y| column_block(Biome::Forest, 40, y, 20, false, 0.0);
        assert_eq!(b(40), BlockType::GRASS);
        assert_eq!(b(39), BlockType::DIRT);
        assert_eq!(b(37), BlockType::DIRT);
        assert_eq!(b(36), BlockType::STONE);
        assert_eq!(column_block(Biome::Forest, 40, 35, 20, false, 0.95), BlockType::COBBLESTONE);
    }

    #[test]
    fn high_mountains_are_bare_and_shores_are_sand() {
        assert_eq!(column_block(Biome::Mountains, 60, 60, 20, false, 0.0), BlockType::STONE);
        assert_eq!(column_block(Biome::Mountains, 60, 59, 20, false, 0.0), BlockType::STONE);
        assert_eq!(column_block(Biome::Plains, 21, 21, 20, false, 0.0), BlockType::SAND);
        assert_eq!(column_block(Biome::Plains, 21, 20, 20, false, 0.0), BlockType::SAND);
    }

    #[test]
    fn height_field_keeps_the_shell() {
        let mut world = VoxelWorld::new(24, 32, 24, 9);
        place_bedrock_shell(&mut world, 14);
        fill_height_field(&mut world, &BiomeSampler::new(9, 14));
        for y in 0..=14 {
            assert_eq!(world.get(0, y, 10), BlockType::BEDROCK);
        }
        assert_eq!(world.get(10, 0, 10), BlockType::BEDROCK);
        assert!(world.is_solid(10, MIN_SURFACE_HEIGHT, 10));
    }
}
