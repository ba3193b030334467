//! Sea water.

use crate::voxels::{block::BlockType, world::VoxelWorld};

/// Floods every column whose surface lies below `sea_level`.
///
/// Air from just above the surface up to `sea_level` becomes water. Returns
/// the number of cells filled.
pub fn fill_water(world: &mut VoxelWorld, sea_level: i32) -> usize {
    let top = sea_level.min(world.size_y() - 1);
    let mut filled = 0;

    for x in 0..world.size_x() {
        for z in 0..world.size_z() {
            let surface = world.highest_solid_y(x, z);
            if surface >= sea_level {
                continue;
            }
            for y in surface + 1..=top {
                if world.get(x, y, z) == BlockType::AIR {
                    world.set(x, y, z, BlockType::WATER);
                    filled += 1;
                }
            }
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floods_low_columns_only() {
        let mut world = VoxelWorld::new(2, 12, 1, 0);
        for y in 0..=4 {
            world.set(0, y, 0, BlockType::STONE);
        }
        for y in 0..=9 {
            world.set(1, y, 0, BlockType::STONE);
        }

        assert_eq!(fill_water(&mut world, 7), 3);
        assert_eq!(world.get(0, 5, 0), BlockType::WATER);
        assert_eq!(world.get(0, 7, 0), BlockType::WATER);
        assert_eq!(world.get(0, 8, 0), BlockType::AIR);
        assert_eq!(world.get(1, 10, 0), BlockType::AIR);
    }
}
