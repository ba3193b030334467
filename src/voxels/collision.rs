//! # Collision and Support Queries
//!
//! Axis-aligned box tests against the grid. Both queries are pure predicates;
//! callers own the response (snap-back, velocity zeroing, edge safety).
//!
//! Boxes are described by their bottom-center `position`, a horizontal
//! `half_width` and a `height`.

use cgmath::Point3;

use super::world::VoxelWorld;

/// Shrinks the box slightly so touching a face is not an overlap.
pub const COLLISION_EPSILON: f32 = 1e-3;

/// How far below the feet [`has_support_under`] samples.
pub const SUPPORT_PROBE_DEPTH: f32 = 0.05;

/// Inclusive integer cell range covered by `[lo, hi]` after trimming the
/// epsilon off both ends.
fn cell_span(lo: f32, hi: f32) -> (i32, i32) {
    (
        (lo + COLLISION_EPSILON).floor() as i32,
        (hi - COLLISION_EPSILON).floor() as i32,
    )
}

/// Returns true if any solid cell overlaps the box.
pub fn collides_at(world: &VoxelWorld, position: Point3<f32>, half_width: f32, height: f32) -> bool {
    let (min_x, max_x) = cell_span(position.x - half_width, position.x + half_width);
    let (min_y, max_y) = cell_span(position.y, position.y + height);
    let (min_z, max_z) = cell_span(position.z - half_width, position.z + half_width);

    for y in min_y..=max_y {
        for z in min_z..=max_z {
            for x in min_x..=max_x {
                if world.is_solid(x, y, z) {
                    return true;
                }
            }
        }
    }
    false
}

/// Returns true if a solid cell lies just below the box footprint.
pub fn has_support_under(world: &VoxelWorld, position: Point3<f32>, half_width: f32) -> bool {
    let (min_x, max_x) = cell_span(position.x - half_width, position.x + half_width);
    let (min_z, max_z) = cell_span(position.z - half_width, position.z + half_width);
    let y = (position.y - SUPPORT_PROBE_DEPTH).floor() as i32;

    for z in min_z..=max_z {
        for x in min_x..=max_x {
            if world.is_solid(x, y, z) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    #[test]
    fn standing_on_a_block_is_not_an_overlap() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.set(3, 2, 3, BlockType::STONE);
        let feet = Point3::new(3.5, 3.0, 3.5);
        assert!(!collides_at(&world, feet, 0.3, 1.8));
        assert!(has_support_under(&world, feet, 0.3));
        assert!(collides_at(&world, Point3::new(3.5, 2.9, 3.5), 0.3, 1.8));
    }

    #[test]
    fn touching_a_wall_is_not_an_overlap() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.set(4, 3, 3, BlockType::STONE);
        assert!(!collides_at(&world, Point3::new(3.7, 3.0, 3.5), 0.3, 1.8));
        assert!(collides_at(&world, Point3::new(3.71, 3.0, 3.5), 0.3, 1.8));
    }

    #[test]
    fn water_neither_collides_nor_supports() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.set(3, 2, 3, BlockType::WATER);
        world.set(3, 3, 3, BlockType::WATER);
        let feet = Point3::new(3.5, 3.0, 3.5);
        assert!(!collides_at(&world, feet, 0.3, 1.8));
        assert!(!has_support_under(&world, feet, 0.3));
    }
}
