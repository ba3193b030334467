//! Surface height and spawn point sampling.

use cgmath::Point3;
use fastrand::Rng;

use super::world::VoxelWorld;

/// Spawn points keep this distance from the world edge.
pub const SPAWN_BORDER: f32 = 10.0;

/// Height a body standing on column `(x, z)` would have its feet at.
///
/// One above the highest solid cell, or 1 outside the world.
pub fn surface_y_at(world: &VoxelWorld, x: f32, z: f32) -> f32 {
    let (ix, iz) = (x.floor() as i32, z.floor() as i32);
    if !world.in_bounds(ix, 0, iz) {
        return 1.0;
    }
    (world.highest_solid_y(ix, iz) + 1) as f32
}

/// A random point on dry-ish land away from the border.
///
/// Falls back to the world center at `y = 12` after 40 misses.
pub fn random_land_point(world: &VoxelWorld, rng: &mut Rng) -> Point3<f32> {
    let span_x = (world.size_x() as f32 - 2.0 * SPAWN_BORDER).max(0.0);
    let span_z = (world.size_z() as f32 - 2.0 * SPAWN_BORDER).max(0.0);

    for _ in 0..40 {
        let x = SPAWN_BORDER + rng.f32() * span_x;
        let z = SPAWN_BORDER + rng.f32() * span_z;
        let y = surface_y_at(world, x, z);
        if y > 2.0 {
            return Point3::new(x, y, z);
        }
    }
    Point3::new(world.size_x() as f32 / 2.0, 12.0, world.size_z() as f32 / 2.0)
}

/// A random land point within `radius` of a center, clamped away from the
/// border. Falls back to [`random_land_point`] after 50 misses.
pub fn random_land_point_near(
    world: &VoxelWorld,
    rng: &mut Rng,
    center_x: f32,
    center_z: f32,
    radius: f32,
) -> Point3<f32> {
    let hi_x = (world.size_x() as f32 - SPAWN_BORDER).max(SPAWN_BORDER);
    let hi_z = (world.size_z() as f32 - SPAWN_BORDER).max(SPAWN_BORDER);

    for _ in 0..50 {
        let x = (center_x + (rng.f32() * 2.0 - 1.0) * radius).clamp(SPAWN_BORDER, hi_x);
        let z = (center_z + (rng.f32() * 2.0 - 1.0) * radius).clamp(SPAWN_BORDER, hi_z);
        let y = surface_y_at(world, x, z);
        if y > 2.0 {
            return Point3::new(x, y, z);
        }
    }
    random_land_point(world, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    fn floor_world(height: i32) -> VoxelWorld {
        let mut world = VoxelWorld::new(40, 16, 40, 0);
        for x in 0..40 {
            for z in 0..40 {
                for y in 0..=height {
                    world.set(x, y, z, BlockType::STONE);
                }
            }
        }
        world
    }

    #[test]
    fn surface_is_one_above_ground() {
        let world = floor_world(5);
        assert_eq!(surface_y_at(&world, 12.7, 3.2), 6.0);
        assert_eq!(surface_y_at(&world, -1.0, 3.2), 1.0);
    }

    #[test]
    fn near_points_stay_clamped() {
        let world = floor_world(5);
        let mut rng = Rng::with_seed(4);
        for _ in 0..20 {
            let p = random_land_point_near(&world, &mut rng, 0.0, 0.0, 30.0);
            assert!(p.x >= SPAWN_BORDER && p.z >= SPAWN_BORDER);
            assert_eq!(p.y, 6.0);
        }
    }

    #[test]
    fn empty_world_falls_back_to_center() {
        let world = VoxelWorld::new(40, 16, 40, 0);
        let p = random_land_point(&world, &mut Rng::with_seed(1));
        assert_eq!(p, Point3::new(20.0, 12.0, 20.0));
    }
}
