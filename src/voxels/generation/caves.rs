//! Worm caves and standalone chambers.
//!
//! A worm starts at a random interior point with a yaw/pitch heading that
//! drifts a little every step, carving a sphere at each position. Chambers are
//! larger spheres scattered independently of the worms.

use std::f64::consts::TAU;

use fastrand::Rng;

use crate::voxels::{block::BlockType, world::VoxelWorld};

/// Probability that a worm step carves a chamber-sized sphere.
const CHAMBER_STEP_CHANCE: f64 = 0.015;

/// Clears every non-bedrock cell within `radius` of the center.
///
/// The carved box is clamped to `[1, size - 2]` on every axis so the floor and
/// outermost shell are never touched.
pub fn carve_sphere(world: &mut VoxelWorld, cx: f64, cy: f64, cz: f64, radius: f64) -> usize {
    let r2 = radius * radius;
    let min_x = ((cx - radius).floor() as i32).max(1);
    let max_x = ((cx + radius).ceil() as i32).min(world.size_x() - 2);
    let min_y = ((cy - radius).floor() as i32).max(1);
    let max_y = ((cy + radius).ceil() as i32).min(world.size_y() - 2);
    let min_z = ((cz - radius).floor() as i32).max(1);
    let max_z = ((cz + radius).ceil() as i32).min(world.size_z() - 2);

    let mut cleared = 0;
    for y in min_y..=max_y {
        for z in min_z..=max_z {
            for x in min_x..=max_x {
                let (dx, dy, dz) = (x as f64 - cx, y as f64 - cy, z as f64 - cz);
                if dx * dx + dy * dy + dz * dz > r2 {
                    continue;
                }
                let block = world.get(x, y, z);
                if block != BlockType::BEDROCK && block != BlockType::AIR {
                    world.set(x, y, z, BlockType::AIR);
                    cleared += 1;
                }
            }
        }
    }
    cleared
}

/// Walks a single worm and returns the number of steps it carved.
pub fn carve_worm(world: &mut VoxelWorld, rng: &mut Rng, min_length: u32, max_length: u32) -> u32 {
    let (sx, sy, sz) = (world.size_x() as f64, world.size_y() as f64, world.size_z() as f64);

    let mut x = 12.0 + rng.f64() * (sx - 24.0);
    let mut y = 3.0 + rng.f64() * (sy - 9.0);
    let mut z = 12.0 + rng.f64() * (sz - 24.0);
    let mut yaw = rng.f64() * TAU;
    let mut pitch = (rng.f64() - 0.5) * 0.26;
    let span = max_length.saturating_sub(min_length);
    let length = min_length + (rng.f64() * span as f64).floor() as u32;

    let mut steps = 0;
    for _ in 0..length {
        let radius = if rng.f64() < CHAMBER_STEP_CHANCE {
            3.0 + rng.f64() * 2.5
        } else {
            1.3 + rng.f64() * 1.3
        };
        carve_sphere(world, x, y, z, radius);
        steps += 1;

        yaw += (rng.f64() - 0.5) * 0.28;
        pitch = (pitch + (rng.f64() - 0.5) * 0.16).clamp(-0.55, 0.55);
        x += yaw.cos();
        z += yaw.sin();
        y += pitch.sin() * 0.8;

        if x < 8.0 || x > sx - 8.0 || z < 8.0 || z > sz - 8.0 || y < 2.0 || y > sy - 4.0 {
            break;
        }
    }
    steps
}

/// Carves one standalone chamber below sea level.
pub fn carve_chamber(world: &mut VoxelWorld, rng: &mut Rng, sea_level: i32) {
    let (sx, sz) = (world.size_x() as f64, world.size_z() as f64);
    let x = 12.0 + rng.f64() * (sx - 24.0);
    let z = 12.0 + rng.f64() * (sz - 24.0);
    let y = 4.0 + rng.f64() * (sea_level - 8).max(0) as f64;
    let radius = 4.0 + rng.f64() * 4.0;
    carve_sphere(world, x, y, z, radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stone_world() -> VoxelWorld {
        let mut world = VoxelWorld::new(40, 30, 40, 0);
        world.fill(BlockType::STONE);
        world
    }

    #[test]
    fn sphere_spares_bedrock_and_the_outer_shell() {
        let mut world = stone_world();
        world.set(5, 5, 5, BlockType::BEDROCK);
        carve_sphere(&mut world, 5.0, 5.0, 5.0, 6.0);
        assert_eq!(world.get(5, 5, 5), BlockType::BEDROCK);
        assert_eq!(world.get(4, 5, 5), BlockType::AIR);
        assert_eq!(world.get(0, 5, 5), BlockType::STONE);
        assert_eq!(world.get(5, 0, 5), BlockType::STONE);
    }

    #[test]
    fn sphere_is_round() {
        let mut world = stone_world();
        carve_sphere(&mut world, 20.0, 15.0, 20.0, 3.0);
        assert_eq!(world.get(23, 15, 20), BlockType::AIR);
        assert_eq!(world.get(23, 17, 20), BlockType::STONE);
        assert_eq!(world.get(20, 18, 20), BlockType::AIR);
    }

    #[test]
    fn worm_walks_are_deterministic() {
        let mut a = stone_world();
        let mut b = stone_world();
        carve_worm(&mut a, &mut Rng::with_seed(5), 20, 40);
        carve_worm(&mut b, &mut Rng::with_seed(5), 20, 40);
        assert_eq!(a, b);
        assert!(a.blocks().iter().any(|&v| v == BlockType::AIR.id()));
    }
}
