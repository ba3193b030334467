//! # Voxel Raycasting
//!
//! Grid traversal in the style of Amanatides and Woo: the ray walks cell by
//! cell, always crossing the nearest cell boundary next, so every cell it
//! passes through is visited exactly once.

use cgmath::{InnerSpace, Point3, Vector3};

use super::world::VoxelWorld;

/// Stand-in for a zero direction component, avoiding a division by zero.
const DIRECTION_EPSILON: f32 = 1e-6;

/// The result of a successful raycast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaycastHit {
    /// The first solid cell along the ray.
    pub hit: Point3<i32>,
    /// The cell visited just before `hit`. This is where a placed block goes.
    ///
    /// Equals `hit` when the ray starts inside a solid cell.
    pub previous: Point3<i32>,
    /// Distance along the ray at which `hit` was entered.
    pub distance: f32,
}

fn non_zero(v: f32) -> f32 {
    if v == 0.0 {
        DIRECTION_EPSILON
    } else {
        v
    }
}

/// Casts a ray through the grid.
///
/// Returns the first solid cell within `max_distance` of `origin`, or `None`
/// if the ray travels that far or leaves the grid without hitting anything.
/// Water is passed through. A (near) zero direction never hits.
pub fn voxel_raycast(
    world: &VoxelWorld,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RaycastHit> {
    if direction.magnitude2() < 1e-12 {
        return None;
    }
    let dir = direction.normalize();
    let d = Vector3::new(non_zero(dir.x), non_zero(dir.y), non_zero(dir.z));

    let mut cell = Point3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );
    let step = Vector3::new(
        if d.x > 0.0 { 1 } else { -1 },
        if d.y > 0.0 { 1 } else { -1 },
        if d.z > 0.0 { 1 } else { -1 },
    );
    let inv = Vector3::new((1.0 / d.x).abs(), (1.0 / d.y).abs(), (1.0 / d.z).abs());

    let boundary = |c: i32, s: i32| if s > 0 { (c + 1) as f32 } else { c as f32 };
    let mut t_max = Vector3::new(
        (boundary(cell.x, step.x) - origin.x) / d.x,
        (boundary(cell.y, step.y) - origin.y) / d.y,
        (boundary(cell.z, step.z) - origin.z) / d.z,
    );
    if t_max.x < 0.0 {
        t_max.x += inv.x;
    }
    if t_max.y < 0.0 {
        t_max.y += inv.y;
    }
    if t_max.z < 0.0 {
        t_max.z += inv.z;
    }

    let leaving = |c: i32, s: i32, size: i32| (c < 0 && s < 0) || (c >= size && s > 0);

    let mut t = 0.0;
    let mut previous = cell;

    while t <= max_distance {
        // Nothing solid lies past the grid.
        if leaving(cell.x, step.x, world.size_x())
            || leaving(cell.y, step.y, world.size_y())
            || leaving(cell.z, step.z, world.size_z())
        {
            return None;
        }
        if world.is_solid(cell.x, cell.y, cell.z) {
            return Some(RaycastHit {
                hit: cell,
                previous,
                distance: t,
            });
        }
        previous = cell;

        if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                cell.x += step.x;
                t = t_max.x;
                t_max.x += inv.x;
            } else {
                cell.z += step.z;
                t = t_max.z;
                t_max.z += inv.z;
            }
        } else if t_max.y < t_max.z {
            cell.y += step.y;
            t = t_max.y;
            t_max.y += inv.y;
        } else {
            cell.z += step.z;
            t = t_max.z;
            t_max.z += inv.z;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    #[test]
    fn diagonal_ray_finds_block() {
        let mut world = VoxelWorld::new(16, 16, 16, 0);
        world.set(5, 5, 5, BlockType::STONE);
        let hit = voxel_raycast(
            &world,
            Point3::new(2.5, 2.5, 2.5),
            Vector3::new(1.0, 1.0, 1.0),
            10.0,
        )
        .unwrap();
        assert_eq!(hit.hit, Point3::new(5, 5, 5));
        let p = hit.previous;
        let manhattan = (5 - p.x).abs() + (5 - p.y).abs() + (5 - p.z).abs();
        assert_eq!(manhattan, 1);
    }

    #[test]
    fn starting_inside_a_block_hits_immediately() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.set(1, 1, 1, BlockType::DIRT);
        let hit = voxel_raycast(&world, Point3::new(1.5, 1.5, 1.5), Vector3::unit_x(), 3.0).unwrap();
        assert_eq!(hit.hit, hit.previous);
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn zero_direction_never_hits() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.fill(BlockType::STONE);
        assert!(voxel_raycast(&world, Point3::new(1.5, 1.5, 1.5), Vector3::new(0.0, 0.0, 0.0), 3.0).is_none());
    }

    #[test]
    fn water_is_transparent_to_rays() {
        let mut world = VoxelWorld::new(16, 8, 8, 0);
        world.set(4, 2, 2, BlockType::WATER);
        world.set(6, 2, 2, BlockType::SAND);
        let hit = voxel_raycast(&world, Point3::new(1.5, 2.5, 2.5), Vector3::unit_x(), 10.0).unwrap();
        assert_eq!(hit.hit, Point3::new(6, 2, 2));
        assert_eq!(hit.previous, Point3::new(5, 2, 2));
    }

    #[test]
    fn ray_leaving_the_grid_stops() {
        let world = VoxelWorld::new(16, 16, 16, 0);
        let origin = Point3::new(8.5, 8.5, 8.5);
        for direction in [Vector3::unit_x(), -Vector3::unit_y(), Vector3::new(0.3, 1.0, -0.7)] {
            assert!(voxel_raycast(&world, origin, direction, 1e9).is_none());
        }
        assert!(voxel_raycast(&world, Point3::new(-4.5, 8.5, 8.5), -Vector3::unit_x(), 1e9).is_none());
    }

    #[test]
    fn ray_from_outside_reaches_the_grid() {
        let mut world = VoxelWorld::new(16, 16, 16, 0);
        world.set(0, 8, 8, BlockType::STONE);
        let hit = voxel_raycast(&world, Point3::new(-4.5, 8.5, 8.5), Vector3::unit_x(), 1e9).unwrap();
        assert_eq!(hit.hit, Point3::new(0, 8, 8));
        assert_eq!(hit.previous, Point3::new(-1, 8, 8));
    }
}
