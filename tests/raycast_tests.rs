/// Integration tests for voxel raycasting
use cgmath::{Point3, Vector3};
use voxel_sandbox::voxels::{block::BlockType, raycast::voxel_raycast, world::VoxelWorld};

fn world_with_stone() -> VoxelWorld {
    let mut world = VoxelWorld::new(16, 16, 16, 0);
    world.set(8, 5, 5, BlockType::STONE);
    world
}

#[test]
fn test_axis_ray_reports_hit_and_previous() {
    let world = world_with_stone();
    let hit = voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(1.0, 0.0, 0.0), 10.0).unwrap();

    assert_eq!(hit.hit, Point3::new(8, 5, 5));
    assert_eq!(hit.previous, Point3::new(7, 5, 5));
    assert!((hit.distance - 5.5).abs() < 1e-4);
}

#[test]
fn test_ray_pointing_away_misses() {
    let world = world_with_stone();
    assert_eq!(voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(-1.0, 0.0, 0.0), 10.0), None);
}

#[test]
fn test_reach_limits_the_hit() {
    let world = world_with_stone();
    assert_eq!(voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(1.0, 0.0, 0.0), 5.0), None);
}

#[test]
fn test_direction_length_does_not_matter() {
    let world = world_with_stone();
    let unit = voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(1.0, 0.0, 0.0), 10.0);
    let long = voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(40.0, 0.0, 0.0), 10.0);
    assert_eq!(unit, long);
}

#[test]
fn test_zero_direction_never_hits() {
    let mut world = world_with_stone();
    world.fill(BlockType::STONE);
    assert_eq!(voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(0.0, 0.0, 0.0), 10.0), None);
}

#[test]
fn test_ray_starting_inside_a_block() {
    let world = world_with_stone();
    let hit = voxel_raycast(&world, Point3::new(8.5, 5.5, 5.5), Vector3::new(0.0, 1.0, 0.0), 4.0).unwrap();
    assert_eq!(hit.hit, Point3::new(8, 5, 5));
    assert_eq!(hit.previous, hit.hit);
    assert_eq!(hit.distance, 0.0);
}

#[test]
fn test_water_is_transparent_to_rays() {
    let mut world = world_with_stone();
    for x in 4..8 {
        world.set(x, 5, 5, BlockType::WATER);
    }
    let hit = voxel_raycast(&world, Point3::new(2.5, 5.5, 5.5), Vector3::new(1.0, 0.0, 0.0), 10.0).unwrap();
    assert_eq!(hit.hit, Point3::new(8, 5, 5));
    assert_eq!(hit.previous, Point3::new(7, 5, 5));
}

#[test]
fn test_downward_ray_finds_the_ground() {
    let mut world = VoxelWorld::new(16, 32, 16, 0);
    world.generate();
    let top = world.highest_solid_y(8, 8);
    let hit = voxel_raycast(&world, Point3::new(8.5, 31.5, 8.5), Vector3::new(0.0, -1.0, 0.0), 64.0).unwrap();
    assert_eq!(hit.hit, Point3::new(8, top, 8));
    assert_eq!(hit.previous, Point3::new(8, top + 1, 8));
}
