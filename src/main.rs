//! # Voxel Sandbox Demo
//!
//! Generates a world, meshes the region around a spawn point, digs and builds
//! a little through the gameplay layer, then saves and reloads the result.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [seed] [config.json] [save.json]
//! ```
//!
//! Without a save path the save JSON is printed to stdout.

use std::{env, error::Error, fs::File, io};

use cgmath::{Point3, Vector3};
use fastrand::Rng;
use log::info;

use voxel_sandbox::{
    entities,
    gameplay::{try_place_block, MiningEvent, MiningState, PlayerBody, PlayerPhysics, ToolStats},
    persistence::{SaveData, WorldDiff},
    rendering::meshing::region::{RegionTracker, RENDER_GRID},
    voxels::{block::BlockType, generation::GenerationConfig, spawn::random_land_point, world::VoxelWorld},
};

const WORLD_SIZE_X: i32 = 128;
const WORLD_SIZE_Y: i32 = 64;
const WORLD_SIZE_Z: i32 = 128;
const DEMO_RADIUS: i32 = 32;

fn main() -> Result<(), Box<dyn Error>> {
    voxel_sandbox::init_logger();

    let mut args = env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u32>()?,
        None => 1337,
    };
    let config = match args.next() {
        Some(path) => GenerationConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GenerationConfig::default(),
    };
    let save_path = args.next();

    let mut world = VoxelWorld::new(WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z, seed);
    world.generate_with(&config);

    let mut rng = Rng::with_seed(seed as u64);
    let spawn = random_land_point(&world, &mut rng);
    info!("Spawn at ({:.1}, {:.1}, {:.1})", spawn.x, spawn.y, spawn.z);

    let mut tracker = RegionTracker::new(RENDER_GRID, DEMO_RADIUS);
    if let Some(bounds) = tracker.update(spawn.x, spawn.z, world.size_y(), true) {
        let mesh = world.build_geometry_region(
            bounds.min_x,
            bounds.max_x,
            bounds.min_z,
            bounds.max_z,
            Some(bounds.min_y),
            Some(bounds.max_y),
        );
        info!("Meshed {} quads around spawn", mesh.quad_count());
    }

    let mobs = entities::populate(&world, &mut rng, spawn.x, spawn.z, 24.0);
    info!("{} mobs roaming", mobs.len());

    let physics = PlayerPhysics::default();
    let player = PlayerBody::new(spawn);
    let eye = player.eye_position();
    let down = Vector3::new(0.0, -1.0, 0.0);
    let mut diff = WorldDiff::new();

    // Dig out the block underfoot, then put a plank back in its place.
    let mut mining = MiningState::new();
    for _ in 0..600 {
        match mining.tick(&mut world, &mut diff, eye, down, ToolStats::DIAMOND_PICKAXE, 1.0 / 60.0) {
            MiningEvent::Broke { target, block } => {
                info!("Mined {:?} at {:?}", block, target);
                break;
            }
            MiningEvent::Idle | MiningEvent::Blocked { .. } => break,
            MiningEvent::Progress { .. } => {}
        }
    }
    let beside = Point3::new(eye.x + 2.0, eye.y, eye.z);
    if let Some(cell) = try_place_block(&mut world, &mut diff, beside, down, BlockType::PLANKS, &player, &physics) {
        info!("Placed planks at {:?}", cell);
    }

    let save = SaveData::capture(&world, &diff, Some(player.position));
    match &save_path {
        Some(path) => save.write_to(File::create(path)?)?,
        None => {
            save.write_to(io::stdout().lock())?;
            println!();
        }
    }

    let reloaded = SaveData::from_json_str(&save.to_json_string()?)?;
    let (restored, _) = reloaded.restore(WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z, &config);
    info!(
        "Reloaded {} edits, world matches: {}",
        reloaded.changes.len(),
        restored.blocks() == world.blocks()
    );
    Ok(())
}
