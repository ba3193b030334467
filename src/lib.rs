#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! A finite, seeded voxel world: procedural terrain, meshing, raycasting,
//! collision and edit persistence, with a thin gameplay layer on top.
//!
//! ## Key Modules
//!
//! * `voxels` - The block grid, its generator and the spatial queries over it
//! * `rendering` - Visible-surface mesh extraction into vertex/index buffers
//! * `persistence` - Saving a world as its seed plus the edits made to it
//! * `gameplay` - Player movement, mining and block placement
//! * `entities` - Mob steering
//!
//! ## Architecture
//!
//! The world is one dense array sized at creation. Everything else borrows it:
//! * Generation fills it once from the seed
//! * Meshing reads it into a GPU-ready [`rendering::meshing::Mesh`]
//! * Gameplay mutates it through a [`persistence::WorldDiff`] so edits can be saved
//!
//! Drawing the mesh is left to the host application.
//!
//! ## Usage
//!
//! ```rust
//! use voxel_sandbox::voxels::world::VoxelWorld;
//!
//! voxel_sandbox::init_logger();
//!
//! let mut world = VoxelWorld::new(48, 40, 48, 1337);
//! world.generate();
//! let mesh = world.build_geometry_region(0, 47, 0, 47, None, None);
//! assert!(!mesh.is_empty());
//! ```

use log::info;

pub mod entities;
pub mod gameplay;
pub mod persistence;
pub mod rendering;
pub mod voxels;

/// Installs the stdout logger, filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless.
pub fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    if log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok()
    {
        info!("Logger initialized");
    }
}
