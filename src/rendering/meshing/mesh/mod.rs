//! Mesh generation for voxel rendering.
//!
//! This module converts the voxel grid into GPU-friendly vertex and index
//! buffers.
//!
//! # Architecture
//! - [`Mesh`]: vertices and indices for one region
//! - [`Face`]: a single block face with its four corners
//! - `builder`: visible-face extraction with culling
//! - `shading`: baked material tint and ambient occlusion
//!
//! # Usage
//! ```
//! use voxel_sandbox::voxels::{block::BlockType, world::VoxelWorld};
//!
//! let mut world = VoxelWorld::new(8, 8, 8, 0);
//! world.set(4, 4, 4, BlockType::STONE);
//! let mesh = world.build_geometry_region(0, 7, 0, 7, None, None);
//! assert_eq!(mesh.quad_count(), 6);
//! ```

mod builder;
mod face;
mod mesh;
pub mod shading;

pub use builder::{build_region_mesh, is_face_hidden};
pub use face::Face;
pub use mesh::*;
