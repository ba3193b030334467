//! # Voxel World Core
//!
//! This module contains the voxel world itself and everything that queries or
//! fills it directly.
//!
//! ## Architecture
//!
//! * **Block**: block types, their material properties and face geometry
//! * **World**: the dense grid with bounds-safe access
//! * **Generation**: the seeded terrain pipeline
//! * **Raycast**: grid traversal for targeting
//! * **Collision**: box overlap and ground support predicates
//! * **Spawn**: surface height and land point sampling
//!
//! ## Data Flow
//!
//! 1. Generation writes the grid once at world creation
//! 2. Gameplay raycasts to pick a target, then mutates the grid with `set`
//! 3. The mesh for the surrounding region is rebuilt
//! 4. Collision queries constrain movement every tick
//!
//! Everything here is single-threaded and synchronous.

pub mod block;
pub mod collision;
pub mod generation;
pub mod raycast;
pub mod spawn;
pub mod world;
