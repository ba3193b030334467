//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions and block face geometry.

pub mod block_side;
pub mod block_type;

pub use block_side::{BlockSide, FaceOrientation};
pub use block_type::BlockType;

/// The underlying integer type used to represent block types in memory.
/// This is the byte stored per cell in the world grid and in save diffs.
pub type BlockTypeSize = u8;
