//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block.
//! It provides the geometry each face needs for culling, meshing and
//! ambient-occlusion sampling.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a unique integer value so per-side tables can be
/// indexed with `side as usize`.
///
/// The order is: [RIGHT, LEFT, TOP, BOTTOM, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The right face (facing positive X)
    RIGHT = 0,

    /// The left face (facing negative X)
    LEFT = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

/// Which atlas row of a block a face samples: its top, its sides or its bottom.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum FaceOrientation {
    /// Upward-facing face
    Top,
    /// Any horizontal-facing face
    Side,
    /// Downward-facing face
    Bottom,
}

/// Unit-cube corner offsets for each side, wound counter-clockwise when seen
/// from outside the block. Order per side: lower-left, upper-left, upper-right,
/// lower-right.
const SIDE_CORNERS: [[[i32; 3]; 4]; 6] = [
    [[1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 1]],
    [[0, 0, 1], [0, 1, 1], [0, 1, 0], [0, 0, 0]],
    [[0, 1, 1], [1, 1, 1], [1, 1, 0], [0, 1, 0]],
    [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
    [[1, 0, 1], [1, 1, 1], [0, 1, 1], [0, 0, 1]],
    [[0, 0, 0], [0, 1, 0], [1, 1, 0], [1, 0, 0]],
];

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// This is useful for iterating over all possible faces of a block.
    /// The order is: [RIGHT, LEFT, TOP, BOTTOM, FRONT, BACK]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// The integer step from a cell to the neighbour this side faces.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// The outward unit normal of this side.
    pub fn normal(self) -> Vector3<f32> {
        self.offset().cast::<f32>().unwrap_or(Vector3::new(0.0, 0.0, 0.0))
    }

    /// Two unit axes spanning the plane of this side.
    ///
    /// Used to pick the four in-plane neighbours sampled for ambient occlusion.
    pub fn tangents(self) -> (Vector3<i32>, Vector3<i32>) {
        match self {
            BlockSide::RIGHT | BlockSide::LEFT => (Vector3::new(0, 0, 1), Vector3::new(0, 1, 0)),
            BlockSide::TOP | BlockSide::BOTTOM => (Vector3::new(1, 0, 0), Vector3::new(0, 0, 1)),
            BlockSide::FRONT | BlockSide::BACK => (Vector3::new(1, 0, 0), Vector3::new(0, 1, 0)),
        }
    }

    /// The corner offsets of the unit quad for this side.
    ///
    /// Order: lower-left, upper-left, upper-right, lower-right.
    pub fn corners(self) -> [[i32; 3]; 4] {
        SIDE_CORNERS[self as usize]
    }

    /// Which part of the texture atlas entry this side samples.
    pub fn orientation(self) -> FaceOrientation {
        match self {
            BlockSide::TOP => FaceOrientation::Top,
            BlockSide::BOTTOM => FaceOrientation::Bottom,
            _ => FaceOrientation::Side,
        }
    }
}
