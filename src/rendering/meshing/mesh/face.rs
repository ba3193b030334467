use cgmath::Point3;

use crate::voxels::block::{BlockSide, BlockType};

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points (lower-left, lower-right, upper-right, upper-left)
/// in world grid coordinates, wound counter-clockwise when seen from outside the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-right corner of the face
    pub lr: Point3<i32>,
    /// Lower-left corner of the face
    pub ll: Point3<i32>,
    /// Upper-right corner of the face
    pub ur: Point3<i32>,
    /// Upper-left corner of the face
    pub ul: Point3<i32>,
    /// The block this face belongs to
    pub block_type: BlockType,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the cell at `(x, y, z)`.
    pub fn new(x: i32, y: i32, z: i32, block_type: BlockType, block_side: BlockSide) -> Self {
        let corner = |c: [i32; 3]| Point3::new(x + c[0], y + c[1], z + c[2]);
        let [ll, ul, ur, lr] = block_side.corners();

        Face {
            ll: corner(ll),
            lr: corner(lr),
            ul: corner(ul),
            ur: corner(ur),
            block_type,
            block_side,
        }
    }

    /// The corners in vertex order: lower-left, lower-right, upper-left, upper-right.
    pub fn corners(&self) -> [Point3<i32>; 4] {
        [self.ll, self.lr, self.ul, self.ur]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_face_sits_on_the_upper_plane() {
        let face = Face::new(2, 3, 4, BlockType::STONE, BlockSide::TOP);
        assert!(face.corners().iter().all(|c| c.y == 4));
        assert_eq!(face.ll, Point3::new(2, 4, 5));
        assert_eq!(face.ur, Point3::new(3, 4, 4));
    }

    #[test]
    fn left_face_sits_on_the_lower_x_plane() {
        let face = Face::new(2, 3, 4, BlockType::STONE, BlockSide::LEFT);
        assert!(face.corners().iter().all(|c| c.x == 2));
    }
}
