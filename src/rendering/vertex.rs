//! Vertex data structures for voxel meshes.
//!
//! This module defines the vertex format produced by the mesh builder and
//! consumed by whatever renderer sits on the other side.

use cgmath::{Point3, Vector3};

/// A vertex of a voxel mesh.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Color: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 44 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// Baked color, material tint times ambient occlusion
    pub color: [f32; 3],
    /// Atlas texture coordinates (normalized 0.0-1.0)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `pos` - The grid corner this vertex sits on
    /// * `normal` - The face normal
    /// * `color` - The baked RGB color
    /// * `tex_coords` - The atlas UV
    pub fn new(pos: Point3<i32>, normal: Vector3<f32>, color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: normal.into(),
            color,
            tex_coords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
        let v = Vertex::new(Point3::new(1, 2, 3), Vector3::unit_y(), [0.5; 3], [0.25, 0.75]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 44);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
    }
}
