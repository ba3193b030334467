//! Mesh data structures for voxel rendering.
//!
//! A [`Mesh`] is an indexed triangle list: four vertices and six indices per
//! quad. It is rebuilt wholesale whenever its region changes.

use crate::rendering::{
    atlas::{atlas_tile, tile_corner_uvs},
    Vertex,
};

use super::face::Face;

/// An indexed triangle mesh for one region of the world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// The vertex data, four per quad
    pub vertices: Vec<Vertex>,
    /// The index data, six per quad
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Appends one quad.
    pub fn push_face(&mut self, face: &Face, color: [f32; 3]) {
        let faces_so_far = self.quad_count() as u32;
        self.vertices.extend(Self::generate_face_vertices(face, color));
        self.indices.extend(Self::generate_face_indices(faces_so_far));
    }

    /// Generates vertex data for a single face of a block.
    ///
    /// # Returns
    /// The four corners of the face, ordered lower-left, lower-right,
    /// upper-left, upper-right to match `generate_face_indices`.
    pub fn generate_face_vertices(face: &Face, color: [f32; 3]) -> [Vertex; 4] {
        let tile = atlas_tile(face.block_type, face.block_side.orientation());
        let uvs = tile_corner_uvs(tile);
        let normal = face.block_side.normal();
        let corners = face.corners();

        [
            Vertex::new(corners[0], normal, color, uvs[0]),
            Vertex::new(corners[1], normal, color, uvs[1]),
            Vertex::new(corners[2], normal, color, uvs[2]),
            Vertex::new(corners[3], normal, color, uvs[3]),
        ]
    }

    /// Generates index data for a face, adjusted by the number of previously generated faces.
    ///
    /// # Returns
    /// Six indices forming the triangles (ll, ul, ur) and (ll, ur, lr), both
    /// counter-clockwise from outside.
    pub fn generate_face_indices(num_faces_generated: u32) -> [u32; 6] {
        let base = num_faces_generated * 4;
        [base, 2 + base, 3 + base, base, 3 + base, 1 + base]
    }

    /// Number of quads.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The mesh as a flat triangle soup.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }
}
