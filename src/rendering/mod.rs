//! # Rendering Data
//!
//! Everything the renderer consumes from the world: the vertex format, atlas
//! addressing and the region mesher. No GPU state lives here.

pub mod atlas;
pub mod meshing;
pub mod vertex;

pub use vertex::Vertex;
