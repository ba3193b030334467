//! Meshing entry points: region bounds, rebuild tracking and the mesh itself.

pub mod mesh;
pub mod region;

pub use mesh::{build_region_mesh, Face, Mesh};
pub use region::{RegionBounds, RegionTracker};
