//! Tessera Render - GPU-ready mesh buffers
//!
//! Packs a loaded mesh into vertex and index byte buffers with a described
//! layout. Uploading and drawing are left to the caller's graphics API.

pub mod mesh;
pub mod vertex;

pub use mesh::MeshBuffers;
pub use vertex::{
    tex_coord_layout, AttributeFormat, MeshVertex, VertexAttribute, VertexLayout,
    NORMAL_LOCATION, POSITION_LOCATION, TEX_COORD_LOCATION,
};
