//! Tessera Assets - OBJ loading and mesh management
//!
//! Turns Wavefront OBJ text into triangle-list meshes with synthesized
//! per-position normals, and caches loaded meshes for the viewer.

mod error;
mod handle;
mod mesh;
mod model;
pub mod obj;
mod obj_loader;
mod options;
mod server;

pub use error::{AssetError, ObjError};
pub use handle::{AssetId, MeshHandle};
pub use mesh::Mesh;
pub use model::Model;
pub use obj::{parse_obj, read_obj, LoadStats, LoadedMesh};
pub use obj_loader::load_obj;
pub use options::{DegenerateTriangles, LoadOptions, MalformedAttributes, MalformedFaces, NormalMode};
pub use server::{AssetServer, MeshEntry};
