//! Upload-ready buffers built from a loaded mesh

use tessera_assets::Mesh;

use crate::vertex::MeshVertex;

/// Vertex and index data laid out for a single indexed-triangle draw.
///
/// The texture-coordinate stream is bound positionally: entry `i` is paired
/// with vertex `i` regardless of which `vt` a face corner named.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<MeshVertex>,
    pub tex_coords: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create empty buffers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Interleave positions with their synthesized normals
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let vertices = mesh
            .positions()
            .iter()
            .zip(mesh.normals())
            .map(|(position, normal)| MeshVertex::new(position.to_array(), normal.to_array()))
            .collect();

        let tex_coords = mesh.tex_coords().iter().map(|uv| uv.to_array()).collect();

        Self {
            vertices,
            tex_coords,
            indices: mesh.indices().to_vec(),
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Element count for the draw call.
    ///
    /// A single indexed draw takes a `u32` count, so this saturates at
    /// `u32::MAX` rather than wrapping.
    pub fn index_count(&self) -> u32 {
        draw_count(self.indices.len())
    }

    /// Whether a texture-coordinate stream should be bound at all
    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn draw_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl From<&Mesh> for MeshBuffers {
    fn from(mesh: &Mesh) -> Self {
        Self::from_mesh(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_assets::{parse_obj, LoadOptions};

    fn buffers(source: &str) -> MeshBuffers {
        let loaded = parse_obj(source, &LoadOptions::default()).unwrap();
        MeshBuffers::from_mesh(&loaded.mesh)
    }

    #[test]
    fn triangle_interleaves_positions_and_normals() {
        let buffers = buffers("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");

        assert_eq!(buffers.vertices.len(), 3);
        assert_eq!(buffers.vertices[1].position, [1.0, 0.0, 0.0]);
        for vertex in &buffers.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.index_count(), 3);
        assert!(!buffers.has_tex_coords());
    }

    #[test]
    fn byte_views_match_element_sizes() {
        let buffers = buffers("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nvt 1 1\nf 1/1 2/2 3/2 4/1\n");

        assert_eq!(buffers.vertex_bytes().len(), 4 * 24);
        assert_eq!(buffers.tex_coord_bytes().len(), 2 * 8);
        assert_eq!(buffers.index_bytes().len(), 6 * 4);
        assert_eq!(&buffers.index_bytes()[12..16], &0u32.to_ne_bytes());
    }

    #[test]
    fn unreferenced_positions_still_get_a_vertex() {
        let buffers = buffers("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 9 9 9\nf 1 2 3\n");
        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.vertices[3].normal, [0.0; 3]);
    }

    #[test]
    fn draw_count_saturates_instead_of_wrapping() {
        assert_eq!(draw_count(6), 6);
        assert_eq!(draw_count(u32::MAX as usize), u32::MAX);
        assert_eq!(draw_count(usize::MAX), u32::MAX);
    }

    #[test]
    fn empty_mesh_gives_empty_buffers() {
        let buffers = MeshBuffers::from(&Mesh::default());
        assert!(buffers.is_empty());
        assert_eq!(buffers, MeshBuffers::empty());
        assert!(buffers.vertex_bytes().is_empty());
    }
}
