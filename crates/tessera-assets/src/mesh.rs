use glam::{Vec2, Vec3};
use serde::Serialize;

/// A loaded mesh ready for upload (renderer-agnostic).
///
/// `normals` share the index space of `positions`; `indices` is a triangle
/// list over position indices. `tex_coords` keep the index space they were
/// declared in and are not reconciled with the triangle corners.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Take ownership of the pools produced by a load.
    ///
    /// The normal table only reaches the highest referenced position; it is
    /// zero-padded so both per-position streams have the same length.
    pub(crate) fn assemble(
        positions: Vec<Vec3>,
        mut normals: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(normals.len() <= positions.len());

        normals.resize(positions.len(), Vec3::ZERO);

        Self {
            positions,
            normals,
            tex_coords,
            indices,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Shading normals, one per position.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Triangle list; every three entries form one triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as position-index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// True when the mesh has neither positions nor triangles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Split into `(positions, normals, tex_coords, indices)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec2>, Vec<u32>) {
        (self.positions, self.normals, self.tex_coords, self.indices)
    }
}
