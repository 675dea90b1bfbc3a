use glam::Vec3;

use crate::options::NormalMode;

/// Unit normal at each corner of the triangle `(a, b, c)`, computed from the
/// two edges leaving that corner in winding order.
///
/// The three results are parallel for a planar triangle but are computed
/// independently. A corner whose edges are collinear or coincident has no
/// defined normal and yields `None`.
pub fn corner_normals(a: Vec3, b: Vec3, c: Vec3) -> [Option<Vec3>; 3] {
    [
        (b - a).cross(c - a).try_normalize(),
        (c - b).cross(a - b).try_normalize(),
        (a - c).cross(b - c).try_normalize(),
    ]
}

/// Table of shading normals indexed by position index.
#[derive(Debug)]
pub struct NormalSynthesizer {
    mode: NormalMode,
    table: Vec<Vec3>,
}

impl NormalSynthesizer {
    pub fn new(mode: NormalMode) -> Self {
        Self {
            mode,
            table: Vec::new(),
        }
    }

    /// Record the corner normals of one triangle.
    ///
    /// The table first grows to cover every index of the triangle, with new
    /// entries zeroed. Corners without a normal leave their entry untouched.
    pub fn write(&mut self, triangle: [u32; 3], normals: [Option<Vec3>; 3]) {
        let needed = triangle.iter().max().map_or(0, |&max| max as usize + 1);
        if self.table.len() < needed {
            self.table.resize(needed, Vec3::ZERO);
        }

        for (index, normal) in triangle.into_iter().zip(normals) {
            let Some(normal) = normal else { continue };
            let entry = &mut self.table[index as usize];
            match self.mode {
                NormalMode::LastWriteWins => *entry = normal,
                NormalMode::Accumulate => *entry += normal,
            }
        }
    }

    /// Hand off the finished table. In accumulate mode every summed entry is
    /// renormalized; sums that cancel out become zero.
    pub fn finish(self) -> Vec<Vec3> {
        match self.mode {
            NormalMode::LastWriteWins => self.table,
            NormalMode::Accumulate => self
                .table
                .into_iter()
                .map(|sum| sum.try_normalize().unwrap_or(Vec3::ZERO))
                .collect(),
        }
    }
}
