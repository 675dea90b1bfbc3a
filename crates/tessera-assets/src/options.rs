//! Loader policies
//!
//! Every policy defaults to the strictest behavior that still matches how
//! meshes were historically shaded (last triangle wins).

use serde::{Deserialize, Serialize};

/// How per-position normals are derived from the triangles touching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMode {
    /// Each triangle overwrites the normals of its three positions.
    /// Shared positions keep only the last triangle's normal.
    #[default]
    LastWriteWins,
    /// Sum the unit corner normals of every adjacent triangle, then normalize.
    Accumulate,
}

/// What to do with a `v`/`vt`/`vn` line that lacks its required numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedAttributes {
    /// Abort the whole load.
    #[default]
    Fail,
    /// Drop the line; nothing is appended for it.
    Skip,
}

/// What to do with a face that cannot be triangulated safely: too few
/// corners, a bad index field, or an index past the declared data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedFaces {
    /// Abort the whole load.
    #[default]
    Fail,
    /// Drop the face; none of its triangles are emitted.
    Skip,
}

/// What to do with a zero-area triangle whose corner normals are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateTriangles {
    /// Keep the triangle in the index stream but leave its corners' normal
    /// entries untouched (zero unless another triangle set them).
    #[default]
    SkipNormals,
    /// Abort the whole load.
    Fail,
}

/// Options controlling a single OBJ load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub normal_mode: NormalMode,
    pub malformed_attributes: MalformedAttributes,
    pub malformed_faces: MalformedFaces,
    pub degenerate_triangles: DegenerateTriangles,
}

impl LoadOptions {
    /// Skip malformed records instead of failing, for salvaging damaged files.
    pub fn lenient() -> Self {
        Self {
            malformed_attributes: MalformedAttributes::Skip,
            malformed_faces: MalformedFaces::Skip,
            ..Default::default()
        }
    }

    pub fn with_normal_mode(mut self, mode: NormalMode) -> Self {
        self.normal_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: LoadOptions = toml::from_str("normal_mode = \"accumulate\"").unwrap();
        assert_eq!(options.normal_mode, NormalMode::Accumulate);
        assert_eq!(options.malformed_attributes, MalformedAttributes::Fail);
        assert_eq!(options.degenerate_triangles, DegenerateTriangles::SkipNormals);
    }

    #[test]
    fn lenient_skips_everything_malformed() {
        let options = LoadOptions::lenient();
        assert_eq!(options.malformed_attributes, MalformedAttributes::Skip);
        assert_eq!(options.malformed_faces, MalformedFaces::Skip);
        assert_eq!(options.normal_mode, NormalMode::LastWriteWins);
    }
}
