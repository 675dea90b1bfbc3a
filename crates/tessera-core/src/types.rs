//! Core types shared by the loader, the buffers, and the viewer

use serde::{Deserialize, Serialize};

/// Which material the external renderer should draw a mesh with.
///
/// The mesh pipeline never inspects this; it is chosen by the caller and
/// carried alongside the buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Diffuse + specular lighting from a point light
    #[default]
    Lit,
    /// Synthesized normals mapped to colors
    Normals,
    /// Flat light-source color, no lighting
    Unlit,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 3] = [Self::Lit, Self::Normals, Self::Unlit];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lit => "Lit",
            Self::Normals => "Normals",
            Self::Unlit => "Unlit",
        }
    }

    /// Cycle to the next mode, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Lit => Self::Normals,
            Self::Normals => Self::Unlit,
            Self::Unlit => Self::Lit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shading_mode_cycles_through_all() {
        let mut mode = ShadingMode::default();
        for expected in ShadingMode::ALL {
            assert_eq!(mode, expected);
            mode = mode.next();
        }
        assert_eq!(mode, ShadingMode::Lit);
    }
}
