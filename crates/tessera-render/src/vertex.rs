//! Vertex types for mesh upload

use bytemuck::{Pod, Zeroable};

/// Attribute locations the external shaders bind to.
pub const POSITION_LOCATION: u32 = 0;
pub const TEX_COORD_LOCATION: u32 = 1;
pub const NORMAL_LOCATION: u32 = 2;

/// Component type and count of one vertex attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeFormat {
    Float32x2,
    Float32x3,
}

impl AttributeFormat {
    /// Number of f32 components
    pub fn components(&self) -> u32 {
        match self {
            Self::Float32x2 => 2,
            Self::Float32x3 => 3,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u32 {
        self.components() * std::mem::size_of::<f32>() as u32
    }
}

/// One attribute inside a vertex buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub location: u32,
    pub format: AttributeFormat,
    pub offset: u32,
}

/// Layout of one tightly packed vertex buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: u32,
    pub attributes: Vec<VertexAttribute>,
}

/// Interleaved position + normal vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    /// Buffer layout for `MeshVertex`
    pub fn layout() -> VertexLayout {
        VertexLayout {
            stride: std::mem::size_of::<Self>() as u32,
            attributes: vec![
                VertexAttribute {
                    name: "position",
                    location: POSITION_LOCATION,
                    format: AttributeFormat::Float32x3,
                    offset: 0,
                },
                VertexAttribute {
                    name: "normal",
                    location: NORMAL_LOCATION,
                    format: AttributeFormat::Float32x3,
                    offset: 12,
                },
            ],
        }
    }
}

/// Layout of the separate texture-coordinate stream
pub fn tex_coord_layout() -> VertexLayout {
    VertexLayout {
        stride: AttributeFormat::Float32x2.size(),
        attributes: vec![VertexAttribute {
            name: "tex_coord",
            location: TEX_COORD_LOCATION,
            format: AttributeFormat::Float32x2,
            offset: 0,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_vertex_is_tightly_packed() {
        let layout = MeshVertex::layout();
        assert_eq!(layout.stride, 24);

        let normal = layout
            .attributes
            .iter()
            .find(|a| a.name == "normal")
            .unwrap();
        assert_eq!(normal.offset, std::mem::offset_of!(MeshVertex, normal) as u32);
        assert_eq!(normal.format.size(), 12);
    }

    #[test]
    fn tex_coord_stream_uses_its_own_location() {
        let layout = tex_coord_layout();
        assert_eq!(layout.stride, 8);
        assert_eq!(layout.attributes[0].location, TEX_COORD_LOCATION);
    }
}
