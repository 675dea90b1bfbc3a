use std::path::PathBuf;

use crate::obj::RecordKind;

/// Errors raised while parsing OBJ text. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("line {line}: malformed {kind} record: {reason}")]
    MalformedAttribute {
        line: usize,
        kind: RecordKind,
        reason: String,
    },

    #[error("line {line}: malformed face record: {reason}")]
    MalformedFace { line: usize, reason: String },

    /// `index` is the 1-based value as written in the source.
    #[error("line {line}: {kind} index {index} is out of range ({len} declared so far)")]
    DanglingIndex {
        line: usize,
        kind: RecordKind,
        index: u32,
        len: usize,
    },

    #[error("line {line}: degenerate triangle {triangle:?} has no defined normal")]
    DegenerateTriangle { line: usize, triangle: [u32; 3] },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ObjError {
    /// The 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedAttribute { line, .. }
            | Self::MalformedFace { line, .. }
            | Self::DanglingIndex { line, .. }
            | Self::DegenerateTriangle { line, .. }
            | Self::Read { line, .. } => *line,
        }
    }
}

/// Errors that can occur during asset loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error loading '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to load OBJ file '{0}': {1}")]
    ObjLoadFailed(PathBuf, #[source] ObjError),

    #[error("no mesh is loaded for handle {0}")]
    UnknownHandle(u64),
}
