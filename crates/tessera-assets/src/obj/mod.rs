//! Wavefront OBJ geometry pipeline
//!
//! Lines are classified by prefix, attribute records fill the position,
//! texture-coordinate and normal pools, and every face is fan-triangulated
//! with its corner normals synthesized before the next line is read. Only
//! `v`, `vt`, `vn` and `f` records are understood; everything else is
//! skipped.
//!
//! Known limitations:
//! - Fan triangulation is only correct for convex, planar polygons.
//! - Texture-coordinate indices on face corners are validated and then
//!   dropped. `Mesh::tex_coords` keeps its own index space.
//! - Declared `vn` normals are parsed and counted but never shaded with.
//! - Relative (negative) indices are rejected.

mod attribute;
mod face;
mod line;
mod normals;

use std::io::BufRead;

use glam::{Vec2, Vec3};
use tracing::{debug, warn};

use crate::error::ObjError;
use crate::mesh::Mesh;
use crate::options::{DegenerateTriangles, LoadOptions, MalformedAttributes, MalformedFaces};

pub use attribute::parse_components;
pub use face::{fan, parse_face, parse_vertex_ref, VertexRef};
pub use line::{classify, classify_bytes, RecordKind};
pub use normals::{corner_normals, NormalSynthesizer};

/// Counts gathered while loading, for logging and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub positions: usize,
    pub tex_coords: usize,
    pub raw_normals: usize,
    pub faces: usize,
    pub triangles: usize,
    pub ignored_lines: usize,
    pub skipped_lines: usize,
    pub degenerate_triangles: usize,
}

/// A finished mesh together with what the loader saw along the way.
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub mesh: Mesh,
    pub stats: LoadStats,
}

/// Parse OBJ source text held in memory.
pub fn parse_obj(source: &str, options: &LoadOptions) -> Result<LoadedMesh, ObjError> {
    let mut parser = ObjParser::new(options);
    for (i, line) in source.lines().enumerate() {
        parser.feed(i + 1, line)?;
    }
    Ok(parser.finish())
}

/// Parse OBJ text from a buffered reader, one line at a time.
///
/// Lines are read as raw bytes. Only the payload of a recognized record has
/// to be UTF-8, so comments in any encoding are skipped like other ignored
/// lines.
pub fn read_obj<R: BufRead>(mut reader: R, options: &LoadOptions) -> Result<LoadedMesh, ObjError> {
    let mut parser = ObjParser::new(options);
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ObjError::Read {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        parser.feed_bytes(line_no, trim_line_ending(&buf))?;
    }

    Ok(parser.finish())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Working state for one load. Dropped once the mesh is assembled.
struct ObjParser<'a> {
    options: &'a LoadOptions,
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    raw_normals: Vec<Vec3>,
    indices: Vec<u32>,
    normals: NormalSynthesizer,
    stats: LoadStats,
}

impl<'a> ObjParser<'a> {
    fn new(options: &'a LoadOptions) -> Self {
        Self {
            options,
            positions: Vec::new(),
            tex_coords: Vec::new(),
            raw_normals: Vec::new(),
            indices: Vec::new(),
            normals: NormalSynthesizer::new(options.normal_mode),
            stats: LoadStats::default(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), ObjError> {
        let (kind, payload) = classify(line);
        self.record(line_no, kind, payload)
    }

    fn feed_bytes(&mut self, line_no: usize, line: &[u8]) -> Result<(), ObjError> {
        let (kind, payload) = classify_bytes(line);
        match std::str::from_utf8(payload) {
            Ok(payload) => self.record(line_no, kind, payload),
            Err(e) => {
                self.stats.lines += 1;
                let reason = format!("payload is not valid UTF-8: {}", e);
                match kind {
                    RecordKind::Face => self.reject_face(ObjError::MalformedFace {
                        line: line_no,
                        reason,
                    }),
                    _ => self.reject_attribute(line_no, kind, reason),
                }
            }
        }
    }

    fn record(&mut self, line_no: usize, kind: RecordKind, payload: &str) -> Result<(), ObjError> {
        self.stats.lines += 1;

        let result = match kind {
            RecordKind::Position => attribute::parse_vec3(payload).map(|p| self.positions.push(p)),
            RecordKind::TexCoord => attribute::parse_vec2(payload).map(|t| self.tex_coords.push(t)),
            RecordKind::RawNormal => {
                attribute::parse_vec3(payload).map(|n| self.raw_normals.push(n))
            }
            RecordKind::Face => return self.face(line_no, payload),
            RecordKind::Ignored => {
                self.stats.ignored_lines += 1;
                return Ok(());
            }
        };

        match result {
            Ok(()) => Ok(()),
            Err(reason) => self.reject_attribute(line_no, kind, reason),
        }
    }

    fn reject_attribute(
        &mut self,
        line_no: usize,
        kind: RecordKind,
        reason: String,
    ) -> Result<(), ObjError> {
        match self.options.malformed_attributes {
            MalformedAttributes::Fail => Err(ObjError::MalformedAttribute {
                line: line_no,
                kind,
                reason,
            }),
            MalformedAttributes::Skip => {
                warn!("Skipping malformed {} record on line {}: {}", kind, line_no, reason);
                self.stats.skipped_lines += 1;
                Ok(())
            }
        }
    }

    fn reject_face(&mut self, err: ObjError) -> Result<(), ObjError> {
        match self.options.malformed_faces {
            MalformedFaces::Fail => Err(err),
            MalformedFaces::Skip => {
                warn!("Skipping face: {}", err);
                self.stats.skipped_lines += 1;
                Ok(())
            }
        }
    }

    fn face(&mut self, line_no: usize, payload: &str) -> Result<(), ObjError> {
        let corners = match self.validated_corners(line_no, payload) {
            Ok(corners) => corners,
            Err(err) => return self.reject_face(err),
        };

        self.stats.faces += 1;

        for triangle in fan(&corners) {
            let [a, b, c] = triangle.map(|i| self.positions[i as usize]);
            let normals = corner_normals(a, b, c);

            if normals.iter().any(Option::is_none) {
                self.stats.degenerate_triangles += 1;
                match self.options.degenerate_triangles {
                    DegenerateTriangles::Fail => {
                        return Err(ObjError::DegenerateTriangle {
                            line: line_no,
                            triangle,
                        });
                    }
                    DegenerateTriangles::SkipNormals => {
                        debug!("Degenerate triangle {:?} on line {}", triangle, line_no);
                    }
                }
            }

            self.normals.write(triangle, normals);
            self.indices.extend_from_slice(&triangle);
            self.stats.triangles += 1;
        }

        Ok(())
    }

    /// Parse a face and check every index against the pools declared so far.
    /// Returns the 0-based position index of each corner.
    fn validated_corners(&self, line_no: usize, payload: &str) -> Result<Vec<u32>, ObjError> {
        let corners = parse_face(payload).map_err(|reason| ObjError::MalformedFace {
            line: line_no,
            reason,
        })?;

        for corner in &corners {
            check_index(line_no, RecordKind::Position, Some(corner.position), self.positions.len())?;
            check_index(line_no, RecordKind::TexCoord, corner.tex_coord, self.tex_coords.len())?;
            check_index(line_no, RecordKind::RawNormal, corner.normal, self.raw_normals.len())?;
        }

        Ok(corners.iter().map(|corner| corner.position).collect())
    }

    fn finish(self) -> LoadedMesh {
        let stats = LoadStats {
            positions: self.positions.len(),
            tex_coords: self.tex_coords.len(),
            raw_normals: self.raw_normals.len(),
            ..self.stats
        };

        debug!(
            "OBJ parsed: {} positions, {} tex coords, {} faces -> {} triangles ({} degenerate, {} skipped lines)",
            stats.positions,
            stats.tex_coords,
            stats.faces,
            stats.triangles,
            stats.degenerate_triangles,
            stats.skipped_lines
        );

        let mesh = Mesh::assemble(
            self.positions,
            self.normals.finish(),
            self.tex_coords,
            self.indices,
        );

        LoadedMesh { mesh, stats }
    }
}

fn check_index(
    line_no: usize,
    kind: RecordKind,
    index: Option<u32>,
    len: usize,
) -> Result<(), ObjError> {
    match index {
        Some(index) if index as usize >= len => Err(ObjError::DanglingIndex {
            line: line_no,
            kind,
            index: index + 1,
            len,
        }),
        _ => Ok(()),
    }
}
