/// One corner of a face: indices into the position, texture-coordinate and
/// normal pools, already converted to 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    pub position: u32,
    pub tex_coord: Option<u32>,
    pub normal: Option<u32>,
}

/// Convert a 1-based index field to 0-based.
fn parse_index(field: &str) -> Result<u32, String> {
    let index: u32 = field
        .parse()
        .map_err(|_| format!("invalid index '{field}'"))?;
    index
        .checked_sub(1)
        .ok_or_else(|| "index 0 is invalid, indices start at 1".to_string())
}

/// Empty fields (as in `v//n`) are absent rather than index 0.
fn parse_optional_index(field: Option<&str>) -> Result<Option<u32>, String> {
    match field {
        None | Some("") => Ok(None),
        Some(field) => parse_index(field).map(Some),
    }
}

/// Parse a single corner in one of the shapes `v`, `v/t`, `v//n`, `v/t/n`.
pub fn parse_vertex_ref(token: &str) -> Result<VertexRef, String> {
    let mut fields = token.split('/');

    let position = match fields.next() {
        Some(field) if !field.is_empty() => parse_index(field)?,
        _ => return Err(format!("vertex reference '{token}' has no position index")),
    };
    let tex_coord = parse_optional_index(fields.next())?;
    let normal = parse_optional_index(fields.next())?;

    if fields.next().is_some() {
        return Err(format!("vertex reference '{token}' has too many fields"));
    }

    Ok(VertexRef {
        position,
        tex_coord,
        normal,
    })
}

/// Parse every corner of a face payload. A face needs at least three corners.
pub fn parse_face(payload: &str) -> Result<Vec<VertexRef>, String> {
    let corners = payload
        .split_whitespace()
        .map(parse_vertex_ref)
        .collect::<Result<Vec<_>, _>>()?;

    if corners.len() < 3 {
        return Err(format!(
            "a face needs at least 3 vertices, found {}",
            corners.len()
        ));
    }

    Ok(corners)
}

/// Fan-triangulate a polygon around its first corner.
///
/// Yields `(v0, vi, vi+1)` for `i` in `1..n-1`: one triangle for a triangle,
/// `(v0,v1,v2), (v0,v2,v3)` for a quad, `n - 2` triangles in general. The
/// result is only correct for convex, planar polygons.
pub fn fan(corners: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    let apex = corners.first().copied();
    corners
        .windows(2)
        .skip(1)
        .filter_map(move |edge| apex.map(|apex| [apex, edge[0], edge[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(corners: &[VertexRef]) -> Vec<u32> {
        corners.iter().map(|c| c.position).collect()
    }

    #[test]
    fn parses_bare_position_index() {
        let corner = parse_vertex_ref("7").unwrap();
        assert_eq!(
            corner,
            VertexRef {
                position: 6,
                tex_coord: None,
                normal: None
            }
        );
    }

    #[test]
    fn parses_full_triples_as_zero_based() {
        let corners = parse_face("1/1/1 2/2/2 3/3/3").unwrap();
        assert_eq!(positions(&corners), vec![0, 1, 2]);
        assert_eq!(corners[2].tex_coord, Some(2));
        assert_eq!(corners[2].normal, Some(2));
    }

    #[test]
    fn omitted_texture_is_absent_not_zero() {
        let corners = parse_face("1//1 2//2 3//3").unwrap();
        for (i, corner) in corners.iter().enumerate() {
            assert_eq!(corner.tex_coord, None);
            assert_eq!(corner.normal, Some(i as u32));
        }
    }

    #[test]
    fn parses_position_and_texture_pairs() {
        let corner = parse_vertex_ref("4/9").unwrap();
        assert_eq!(corner.position, 3);
        assert_eq!(corner.tex_coord, Some(8));
        assert_eq!(corner.normal, None);
    }

    #[test]
    fn rejects_missing_or_bad_position_index() {
        assert!(parse_vertex_ref("/1/1").is_err());
        assert!(parse_vertex_ref("a/1/1").is_err());
        assert!(parse_vertex_ref("0").is_err());
        assert!(parse_vertex_ref("-1").is_err());
        assert!(parse_vertex_ref("1/2/3/4").is_err());
    }

    #[test]
    fn rejects_faces_with_fewer_than_three_corners() {
        assert!(parse_face("").is_err());
        assert!(parse_face("1 2").is_err());
    }

    #[test]
    fn triangle_is_emitted_unchanged() {
        let triangles: Vec<_> = fan(&[4, 9, 2]).collect();
        assert_eq!(triangles, vec![[4, 9, 2]]);
    }

    #[test]
    fn quad_splits_along_first_diagonal() {
        let triangles: Vec<_> = fan(&[0, 1, 2, 3]).collect();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn ngon_fans_from_first_corner() {
        let corners: Vec<u32> = (10..17).collect();
        let triangles: Vec<_> = fan(&corners).collect();

        assert_eq!(triangles.len(), corners.len() - 2);
        for (i, triangle) in triangles.iter().enumerate() {
            assert_eq!(*triangle, [10, corners[i + 1], corners[i + 2]]);
        }
    }

    #[test]
    fn too_few_corners_yield_nothing() {
        assert_eq!(fan(&[]).count(), 0);
        assert_eq!(fan(&[1, 2]).count(), 0);
    }
}
