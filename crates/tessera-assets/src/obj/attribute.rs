use glam::{Vec2, Vec3};

/// Read the first `N` whitespace-separated numbers of a payload.
///
/// Trailing fields beyond `N` (such as a homogeneous `w`) are ignored.
/// Missing, unparsable, or non-finite fields yield a reason string and no
/// partial result.
pub fn parse_components<const N: usize>(payload: &str) -> Result<[f32; N], String> {
    let mut values = [0.0f32; N];
    let mut fields = payload.split_whitespace();

    for (i, slot) in values.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| format!("expected {N} numbers, found {i}"))?;
        let value: f32 = field
            .parse()
            .map_err(|_| format!("invalid number '{field}'"))?;
        if !value.is_finite() {
            return Err(format!("non-finite value '{field}'"));
        }
        *slot = value;
    }

    Ok(values)
}

pub fn parse_vec3(payload: &str) -> Result<Vec3, String> {
    parse_components::<3>(payload).map(Vec3::from_array)
}

pub fn parse_vec2(payload: &str) -> Result<Vec2, String> {
    parse_components::<2>(payload).map(Vec2::from_array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_three_components() {
        assert_eq!(parse_vec3("1 -2.5 3e2").unwrap(), Vec3::new(1.0, -2.5, 300.0));
    }

    #[test]
    fn tolerates_extra_whitespace_and_trailing_fields() {
        assert_eq!(parse_vec3("  0.5\t1   2  1.0").unwrap(), Vec3::new(0.5, 1.0, 2.0));
        assert_eq!(parse_vec2("0.25 0.75 0.0").unwrap(), Vec2::new(0.25, 0.75));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = parse_vec3("1 2").unwrap_err();
        assert!(err.contains("expected 3 numbers, found 2"), "{err}");
        assert!(parse_vec2("").is_err());
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let err = parse_vec3("1 two 3").unwrap_err();
        assert!(err.contains("'two'"), "{err}");
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        assert!(parse_vec3("1 nan 3").is_err());
        assert!(parse_vec2("inf 0").is_err());
    }
}
