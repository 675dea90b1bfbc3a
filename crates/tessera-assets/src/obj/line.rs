use std::fmt;

/// The kind of record a line holds, decided by its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `v x y z [w]`
    Position,
    /// `vt u v [w]`
    TexCoord,
    /// `vn x y z`
    RawNormal,
    /// `f a b c ...`
    Face,
    /// Comments, blank lines, and directives this loader does not use.
    Ignored,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::RawNormal => "normal",
            Self::Face => "face",
            Self::Ignored => "ignored",
        };
        f.write_str(name)
    }
}

const PREFIXES: [(&str, RecordKind); 4] = [
    ("v ", RecordKind::Position),
    ("vt ", RecordKind::TexCoord),
    ("vn ", RecordKind::RawNormal),
    ("f ", RecordKind::Face),
];

fn record_prefix(line: &[u8]) -> Option<(RecordKind, usize)> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix.as_bytes()))
        .map(|&(prefix, kind)| (kind, prefix.len()))
}

/// Split a line into its record kind and the payload after the prefix.
///
/// The prefix must be followed by a single space. Anything else, including
/// lines shorter than every prefix, is `Ignored` with an empty payload.
pub fn classify(line: &str) -> (RecordKind, &str) {
    match record_prefix(line.as_bytes()) {
        Some((kind, len)) => (kind, &line[len..]),
        None => (RecordKind::Ignored, ""),
    }
}

/// Byte-level `classify` for raw input. Only the prefix is inspected, so
/// ignored lines may hold any bytes.
pub fn classify_bytes(line: &[u8]) -> (RecordKind, &[u8]) {
    match record_prefix(line) {
        Some((kind, len)) => (kind, &line[len..]),
        None => (RecordKind::Ignored, &[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_record_prefix() {
        assert_eq!(classify("v 1 2 3"), (RecordKind::Position, "1 2 3"));
        assert_eq!(classify("vt 0.5 0.5"), (RecordKind::TexCoord, "0.5 0.5"));
        assert_eq!(classify("vn 0 0 1"), (RecordKind::RawNormal, "0 0 1"));
        assert_eq!(classify("f 1 2 3"), (RecordKind::Face, "1 2 3"));
    }

    #[test]
    fn other_directives_are_ignored() {
        for line in [
            "# comment",
            "",
            "o Suzanne",
            "g group",
            "s off",
            "usemtl Material",
            "mtllib monkey.mtl",
            "vp 0.1 0.2",
            "fo 1 2 3",
        ] {
            assert_eq!(classify(line).0, RecordKind::Ignored, "line {line:?}");
        }
    }

    #[test]
    fn short_lines_are_ignored() {
        for line in ["v", "f", "vt", "vn", " "] {
            assert_eq!(classify(line), (RecordKind::Ignored, ""), "line {line:?}");
        }
    }

    #[test]
    fn prefix_requires_a_space() {
        assert_eq!(classify("v\t1 2 3").0, RecordKind::Ignored);
        assert_eq!(classify(" v 1 2 3").0, RecordKind::Ignored);
    }

    #[test]
    fn raw_bytes_classify_like_text() {
        assert_eq!(classify_bytes(b"vn 0 0 1"), (RecordKind::RawNormal, &b"0 0 1"[..]));
        assert_eq!(classify_bytes(b"f 1 2 3"), (RecordKind::Face, &b"1 2 3"[..]));
        assert_eq!(classify_bytes(b"# Cr\xe9\xe9 par Exporter"), (RecordKind::Ignored, &b""[..]));
        assert_eq!(classify_bytes(b"v \xff"), (RecordKind::Position, &b"\xff"[..]));
    }
}
