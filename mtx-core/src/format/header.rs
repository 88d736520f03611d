//! MatrixMarket banner line
//!
//! The first line of every file: `%%MatrixMarket matrix <format> <type> <symmetry>`.
//! Tokens are matched case-insensitively and decoded into closed enumerations.

use super::constants::{self, BANNER, BANNER_TOKENS, OBJECT_MATRIX};
use crate::error::{MtxError, Result};

/// Storage layout of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StorageFormat {
    /// Dense, every value listed in column-major order
    Array,
    /// Sparse `row col value` triplets
    Coordinate,
}

impl StorageFormat {
    /// Decode a banner token, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case(constants::format::ARRAY) {
            Some(StorageFormat::Array)
        } else if token.eq_ignore_ascii_case(constants::format::COORDINATE) {
            Some(StorageFormat::Coordinate)
        } else {
            None
        }
    }

    /// Canonical lower-case token
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageFormat::Array => constants::format::ARRAY,
            StorageFormat::Coordinate => constants::format::COORDINATE,
        }
    }
}

impl core::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field type of the stored values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ElementType {
    Real,
    Complex,
    Integer,
    Pattern,
}

impl ElementType {
    /// Decode a banner token, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        [
            ElementType::Real,
            ElementType::Complex,
            ElementType::Integer,
            ElementType::Pattern,
        ]
        .into_iter()
        .find(|ty| token.eq_ignore_ascii_case(ty.as_str()))
    }

    /// Canonical lower-case token
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Real => constants::element::REAL,
            ElementType::Complex => constants::element::COMPLEX,
            ElementType::Integer => constants::element::INTEGER,
            ElementType::Pattern => constants::element::PATTERN,
        }
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symmetry structure declared by the banner
///
/// For `Symmetric` and `SkewSymmetric` matrices the file stores only the lower
/// triangle including the diagonal; the reader mirrors the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    /// Recognized, never mirrored
    Hermitian,
}

impl Symmetry {
    /// Decode a banner token, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        [
            Symmetry::General,
            Symmetry::Symmetric,
            Symmetry::SkewSymmetric,
            Symmetry::Hermitian,
        ]
        .into_iter()
        .find(|sym| token.eq_ignore_ascii_case(sym.as_str()))
    }

    /// Canonical lower-case token
    pub const fn as_str(self) -> &'static str {
        match self {
            Symmetry::General => constants::symmetry::GENERAL,
            Symmetry::Symmetric => constants::symmetry::SYMMETRIC,
            Symmetry::SkewSymmetric => constants::symmetry::SKEW_SYMMETRIC,
            Symmetry::Hermitian => constants::symmetry::HERMITIAN,
        }
    }

    /// Mirrored counterpart of an off-diagonal value, if this symmetry has one
    pub fn mirror(self, value: f64) -> Option<f64> {
        match self {
            Symmetry::Symmetric => Some(value),
            Symmetry::SkewSymmetric => Some(-value),
            Symmetry::General | Symmetry::Hermitian => None,
        }
    }
}

impl core::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    pub format: StorageFormat,
    pub element: ElementType,
    pub symmetry: Symmetry,
}

impl Banner {
    /// Banner written for every sparse output
    pub const COORDINATE_REAL_GENERAL: Banner = Banner {
        format: StorageFormat::Coordinate,
        element: ElementType::Real,
        symmetry: Symmetry::General,
    };

    /// Banner written for every dense output
    pub const ARRAY_REAL_GENERAL: Banner = Banner {
        format: StorageFormat::Array,
        element: ElementType::Real,
        symmetry: Symmetry::General,
    };

    /// Parse a banner line
    ///
    /// Trailing whitespace (including the line terminator) is trimmed and the
    /// rest is split on single spaces. An empty line is an empty-header error.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end();
        if line.is_empty() {
            return Err(MtxError::header("", "empty header"));
        }

        let tokens: alloc::vec::Vec<&str> = line.split(' ').collect();
        if tokens.len() != BANNER_TOKENS {
            return Err(MtxError::header(line, "expected 5 header tokens"));
        }

        if !tokens[0].eq_ignore_ascii_case(BANNER) {
            return Err(MtxError::header(tokens[0], "expected '%%MatrixMarket'"));
        }

        if !tokens[1].eq_ignore_ascii_case(OBJECT_MATRIX) {
            return Err(MtxError::header(tokens[1], "unsupported object, expected 'matrix'"));
        }

        let format = StorageFormat::from_token(tokens[2])
            .ok_or_else(|| MtxError::header(tokens[2], "unknown storage format"))?;
        let element = ElementType::from_token(tokens[3])
            .ok_or_else(|| MtxError::header(tokens[3], "unknown element type"))?;
        let symmetry = Symmetry::from_token(tokens[4])
            .ok_or_else(|| MtxError::header(tokens[4], "unknown symmetry"))?;

        Ok(Self {
            format,
            element,
            symmetry,
        })
    }
}

/// Renders the canonical banner line without a terminator
impl core::fmt::Display for Banner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{BANNER} {OBJECT_MATRIX} {} {} {}",
            self.format, self.element, self.symmetry
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_valid_banners() {
        let cases = [
            (
                "%%MatrixMarket matrix coordinate real general",
                StorageFormat::Coordinate,
                ElementType::Real,
                Symmetry::General,
            ),
            (
                "%%MatrixMarket matrix array pattern general",
                StorageFormat::Array,
                ElementType::Pattern,
                Symmetry::General,
            ),
            (
                "%%matrixmarket matrix array pattern general",
                StorageFormat::Array,
                ElementType::Pattern,
                Symmetry::General,
            ),
            (
                "%%MatrixMarket MATRIX Coordinate REAL Skew-Symmetric\r\n",
                StorageFormat::Coordinate,
                ElementType::Real,
                Symmetry::SkewSymmetric,
            ),
            (
                "%%MatrixMarket matrix coordinate integer hermitian\n",
                StorageFormat::Coordinate,
                ElementType::Integer,
                Symmetry::Hermitian,
            ),
        ];

        for (line, format, element, symmetry) in cases {
            let banner = Banner::parse(line).unwrap();
            assert_eq!(banner.format, format, "{line}");
            assert_eq!(banner.element, element, "{line}");
            assert_eq!(banner.symmetry, symmetry, "{line}");
        }
    }

    #[test]
    fn test_parse_faulty_banners() {
        let cases = [
            ("", ""),
            ("%%MatrixMarket", "%%MatrixMarket"),
            (
                "%MatrixMarket matrix coordinate real general",
                "%MatrixMarket",
            ),
            ("%%MatrixMarket m coordinate real general", "m"),
            ("%%MatrixMarket matrix c real general", "c"),
            ("%%MatrixMarket matrix coordinate r general", "r"),
            ("%%MatrixMarket matrix coordinate real g", "g"),
        ];

        for (line, offending) in cases {
            match Banner::parse(line) {
                Err(MtxError::MalformedHeader { token, .. }) => {
                    assert_eq!(token, offending, "{line}")
                }
                other => panic!("expected MalformedHeader for {line:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_double_space_is_a_token_count_error() {
        let err = Banner::parse("%%MatrixMarket  matrix coordinate real general").unwrap_err();
        assert!(matches!(err, MtxError::MalformedHeader { .. }));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(
            Banner::COORDINATE_REAL_GENERAL.to_string(),
            "%%MatrixMarket matrix coordinate real general"
        );
        assert_eq!(
            Banner::ARRAY_REAL_GENERAL.to_string(),
            "%%MatrixMarket matrix array real general"
        );
    }

    #[test]
    fn test_symmetry_mirror() {
        assert_eq!(Symmetry::Symmetric.mirror(2.5), Some(2.5));
        assert_eq!(Symmetry::SkewSymmetric.mirror(2.5), Some(-2.5));
        assert_eq!(Symmetry::General.mirror(2.5), None);
        assert_eq!(Symmetry::Hermitian.mirror(2.5), None);
    }
}
