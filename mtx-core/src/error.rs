//! Error types for MatrixMarket decoding and encoding

use alloc::string::String;

use crate::format::{ElementType, Symmetry};

/// Section of the stream that ended before the grammar was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The `<rows> <cols> [<entries>]` line
    SizeLine,
    /// The value lines of an array body
    ArrayBody,
    /// The entry lines of a coordinate body, when the count is enforced
    CoordinateBody,
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Section::SizeLine => write!(f, "size line"),
            Section::ArrayBody => write!(f, "array body"),
            Section::CoordinateBody => write!(f, "coordinate body"),
        }
    }
}

/// Grammar elements that are recognized but have no decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// Only `real` bodies are decoded
    ElementType(ElementType),
    /// Array bodies are only decoded for `general` symmetry
    ArraySymmetry(Symmetry),
}

impl core::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Unsupported::ElementType(ty) => write!(f, "element type '{ty}' is not supported"),
            Unsupported::ArraySymmetry(sym) => {
                write!(f, "array storage with '{sym}' symmetry is not supported")
            }
        }
    }
}

/// Errors that can occur while reading or writing MatrixMarket text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtxError {
    /// Banner line missing, miscounted, or holding an unknown token
    MalformedHeader {
        /// The offending token (empty when the stream had no first line)
        token: String,
        reason: &'static str,
    },
    /// Size line with missing, extra, non-integer or zero fields
    Dimension {
        token: String,
        /// 0-based token position on the size line
        position: usize,
        reason: &'static str,
    },
    /// Coordinate body line that is not a valid `row col value` triplet
    Triplet {
        /// 1-based line number in the stream
        line: usize,
        content: String,
        reason: &'static str,
    },
    /// Array body line that is not a single real value
    Value { line: usize, content: String },
    /// Stream ended before the declared content was read
    UnexpectedEof {
        section: Section,
        expected: usize,
        found: usize,
    },
    /// Recognized but unimplemented grammar element
    UnsupportedFeature(Unsupported),
    /// Repeated entries at one 1-based position summed to a non-finite value
    NonFiniteSum { row: usize, col: usize },
}

impl core::fmt::Display for MtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MtxError::MalformedHeader { token, reason } => {
                write!(f, "Malformed header at token {token:?}: {reason}")
            }
            MtxError::Dimension {
                token,
                position,
                reason,
            } => write!(
                f,
                "Invalid size line token {token:?} at position {position}: {reason}"
            ),
            MtxError::Triplet {
                line,
                content,
                reason,
            } => write!(f, "Invalid entry on line {line} ({content:?}): {reason}"),
            MtxError::Value { line, content } => {
                write!(f, "Invalid value on line {line}: {content:?}")
            }
            MtxError::UnexpectedEof {
                section,
                expected,
                found,
            } => write!(
                f,
                "Unexpected end of stream in {section}: expected {expected}, found {found}"
            ),
            MtxError::UnsupportedFeature(feature) => write!(f, "Unsupported feature: {feature}"),
            MtxError::NonFiniteSum { row, col } => {
                write!(f, "Duplicate entries at ({row}, {col}) sum to a non-finite value")
            }
        }
    }
}

impl core::error::Error for MtxError {}

impl MtxError {
    pub(crate) fn header(token: &str, reason: &'static str) -> Self {
        MtxError::MalformedHeader {
            token: token.into(),
            reason,
        }
    }

    pub(crate) fn dimension(token: &str, position: usize, reason: &'static str) -> Self {
        MtxError::Dimension {
            token: token.into(),
            position,
            reason,
        }
    }

    pub(crate) fn triplet(line: usize, content: &str, reason: &'static str) -> Self {
        MtxError::Triplet {
            line,
            content: content.into(),
            reason,
        }
    }
}

/// Result type for MatrixMarket grammar operations
pub type Result<T> = core::result::Result<T, MtxError>;
