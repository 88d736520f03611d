//! Literal tokens of the MatrixMarket grammar

/// First token of every banner line
pub const BANNER: &str = "%%MatrixMarket";

/// The only object kind this crate decodes
pub const OBJECT_MATRIX: &str = "matrix";

/// Number of space-separated tokens on a banner line
pub const BANNER_TOKENS: usize = 5;

/// Leading byte of a comment line
pub const COMMENT_BYTE: u8 = b'%';

/// Bytes that mark a line as comment or blank when they start it
pub const SKIPPABLE_BYTES: [u8; 4] = [COMMENT_BYTE, b'\n', b' ', b'\t'];

/// Smallest positive double (subnormal). Entries below it in magnitude are
/// explicit zeros.
pub const SMALLEST_NONZERO: f64 = 4.940_656_458_412_465_4e-324;

/// Storage format tokens
pub mod format {
    pub const ARRAY: &str = "array";
    pub const COORDINATE: &str = "coordinate";
}

/// Element type tokens
pub mod element {
    pub const REAL: &str = "real";
    pub const COMPLEX: &str = "complex";
    pub const INTEGER: &str = "integer";
    pub const PATTERN: &str = "pattern";
}

/// Symmetry tokens
pub mod symmetry {
    pub const GENERAL: &str = "general";
    pub const SYMMETRIC: &str = "symmetric";
    pub const SKEW_SYMMETRIC: &str = "skew-symmetric";
    pub const HERMITIAN: &str = "hermitian";
}
