//! Abstract interfaces shared by the assembled matrix kinds

pub mod matrix;

pub use matrix::MatrixAccess;
