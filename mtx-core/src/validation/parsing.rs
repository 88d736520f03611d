//! Line grammar for the size line and body lines
//!
//! Pure functions over a single line of text. Line numbers are 1-based and
//! only used to build error values.

use alloc::vec::Vec;

use crate::error::{MtxError, Result};
use crate::format::{Size, StorageFormat};

/// One coordinate entry with 0-based indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Parse the size line of a matrix with the given storage format
///
/// The line is trimmed and split on single spaces. Coordinate bodies need
/// exactly `rows cols entries`; array bodies need at least `rows cols` and the
/// entry count is `rows * cols`.
pub fn parse_size_line(line: &str, format: StorageFormat) -> Result<Size> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split(' ').collect();

    let required = match format {
        StorageFormat::Coordinate => 3,
        StorageFormat::Array => 2,
    };
    if tokens.len() < required {
        let reason = match format {
            StorageFormat::Coordinate => "expected three values: rows, columns, entries",
            StorageFormat::Array => "expected at least two values: rows, columns",
        };
        return Err(MtxError::dimension(trimmed, tokens.len(), reason));
    }
    if format == StorageFormat::Coordinate && tokens.len() > required {
        return Err(MtxError::dimension(
            tokens[required],
            required,
            "unexpected field after entry count",
        ));
    }

    let mut values = [0usize; 3];
    for (position, token) in tokens.iter().enumerate() {
        let value = parse_dimension(token, position)?;
        if let Some(slot) = values.get_mut(position) {
            *slot = value;
        }
    }

    let [rows, cols, entries] = values;
    if rows == 0 {
        return Err(MtxError::dimension(tokens[0], 0, "matrix has no rows"));
    }
    if cols == 0 {
        return Err(MtxError::dimension(tokens[1], 1, "matrix has no columns"));
    }
    if rows.checked_add(1).is_none() {
        return Err(MtxError::dimension(tokens[0], 0, "row count overflows the row pointer"));
    }

    let declared_lines = match format {
        StorageFormat::Coordinate => entries,
        StorageFormat::Array => super::bounds::checked_element_count(rows, cols)
            .ok_or_else(|| MtxError::dimension(trimmed, 0, "rows * cols overflows"))?,
    };

    Ok(Size {
        rows,
        cols,
        declared_lines,
    })
}

fn parse_dimension(token: &str, position: usize) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| MtxError::dimension(token, position, "not a non-negative integer"))
}

/// Parse a coordinate body line `row col value`
///
/// Fields are separated by runs of whitespace. Indices are converted from the
/// file's 1-based convention; a zero index or a non-finite value is rejected.
pub fn parse_triplet(line: &str, line_no: usize) -> Result<Triplet> {
    let mut fields = line.split_whitespace();
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(MtxError::triplet(line_no, line, "expected three fields"));
    };

    let row = parse_index(row, line_no, line)?;
    let col = parse_index(col, line_no, line)?;
    let value = value
        .parse::<f64>()
        .map_err(|_| MtxError::triplet(line_no, line, "value is not a real number"))?;
    if !value.is_finite() {
        return Err(MtxError::triplet(line_no, line, "value is not finite"));
    }

    Ok(Triplet { row, col, value })
}

fn parse_index(field: &str, line_no: usize, line: &str) -> Result<usize> {
    let index = field
        .parse::<usize>()
        .map_err(|_| MtxError::triplet(line_no, line, "index is not an integer"))?;
    index
        .checked_sub(1)
        .ok_or_else(|| MtxError::triplet(line_no, line, "indices are one-based"))
}

/// Parse an array body line holding exactly one finite real value
pub fn parse_array_value(line: &str, line_no: usize) -> Result<f64> {
    let invalid = || MtxError::Value {
        line: line_no,
        content: line.into(),
    };

    let mut fields = line.split_whitespace();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        return Err(invalid());
    };

    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}
