//! Index bounds and size validation

use crate::error::{MtxError, Result};
use crate::format::Size;

use super::parsing::Triplet;

/// Number of elements of a dense `rows x cols` matrix, `None` on overflow
pub const fn checked_element_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

/// Validate that a 0-based entry lies inside the declared matrix
pub fn validate_entry_bounds(entry: &Triplet, size: &Size, line_no: usize, line: &str) -> Result<()> {
    if entry.row >= size.rows {
        return Err(MtxError::triplet(line_no, line, "row index out of bounds"));
    }
    if entry.col >= size.cols {
        return Err(MtxError::triplet(line_no, line, "column index out of bounds"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_element_count() {
        assert_eq!(checked_element_count(4, 3), Some(12));
        assert_eq!(checked_element_count(usize::MAX, 2), None);
    }

    #[test]
    fn test_validate_entry_bounds() {
        let size = Size {
            rows: 5,
            cols: 4,
            declared_lines: 1,
        };
        let inside = Triplet {
            row: 4,
            col: 3,
            value: 1.0,
        };
        assert_eq!(validate_entry_bounds(&inside, &size, 3, "5 4 1.0"), Ok(()));

        let below = Triplet { row: 5, ..inside };
        assert!(matches!(
            validate_entry_bounds(&below, &size, 3, "6 4 1.0"),
            Err(MtxError::Triplet { line: 3, .. })
        ));

        let right = Triplet { col: 4, ..inside };
        assert!(validate_entry_bounds(&right, &size, 3, "5 5 1.0").is_err());
    }
}
