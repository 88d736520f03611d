//! Line grammar and bounds validation
//!
//! This module contains pure parsing and validation functions with no I/O
//! dependencies. Every function works on one line of text.

pub mod bounds;
pub mod parsing;

pub use bounds::{checked_element_count, validate_entry_bounds};
pub use parsing::{parse_array_value, parse_size_line, parse_triplet, Triplet};
