//! Text rendering of real values
//!
//! Values are written with the shortest decimal text that parses back to the
//! same `f64`. Plain notation is used for magnitudes in `[1e-4, 1e21)` and
//! scientific notation outside it, so `1e300` is not expanded to 301 digits.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

const PLAIN_MIN: f64 = 1e-4;
const PLAIN_MAX: f64 = 1e21;

/// Write `value` in its minimal text form
pub fn write_real<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        write!(out, "{value}")
    } else {
        write!(out, "{value:e}")
    }
}

/// Display adapter rendering a value in its minimal text form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_real(f, self.0)
    }
}

/// Render `value` in its minimal text form
pub fn format_real(value: f64) -> String {
    Real(value).to_string()
}
