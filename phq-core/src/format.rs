//! Number rendering shared by every text format.
//!
//! All of `print`, `json`, `xml` and `yaml` render numbers through [`number`], so the digit count
//! is identical across formats:
//!
//! - an exact zero renders as `0`;
//! - magnitudes in `[0.001, 10)` use fixed notation with [`PRECISION`] fractional digits, one digit
//!   fewer for `[10, 100)` and two fewer for `[100, 1000)`;
//! - everything else uses scientific notation with [`PRECISION`] fractional digits and a signed, at
//!   least two-digit exponent (`1.234000000000000e+05`);
//! - non-finite values render as `NaN`, `inf` and `-inf`.
//!
//! ```rust
//! use phq_core::format::number;
//!
//! assert_eq!(number(0.0), "0");
//! assert_eq!(number(1.11), "1.110000000000000");
//! assert_eq!(number(-250.0), "-250.0000000000000");
//! assert_eq!(number(123456.0), "1.234560000000000e+05");
//! ```

use crate::number::Number;

/// Fractional digits used for magnitudes below 10 and for scientific notation.
pub const PRECISION: usize = 15;

/// Lower bound (inclusive) of the fixed-notation range.
pub const FIXED_LOWER: f64 = 0.001;

/// Upper bound (exclusive) of the fixed-notation range.
pub const FIXED_UPPER: f64 = 1000.0;

/// Renders `value` for text output.
pub fn number<N: Number>(value: N) -> String {
    let value = value.as_f64();
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if (FIXED_LOWER..FIXED_UPPER).contains(&magnitude) {
        let digits = if magnitude < 10.0 {
            PRECISION
        } else if magnitude < 100.0 {
            PRECISION - 1
        } else {
            PRECISION - 2
        };
        format!("{:.*}", digits, value)
    } else {
        scientific(value)
    }
}

/// Scientific notation with a C-style exponent (`e+05`, `e-12`).
fn scientific(value: f64) -> String {
    let rendered = format!("{:.*e}", PRECISION, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rendered,
    }
}
