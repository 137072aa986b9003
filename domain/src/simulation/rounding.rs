//! Output rounding policy
//!
//! Results are reported with the rounding rules of the browser-side simulator
//! that consumes them: `Math.round` (ties toward positive infinity) for whole
//! numbers and `toFixed` for decimal strings.

/// Round to the nearest integer, ties toward positive infinity.
///
/// Differs from [`f64::round`] on negative ties: `-2.5` becomes `-2`. The
/// fraction is taken exactly, so values just below a tie round down.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Format with a fixed number of decimals. Negative zero prints as zero.
///
/// Exact halfway values round away from zero (`2.25` gives `"2.3"`); every
/// other value rounds to the nearest decimal of its exact binary value.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let value = if is_decimal_tie(value, digits) {
        let scale = 10f64.powi(digits as i32);
        (value.abs() * scale).ceil().copysign(value) / scale
    } else {
        value
    };
    format!("{value:.digits$}")
}

/// Whether `value` lies exactly halfway between two numbers of `digits`
/// decimals.
///
/// A binary float can only hold such a midpoint as `j / 2^(digits + 1)` with
/// `j` odd, and scaling by a power of two is exact.
fn is_decimal_tie(value: f64, digits: usize) -> bool {
    let scaled = value * 2f64.powi(digits as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled.abs() % 2.0 == 1.0
}
