//! Fixed-precision rounding shared by the normalizer and cooldown reporting.

/// Round to two decimal places, halves away from zero.
///
/// `f64::round` already rounds half away from zero, so scaling by 100 first
/// gives the two-decimal behaviour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
