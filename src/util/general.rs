//! General-purpose utility functions.

/// Maps a value from the provided input range to the provided output range.
#[inline]
pub fn map(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> f64 {
    scale(normalize(value, in_min, in_max), out_min, out_max)
}

/// Scales a value to a provided range, assuming it is normalised.
///
/// Like `map()`, but with no input range.
#[inline]
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    value.mul_add(max - min, min)
}

/// Normalizes a value from a provided range.
///
/// Like `map()`, but with the output range set to `0.0 - 1.0`.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Returns whether the absolute value of `value` is less than the provided
/// `tolerance` value. Useful for checking approximate equality.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

/// Converts a sample to a normalised `f32` in `[-1.0, 1.0)`.
#[inline]
pub fn i16_to_f32(sample: i16) -> f32 {
    f32::from(sample) / 32768.0
}

/// Truncates towards negative infinity and saturates to the `i16` range.
/// NaN maps to `0`.
#[inline]
pub fn floor_to_i16(value: f64) -> i16 {
    // `as` saturates on overflow and maps NaN to zero
    value.floor() as i16
}

/// Splits a `0xRRGGBBAA` colour into its components.
pub const fn hex_rgba(code: u32) -> [u8; 4] {
    code.to_be_bytes()
}
