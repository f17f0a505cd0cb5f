//! Running accumulator for one coordinate axis.

/// Recover a signed delta from its interleaved unsigned form.
///
/// Values with the low bit set are negative, and hold the bitwise
/// complement of the delta in their remaining bits.
pub fn signed_delta(raw: u64) -> i64 {
    if raw & 1 != 0 {
        (!raw as i64) >> 1
    } else {
        (raw >> 1) as i64
    }
}

/// Decoding state for one coordinate axis.
///
/// Holds the running integer accumulator and fixed-point scale for one of
/// the latitude, longitude, or third-dimension axes. Each encoded value is
/// a delta against the previous coordinate on the same axis, so values
/// must be fed in the order they appear in the stream.
#[derive(Debug)]
pub struct Axis {
    accumulator: i64,
    scale: f64,
}

impl Axis {
    /// Construct an axis scaled to a number of decimal digits.
    ///
    /// Precisions follow the four-bit header fields, `0..=15`.
    pub fn new(precision: u8) -> Self {
        Self {
            accumulator: 0,
            scale: 10u64.pow(u32::from(precision)) as f64,
        }
    }

    /// Advance the axis over one decoded value.
    ///
    /// Returns the coordinate for this axis at the current position.
    pub fn advance(&mut self, raw: u64) -> f64 {
        self.accumulator = self.accumulator.wrapping_add(signed_delta(raw));
        self.accumulator as f64 / self.scale
    }
}
