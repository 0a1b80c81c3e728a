//! Decibel conversions.

/// Level reported for gains at or below the floor (-120 dB).
pub const DB_FLOOR: f64 = -120.0;

/// Converts a decibel change to a linear amplitude ratio.
///
/// Treats samples as voltages, so `gain = 10^(db / 20)`.
///
/// # Examples
///
/// ```
/// use blockfx::gain::db_to_linear;
///
/// assert_eq!(db_to_linear(0.0), 1.0);
/// assert!((db_to_linear(12.0) - 3.981).abs() < 0.001);
/// ```
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Converts a linear amplitude ratio to decibels.
///
/// Gains too small to measure report [`DB_FLOOR`] instead of diverging
/// towards negative infinity.
pub fn linear_to_db(gain: f64) -> f64 {
    if gain <= db_to_linear(DB_FLOOR) {
        DB_FLOOR
    } else {
        20.0 * gain.log10()
    }
}
