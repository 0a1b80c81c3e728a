//! Soft gain ramp for 128-sample integer blocks.
//!
//! The ramp raises a block by [`AMP_INCREASE_DB`] in three regions:
//!
//! ```text
//! factor
//!  gain |                 ________________
//!       |               /
//!       |             /
//!   1.0 |____________/
//!       +------------+----+---------------+
//!       0        start    end           128
//! ```
//!
//! Samples before the window are untouched, samples inside it are scaled by
//! a factor rising linearly from `1.0`, and samples after it are held at the
//! full gain. The gain and slope stay in `f64` until the final
//! multiply-and-round for each sample.

use super::decibel::db_to_linear;
use super::softness::Softness;
use crate::BlockError;

/// Number of samples the gain ramp accepts.
pub const SIGNAL_LENGTH: usize = 128;

/// Amplitude increase applied by the ramp, in decibels.
pub const AMP_INCREASE_DB: f64 = 12.0;

/// Linear gain reached at the end of the ramp window.
pub fn target_gain() -> f64 {
    db_to_linear(AMP_INCREASE_DB)
}

/// Sample range over which the gain rises, centred on the block midpoint.
///
/// # Examples
///
/// ```
/// use blockfx::gain::{RampWindow, Softness};
///
/// let window = RampWindow::for_softness(Softness::new(50).unwrap());
/// assert_eq!(window.start(), 32);
/// assert_eq!(window.end(), 96);
/// assert_eq!(window.hold_len(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampWindow {
    start: usize,
    end: usize,
}

impl RampWindow {
    /// Resolves the window for a softness percentage.
    ///
    /// The curve length is `SIGNAL_LENGTH * softness / 100` rounded to the
    /// nearest sample, so even a softness of 1 yields a one-sample window.
    pub fn for_softness(softness: Softness) -> Self {
        let curve_length = (SIGNAL_LENGTH * softness.percent() as usize + 50) / 100;
        Self {
            start: (SIGNAL_LENGTH - curve_length) / 2,
            end: (SIGNAL_LENGTH + curve_length) / 2,
        }
    }

    /// First ramped sample index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// First held sample index (one past the last ramped sample).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of samples inside the ramp.
    pub fn curve_length(&self) -> usize {
        self.end - self.start
    }

    /// Number of samples held at full gain after the ramp.
    pub fn hold_len(&self) -> usize {
        SIGNAL_LENGTH - self.end
    }

    /// Per-sample increase of the gain factor inside the window.
    pub fn slope(&self, gain: f64) -> f64 {
        (gain - 1.0) / self.curve_length() as f64
    }

    /// Gain factor applied to the sample at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfx::gain::{RampWindow, Softness};
    ///
    /// let window = RampWindow::for_softness(Softness::FULL);
    /// assert_eq!(window.factor_at(0, 2.0), 1.0);
    /// assert_eq!(window.factor_at(64, 2.0), 1.5);
    /// ```
    pub fn factor_at(&self, index: usize, gain: f64) -> f64 {
        if index < self.start {
            1.0
        } else if index >= self.end {
            gain
        } else {
            1.0 + self.slope(gain) * (index - self.start) as f64
        }
    }
}

/// Scales `signal` in place by the ramp described by `window`.
///
/// Indices before the window are skipped; the rest are multiplied by
/// [`RampWindow::factor_at`] and rounded to the nearest integer. Results
/// outside the `i32` range saturate.
pub fn apply_ramp(signal: &mut [i32], window: RampWindow, gain: f64) {
    for (index, sample) in signal.iter_mut().enumerate().skip(window.start) {
        *sample = scale(*sample, window.factor_at(index, gain));
    }
}

#[inline]
fn scale(sample: i32, factor: f64) -> i32 {
    (sample as f64 * factor).round() as i32
}

/// Raises a 128-sample block by 12 dB with a linear ramp around its midpoint.
///
/// # Arguments
///
/// * `signal` - Exactly [`SIGNAL_LENGTH`] samples, scaled in place
/// * `softness_factor` - Percentage of the block the ramp spans, in `[1, 100]`
///
/// # Returns
///
/// `true` once the block has been processed, `false` if the block length or
/// softness was invalid. The block is untouched on failure.
///
/// # Examples
///
/// ```
/// use blockfx::gain::soft_amp_increase;
///
/// let mut block = [1000i32; 128];
/// assert!(soft_amp_increase(&mut block, 50));
///
/// assert_eq!(block[0], 1000);   // before the ramp
/// assert_eq!(block[127], 3981); // held at +12 dB
///
/// assert!(!soft_amp_increase(&mut block, 0));
/// ```
pub fn soft_amp_increase(signal: &mut [i32], softness_factor: i32) -> bool {
    try_soft_amp_increase(signal, softness_factor).is_ok()
}

/// Raises a 128-sample block by 12 dB, reporting why a block was rejected.
///
/// Behaves exactly like [`soft_amp_increase`] but returns a [`BlockError`]
/// instead of `false`.
///
/// # Errors
///
/// * [`BlockError::SignalLength`] if `signal` does not hold [`SIGNAL_LENGTH`] samples
/// * [`BlockError::SoftnessOutOfRange`] if `softness_factor` is not in `[1, 100]`
pub fn try_soft_amp_increase(signal: &mut [i32], softness_factor: i32) -> Result<(), BlockError> {
    if signal.len() != SIGNAL_LENGTH {
        log::debug!(
            "Rejecting gain ramp: signal has {} samples, expected {}",
            signal.len(),
            SIGNAL_LENGTH
        );
        return Err(BlockError::SignalLength {
            expected: SIGNAL_LENGTH,
            actual: signal.len(),
        });
    }

    let softness = Softness::new(softness_factor).inspect_err(|_| {
        log::debug!("Rejecting gain ramp: softness {} out of range", softness_factor);
    })?;

    let window = RampWindow::for_softness(softness);
    let gain = target_gain();
    log::trace!(
        "Gain ramp: softness={}, window=[{}, {}), gain={:.4}",
        softness,
        window.start(),
        window.end(),
        gain
    );

    apply_ramp(signal, window, gain);
    Ok(())
}
