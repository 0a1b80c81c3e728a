//! Linear 4x upsampler for 16-sample blocks.

use crate::BlockError;

/// Number of samples the interpolator accepts.
pub const INPUT_LENGTH: usize = 16;

/// Upsampling factor.
pub const FACTOR: usize = 4;

/// Number of samples written to the output buffer.
pub const OUTPUT_LENGTH: usize = INPUT_LENGTH * FACTOR;

/// Upsamples a 16-sample block by a factor of 4 using linear interpolation.
///
/// Every input sample lands unchanged at `output[4 * i]`. The three samples
/// leading up to each of those positions are filled in on a straight line
/// from the previous input sample, and the last three output samples
/// continue the final segment's slope past the end of the input.
///
/// # Arguments
///
/// * `input` - Exactly [`INPUT_LENGTH`] samples; never modified
/// * `output` - At least [`OUTPUT_LENGTH`] samples; only the first
///   [`OUTPUT_LENGTH`] are written
///
/// # Returns
///
/// `true` if the output was populated, `false` if either buffer had the
/// wrong size. Nothing is written on failure.
///
/// # Examples
///
/// ```
/// use blockfx::interpolation::interpolate;
///
/// let input: Vec<f32> = (0..16).map(|i| i as f32).collect();
/// let mut output = [0.0f32; 64];
///
/// assert!(interpolate(&input, &mut output));
/// assert_eq!(output[4], 1.0);
/// assert_eq!(output[5], 1.25);
/// assert_eq!(output[6], 1.5);
/// ```
pub fn interpolate(input: &[f32], output: &mut [f32]) -> bool {
    try_interpolate(input, output).is_ok()
}

/// Upsamples a 16-sample block by a factor of 4, reporting why a block was
/// rejected.
///
/// Behaves exactly like [`interpolate`] but returns a [`BlockError`]
/// describing the size mismatch instead of `false`.
///
/// # Errors
///
/// * [`BlockError::InputLength`] if `input` does not hold [`INPUT_LENGTH`] samples
/// * [`BlockError::OutputTooShort`] if `output` holds fewer than [`OUTPUT_LENGTH`] samples
///
/// # Examples
///
/// ```
/// use blockfx::{BlockError, interpolation::try_interpolate};
///
/// let mut output = [0.0f32; 64];
/// let err = try_interpolate(&[0.0f32; 8], &mut output).unwrap_err();
/// assert_eq!(err, BlockError::InputLength { expected: 16, actual: 8 });
/// ```
pub fn try_interpolate(input: &[f32], output: &mut [f32]) -> Result<(), BlockError> {
    if input.len() != INPUT_LENGTH {
        log::debug!(
            "Rejecting interpolation: input has {} samples, expected {}",
            input.len(),
            INPUT_LENGTH
        );
        return Err(BlockError::InputLength {
            expected: INPUT_LENGTH,
            actual: input.len(),
        });
    }

    if output.len() < OUTPUT_LENGTH {
        log::debug!(
            "Rejecting interpolation: output holds {} samples, need {}",
            output.len(),
            OUTPUT_LENGTH
        );
        return Err(BlockError::OutputTooShort {
            required: OUTPUT_LENGTH,
            actual: output.len(),
        });
    }

    let output = &mut output[..OUTPUT_LENGTH];
    output[0] = input[0];

    let mut slope = 0.0f32;
    for i in 1..INPUT_LENGTH {
        let current = input[i];
        slope = (current - input[i - 1]) / FACTOR as f32;

        // Walk backward from the anchor sample
        let anchor = i * FACTOR;
        output[anchor] = current;
        for offset in 1..FACTOR {
            output[anchor - offset] = output[anchor - offset + 1] - slope;
        }
    }

    // Extrapolate the tail past the last input sample with the final slope
    let last_out_idx = INPUT_LENGTH * FACTOR - 1;
    let mut value = input[INPUT_LENGTH - 1];
    for sample in &mut output[last_out_idx - (FACTOR - 2)..=last_out_idx] {
        value += slope;
        *sample = value;
    }

    log::trace!("Interpolated {} samples into {}", INPUT_LENGTH, OUTPUT_LENGTH);
    Ok(())
}
