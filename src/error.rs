//! Error type shared by the block transforms.

use std::fmt;

/// Reasons a block transform refuses to run.
///
/// Every variant describes a caller-side contract violation. Validation
/// always happens before any sample is written, so receiving one of these
/// guarantees the buffers were left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// The interpolator input did not hold exactly the required number of samples
    InputLength { expected: usize, actual: usize },
    /// The interpolator output cannot hold the upsampled block
    OutputTooShort { required: usize, actual: usize },
    /// The gain ramp signal did not hold exactly the required number of samples
    SignalLength { expected: usize, actual: usize },
    /// The softness percentage was outside `[1, 100]`
    SoftnessOutOfRange(i32),
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::InputLength { expected, actual } => {
                write!(f, "input has {} samples, expected {}", actual, expected)
            }
            BlockError::OutputTooShort { required, actual } => write!(
                f,
                "output holds {} samples, at least {} required",
                actual, required
            ),
            BlockError::SignalLength { expected, actual } => {
                write!(f, "signal has {} samples, expected {}", actual, expected)
            }
            BlockError::SoftnessOutOfRange(value) => {
                write!(f, "softness factor {} is outside 1..=100", value)
            }
        }
    }
}

impl std::error::Error for BlockError {}
