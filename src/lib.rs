//! Blockfx - Fixed-size block transforms for audio samples
//!
//! This library provides two independent, stateless building blocks:
//! - A linear 4x upsampler for 16-sample `f32` blocks
//! - A 12 dB soft gain ramp for 128-sample `i32` blocks
//!
//! Both operate on caller-owned buffers, never allocate, and validate every
//! input before writing a single sample.

mod error;
#[cfg(feature = "gain-ramp")]
pub mod gain;
#[cfg(feature = "interpolation")]
pub mod interpolation;

// Re-export commonly used types at the crate root
pub use error::BlockError;
#[cfg(feature = "gain-ramp")]
pub use gain::{RampWindow, Softness, soft_amp_increase, try_soft_amp_increase};
#[cfg(feature = "interpolation")]
pub use interpolation::{interpolate, try_interpolate};
