//! Block upsampling.
//!
//! This module provides the fixed-size linear interpolator that expands a
//! 16-sample `f32` block into a 64-sample block:
//! - `interpolate` for callers that only need success or failure
//! - `try_interpolate` for callers that want to know why a block was rejected
//! - The block-size constants the interpolator is specialised for

mod linear;

pub use linear::{FACTOR, INPUT_LENGTH, OUTPUT_LENGTH, interpolate, try_interpolate};
