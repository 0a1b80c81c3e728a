//! Soft gain ramping.
//!
//! This module provides the 12 dB soft amplitude increase for 128-sample
//! integer blocks, including:
//! - `soft_amp_increase` and `try_soft_amp_increase` entry points
//! - `Softness` for validated ramp widths
//! - `RampWindow` for inspecting which samples are ramped or held
//! - Decibel conversion helpers

mod decibel;
mod ramp;
mod softness;

pub use decibel::{DB_FLOOR, db_to_linear, linear_to_db};
pub use ramp::{
    AMP_INCREASE_DB, RampWindow, SIGNAL_LENGTH, apply_ramp, soft_amp_increase, target_gain,
    try_soft_amp_increase,
};
pub use softness::Softness;
