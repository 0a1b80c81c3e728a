//! Validated softness percentage.

use std::fmt;

use crate::BlockError;

/// Percentage of the block over which the gain ramp is spread.
///
/// `100` spreads the ramp across the whole block, `1` makes it as abrupt as
/// a single sample allows. The value is always within `[1, 100]`.
///
/// # Examples
///
/// ```
/// use blockfx::gain::Softness;
///
/// let softness = Softness::new(25).unwrap();
/// assert_eq!(softness.percent(), 25);
///
/// assert!(Softness::new(0).is_err());
/// assert!(Softness::try_from(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Softness(u8);

impl Softness {
    /// Ramp spans the entire block.
    pub const FULL: Softness = Softness(100);

    /// Ramp spans a single sample.
    pub const ABRUPT: Softness = Softness(1);

    /// Creates a softness value.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::SoftnessOutOfRange`] if `percent` is not in `[1, 100]`.
    pub fn new(percent: i32) -> Result<Self, BlockError> {
        if (1..=100).contains(&percent) {
            Ok(Softness(percent as u8))
        } else {
            Err(BlockError::SoftnessOutOfRange(percent))
        }
    }

    /// Gets the softness as a percentage.
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Softness {
    fn default() -> Self {
        Softness::FULL
    }
}

impl TryFrom<i32> for Softness {
    type Error = BlockError;

    fn try_from(percent: i32) -> Result<Self, Self::Error> {
        Softness::new(percent)
    }
}

impl fmt::Display for Softness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
