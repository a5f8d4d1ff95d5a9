//! Error types for the pot decoders.

use core::fmt;

/// Errors reported by pot construction and sample updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PotError {
    /// The sample fell inside the dead zone of the dominant channel and was
    /// discarded. No state was changed. Expected and frequent while the
    /// pot is at rest.
    DeadZone,
    /// `min > max`, for either the value range or an ADC range.
    InvalidRange,
    /// The start value lies outside `[min, max]`.
    StartOutOfRange,
    /// The step is not strictly positive.
    InvalidStep,
}

impl fmt::Display for PotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PotError::DeadZone => write!(f, "Sample inside dead zone"),
            PotError::InvalidRange => write!(f, "Range minimum exceeds maximum"),
            PotError::StartOutOfRange => write!(f, "Start value outside range"),
            PotError::InvalidStep => write!(f, "Step must be positive"),
        }
    }
}
