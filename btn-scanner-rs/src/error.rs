//! Error types for the button scanner.

use core::fmt;

/// Errors that can occur when registering or scanning buttons.
///
/// `E` is the error type of the buttons' [`InputPin`](embedded_hal::digital::InputPin).
/// Most HAL pins use [`Infallible`](core::convert::Infallible), in which case
/// [`ScannerError::Pin`] can never be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerError<E> {
    /// Underlying input pin read error.
    Pin(E),

    /// The scanner was created with a tick period of 0 ms.
    ZeroTickPeriod,

    /// Every slot in the fixed-capacity button arena is in use.
    Full,

    /// The handle does not refer to a registered button.
    InvalidHandle,
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for ScannerError<E> {
    fn from(error: E) -> Self {
        ScannerError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ScannerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScannerError::Pin(e) => write!(f, "Pin read error: {:?}", e),
            ScannerError::ZeroTickPeriod => write!(f, "Tick period must be at least 1 ms"),
            ScannerError::Full => write!(f, "No free button slot"),
            ScannerError::InvalidHandle => write!(f, "Unknown button handle"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for ScannerError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ScannerError::Pin(e) => defmt::write!(f, "Pin read error: {}", e),
            ScannerError::ZeroTickPeriod => defmt::write!(f, "Zero tick period"),
            ScannerError::Full => defmt::write!(f, "No free button slot"),
            ScannerError::InvalidHandle => defmt::write!(f, "Unknown button handle"),
        }
    }
}
