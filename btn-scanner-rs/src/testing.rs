//! Scripted input pins shared by the unit tests.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};

/// Input pin whose level is driven through a shared [`Cell`].
pub struct LevelPin<'a>(pub &'a Cell<bool>);

impl ErrorType for LevelPin<'_> {
    type Error = Infallible;
}

impl InputPin for LevelPin<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadFailed;

impl Error for ReadFailed {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin that reads the shared level, or fails while `fail` is set.
pub struct FlakyPin<'a> {
    pub level: &'a Cell<bool>,
    pub fail: &'a Cell<bool>,
}

impl ErrorType for FlakyPin<'_> {
    type Error = ReadFailed;
}

impl InputPin for FlakyPin<'_> {
    fn is_high(&mut self) -> Result<bool, ReadFailed> {
        if self.fail.get() {
            Err(ReadFailed)
        } else {
            Ok(self.level.get())
        }
    }

    fn is_low(&mut self) -> Result<bool, ReadFailed> {
        self.is_high().map(|high| !high)
    }
}
