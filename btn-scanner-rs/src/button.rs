//! Button descriptor and the per-button press state machine.
//!
//! The state of a button is implicit in a single counter: the number of
//! consecutive scan ticks its input has read active. While the input is
//! active the counter is compared **exactly** against the tick thresholds
//! (checkpoints), so each `Down*` event fires at most once per press. When
//! the input goes inactive the completed press is classified with
//! **inclusive lower bounds**, longest first, and the counter is reset.
//!
//! ```text
//! active:    cntr == very_long  -> DownVeryLongPressed
//!            cntr == long       -> DownLongPressed
//!            cntr == press      -> DownPressed
//!            cntr == 0          -> Down
//!            (then cntr += 1)
//!
//! inactive:  cntr >= very_long  -> UpVeryLongPressed
//!            cntr >= long       -> UpLongPressed
//!            cntr >= press      -> UpPressed
//!            cntr > 0           -> Up
//!            (then cntr = 0)
//! ```

use embedded_hal::digital::InputPin;

use crate::config::{ActiveLevel, TickThresholds};

/// Port + pin identity of a physical button input.
///
/// Used by [`Scanner::find()`](crate::Scanner::find) to detect duplicate
/// registrations. The scanner never interprets the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId {
    pub port: u8,
    pub pin: u8,
}

impl ButtonId {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }
}

/// Discrete press/release event reported to a button's observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonStatus {
    /// Released before reaching the press threshold.
    Up,
    /// Released after a press.
    UpPressed,
    /// Released after a long press.
    UpLongPressed,
    /// Released after a very long press.
    UpVeryLongPressed,
    /// First active sample.
    Down,
    /// Still held, press threshold reached.
    DownPressed,
    /// Still held, long-press threshold reached.
    DownLongPressed,
    /// Still held, very-long-press threshold reached.
    DownVeryLongPressed,
}

impl ButtonStatus {
    /// Returns `true` for the `Down*` (still held) events.
    pub fn is_down(self) -> bool {
        matches!(
            self,
            ButtonStatus::Down
                | ButtonStatus::DownPressed
                | ButtonStatus::DownLongPressed
                | ButtonStatus::DownVeryLongPressed
        )
    }
}

/// Receiver of button events.
///
/// Implemented for every `FnMut(ButtonStatus)`, so plain functions and
/// closures can be registered directly. Called synchronously from
/// [`Scanner::update()`](crate::Scanner::update); keep it short.
pub trait ButtonObserver {
    fn on_event(&mut self, status: ButtonStatus);
}

impl<F> ButtonObserver for F
where
    F: FnMut(ButtonStatus),
{
    fn on_event(&mut self, status: ButtonStatus) {
        self(status)
    }
}

/// A registered button: input pin, polarity, tick thresholds, press counter
/// and observer.
///
/// Buttons are created by [`Scanner::add()`](crate::Scanner::add) and owned
/// exclusively by that scanner until [`removed`](crate::Scanner::remove).
pub struct Button<P, C> {
    id: ButtonId,
    pin: P,
    active_level: ActiveLevel,
    thresholds: TickThresholds,
    cntr: u32,
    observer: C,
}

impl<P, C> Button<P, C>
where
    P: InputPin,
    C: ButtonObserver,
{
    pub(crate) fn new(
        id: ButtonId,
        pin: P,
        active_level: ActiveLevel,
        thresholds: TickThresholds,
        observer: C,
    ) -> Self {
        Self {
            id,
            pin,
            active_level,
            thresholds,
            cntr: 0,
            observer,
        }
    }

    /// Port + pin identity given at registration.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Level that means "pressed".
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Press thresholds in scan ticks.
    pub fn thresholds(&self) -> TickThresholds {
        self.thresholds
    }

    /// Number of consecutive ticks the input has read active.
    pub fn counter(&self) -> u32 {
        self.cntr
    }

    /// Give back the pin and the observer.
    pub fn into_parts(self) -> (P, C) {
        (self.pin, self.observer)
    }

    fn read_active(&mut self) -> Result<bool, P::Error> {
        let is_high = self.pin.is_high()?;
        Ok(self.active_level.is_active(is_high))
    }

    /// Sample the pin once, advance the counter and notify the observer.
    ///
    /// On a pin error the counter is left untouched.
    pub(crate) fn scan(&mut self) -> Result<Option<ButtonStatus>, P::Error> {
        let event = if self.read_active()? {
            let event = self.checkpoint();
            self.cntr = self.cntr.saturating_add(1);
            event
        } else {
            let event = self.release();
            self.cntr = 0;
            event
        };

        if let Some(status) = event {
            #[cfg(feature = "defmt")]
            defmt::debug!("button {}: {} (cntr={})", self.id, status, self.cntr);
            self.observer.on_event(status);
        }
        Ok(event)
    }

    /// Report whether the button is already held, zeroing the counter.
    pub(crate) fn initial_status(&mut self) -> Result<ButtonStatus, P::Error> {
        let active = self.read_active()?;
        self.cntr = 0;
        Ok(if active {
            ButtonStatus::Down
        } else {
            ButtonStatus::Up
        })
    }

    // Exact matches; longest first so coincident thresholds report the
    // strongest event.
    fn checkpoint(&self) -> Option<ButtonStatus> {
        let t = &self.thresholds;
        if self.cntr == u32::from(t.very_long_press) {
            Some(ButtonStatus::DownVeryLongPressed)
        } else if self.cntr == u32::from(t.long_press) {
            Some(ButtonStatus::DownLongPressed)
        } else if self.cntr == u32::from(t.press) {
            Some(ButtonStatus::DownPressed)
        } else if self.cntr == 0 {
            Some(ButtonStatus::Down)
        } else {
            None
        }
    }

    fn release(&self) -> Option<ButtonStatus> {
        let t = &self.thresholds;
        if self.cntr == 0 {
            None
        } else if self.cntr >= u32::from(t.very_long_press) {
            Some(ButtonStatus::UpVeryLongPressed)
        } else if self.cntr >= u32::from(t.long_press) {
            Some(ButtonStatus::UpLongPressed)
        } else if self.cntr >= u32::from(t.press) {
            Some(ButtonStatus::UpPressed)
        } else {
            Some(ButtonStatus::Up)
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
