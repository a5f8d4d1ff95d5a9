//! Button scanner: a fixed-capacity arena of buttons driven by a periodic
//! tick.

use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::button::{Button, ButtonId, ButtonObserver, ButtonStatus};
use crate::config::ButtonConfig;
use crate::error::ScannerError;

/// Stable handle to a button registered in a [`Scanner`].
///
/// A handle stays valid until the button is removed. After removal the
/// slot may be reused by a later [`Scanner::add()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonHandle(usize);

impl ButtonHandle {
    /// Slot index inside the scanner.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Periodic scanner owning up to `N` buttons.
///
/// Call [`update()`](Self::update) once every `tick_period_ms`. All press
/// thresholds are measured in those ticks, so the caller's scheduler must
/// keep the period steady.
///
/// # Examples
///
/// ```
/// use core::convert::Infallible;
/// use btn_scanner::{ButtonConfig, ButtonId, ButtonStatus, Scanner};
/// use embedded_hal::digital::{ErrorType, InputPin};
///
/// struct AlwaysHigh;
/// impl ErrorType for AlwaysHigh {
///     type Error = Infallible;
/// }
/// impl InputPin for AlwaysHigh {
///     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(true) }
///     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(false) }
/// }
///
/// fn on_power(status: ButtonStatus) {
///     let _ = status;
/// }
///
/// let mut scanner: Scanner<AlwaysHigh, fn(ButtonStatus), 4> = Scanner::new(10).unwrap();
/// let power = scanner
///     .add(ButtonId::new(3, 2), AlwaysHigh, ButtonConfig::default(), on_power)
///     .unwrap();
///
/// scanner.update().unwrap();
/// assert_eq!(scanner.button(power).unwrap().counter(), 1);
/// ```
pub struct Scanner<P, C, const N: usize> {
    tick_period_ms: u16,
    slots: Vec<Option<Button<P, C>>, N>,
}

impl<P, C, const N: usize> Scanner<P, C, N>
where
    P: InputPin,
    C: ButtonObserver,
{
    /// Create an empty scanner ticking every `tick_period_ms`.
    ///
    /// Returns [`ScannerError::ZeroTickPeriod`] if `tick_period_ms` is 0.
    pub fn new(tick_period_ms: u16) -> Result<Self, ScannerError<P::Error>> {
        if tick_period_ms == 0 {
            return Err(ScannerError::ZeroTickPeriod);
        }
        Ok(Self {
            tick_period_ms,
            slots: Vec::new(),
        })
    }

    /// Scan period in milliseconds.
    pub fn tick_period_ms(&self) -> u16 {
        self.tick_period_ms
    }

    /// Number of registered buttons.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no button is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register a button, converting its millisecond thresholds to ticks.
    ///
    /// Registration does **not** check for duplicates; use
    /// [`find()`](Self::find) first if the same port+pin might be added
    /// twice. A freed slot is reused before the arena grows.
    ///
    /// Returns [`ScannerError::Full`] if all `N` slots are occupied.
    pub fn add(
        &mut self,
        id: ButtonId,
        pin: P,
        config: ButtonConfig,
        observer: C,
    ) -> Result<ButtonHandle, ScannerError<P::Error>> {
        let thresholds = config
            .to_ticks(self.tick_period_ms)
            .ok_or(ScannerError::ZeroTickPeriod)?;

        #[cfg(feature = "defmt")]
        {
            if thresholds.has_zero() {
                defmt::warn!("button {}: threshold shorter than one tick", id);
            }
            if !config.is_ordered() {
                defmt::warn!("button {}: thresholds are not ordered", id);
            }
        }

        let button = Button::new(id, pin, config.active_level, thresholds, observer);

        if let Some(index) = self.slots.iter().position(|s| s.is_none()) {
            self.slots[index] = Some(button);
            return Ok(ButtonHandle(index));
        }

        let index = self.slots.len();
        self.slots
            .push(Some(button))
            .map_err(|_| ScannerError::Full)?;
        Ok(ButtonHandle(index))
    }

    /// Remove a button and hand it back to the caller.
    ///
    /// Returns `None` if the handle is not registered.
    pub fn remove(&mut self, handle: ButtonHandle) -> Option<Button<P, C>> {
        self.slots.get_mut(handle.0)?.take()
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Find a registered button by port+pin identity.
    pub fn find(&self, id: ButtonId) -> Option<ButtonHandle> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|b| b.id() == id))
            .map(ButtonHandle)
    }

    /// Returns `true` if a button with this port+pin is registered.
    pub fn contains(&self, id: ButtonId) -> bool {
        self.find(id).is_some()
    }

    /// Borrow a registered button.
    pub fn button(&self, handle: ButtonHandle) -> Option<&Button<P, C>> {
        self.slots.get(handle.0)?.as_ref()
    }

    /// Iterate over registered buttons in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonHandle, &Button<P, C>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (ButtonHandle(i), b)))
    }

    // ── Scanning ─────────────────────────────────────────────────────

    /// Sample every button once and deliver any resulting events.
    ///
    /// Each button's observer is called at most once per tick, synchronously,
    /// before this method returns.
    ///
    /// A failing pin read leaves that button's state untouched for this tick;
    /// the remaining buttons are still scanned and the first error is
    /// returned afterwards.
    pub fn update(&mut self) -> Result<(), ScannerError<P::Error>> {
        let mut first_error = None;

        for button in self.slots.iter_mut().flatten() {
            if let Err(e) = button.scan() {
                #[cfg(feature = "defmt")]
                defmt::warn!("button {}: pin read failed", button.id());
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(ScannerError::Pin(e)),
            None => Ok(()),
        }
    }

    /// Decide whether a button is already held before the first tick.
    ///
    /// Reads the pin once and zeroes the press counter. The observer is
    /// **not** called.
    pub fn initial_status(
        &mut self,
        handle: ButtonHandle,
    ) -> Result<ButtonStatus, ScannerError<P::Error>> {
        let button = self
            .slots
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .ok_or(ScannerError::InvalidHandle)?;
        Ok(button.initial_status()?)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
