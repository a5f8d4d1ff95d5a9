//! Rotary encoder pot: a two-phase mechanical encoder read one detent at a
//! time.
//!
//! Sample both phase pins once per detent transition. If the phases differ
//! the value steps up, if they match it steps down. Swapping the wiring (or
//! turning the knob the other way round on the panel) is handled by
//! `invert`.

use embedded_hal::digital::InputPin;

use crate::error::PotError;
use crate::value::{BoundedValue, Direction, NoObserver, PotConfig, PotValue, ValueObserver};

/// Rotary encoder pot decoder.
///
/// # Examples
///
/// ```
/// use rotary_pot::{EncPot, PotConfig};
///
/// let mut pot = EncPot::new(PotConfig::new(0i16, 0, 100, 1), false).unwrap();
/// assert_eq!(pot.set_update_values(false, true), 1);
/// assert_eq!(pot.set_update_values(true, true), 0);
/// ```
pub struct EncPot<V = i16, C = NoObserver> {
    value: BoundedValue<V>,
    invert: bool,
    observer: C,
}

impl<V: PotValue> EncPot<V, NoObserver> {
    /// Create an encoder pot without an observer.
    pub fn new(config: PotConfig<V>, invert: bool) -> Result<Self, PotError> {
        Ok(Self {
            value: BoundedValue::new(config)?,
            invert,
            observer: NoObserver,
        })
    }
}

impl<V, C> EncPot<V, C>
where
    V: PotValue,
    C: ValueObserver<V>,
{
    /// Attach an observer, called with the new value after every update.
    pub fn with_observer<O: ValueObserver<V>>(self, observer: O) -> EncPot<V, O> {
        EncPot {
            value: self.value,
            invert: self.invert,
            observer,
        }
    }

    pub fn value(&self) -> V {
        self.value.get()
    }

    /// Force the value. Ignored (returns `false`) if outside `[min, max]`.
    pub fn set_value(&mut self, value: V) -> bool {
        self.value.set(value)
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn bounds(&self) -> &BoundedValue<V> {
        &self.value
    }

    pub fn observer(&self) -> &C {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut C {
        &mut self.observer
    }

    /// Apply one detent from the two phase levels and return the new value.
    pub fn set_update_values(&mut self, phase1: bool, phase2: bool) -> V {
        let direction = if (phase1 != phase2) != self.invert {
            Direction::Increment
        } else {
            Direction::Decrement
        };
        let value = self.value.apply(direction);

        #[cfg(feature = "defmt")]
        defmt::trace!("rep: {} {} -> {}", phase1, phase2, direction);

        self.observer.on_value(value);
        value
    }

    /// Read both phase pins (high = `true`) and apply one detent.
    ///
    /// If either read fails the value is left unchanged.
    pub fn sample_pins<P>(&mut self, phase1: &mut P, phase2: &mut P) -> Result<V, P::Error>
    where
        P: InputPin,
    {
        let p1 = phase1.is_high()?;
        let p2 = phase2.is_high()?;
        Ok(self.set_update_values(p1, p2))
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn pot(start: i16, min: i16, max: i16, step: i16, invert: bool) -> EncPot<i16> {
        EncPot::new(PotConfig::new(start, min, max, step), invert).unwrap()
    }

    #[test]
    fn differing_phases_increment() {
        let mut pot = pot(0, 0, 100, 1, false);
        assert_eq!(pot.set_update_values(false, true), 1);
        assert_eq!(pot.set_update_values(true, false), 2);
        assert_eq!(pot.set_update_values(false, true), 3);
        assert_eq!(pot.value(), 3);
    }

    #[test]
    fn matching_phases_decrement() {
        let mut pot = pot(10, 0, 100, 1, false);
        assert_eq!(pot.set_update_values(false, false), 9);
        assert_eq!(pot.set_update_values(true, true), 8);
    }

    #[test]
    fn inverted_swaps_direction() {
        let mut pot = pot(0, -100, 100, 5, true);
        assert_eq!(pot.set_update_values(false, false), 5);
        assert_eq!(pot.set_update_values(true, true), 10);
        assert_eq!(pot.set_update_values(false, false), 15);
        assert_eq!(pot.set_update_values(true, false), 10);
        assert!(pot.is_inverted());
    }

    #[test]
    fn clamps_at_bounds() {
        let mut pot = pot(98, 0, 100, 5, false);
        assert_eq!(pot.set_update_values(true, false), 100);
        assert_eq!(pot.set_update_values(true, false), 100);

        let mut pot = pot_at_min();
        assert_eq!(pot.set_update_values(true, true), -100);
    }

    fn pot_at_min() -> EncPot<i16> {
        pot(-100, -100, 100, 5, false)
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(matches!(
            EncPot::new(PotConfig::new(0i16, 10, 0, 1), false),
            Err(PotError::InvalidRange)
        ));
        assert!(matches!(
            EncPot::new(PotConfig::new(0.0f32, 0.0, 1.0, -0.1), false),
            Err(PotError::InvalidStep)
        ));
    }

    #[test]
    fn observer_called_every_update() {
        let calls = Cell::new(0u32);
        let last = Cell::new(0i16);
        let mut pot = pot(0, 0, 3, 1, false).with_observer(|v: i16| {
            calls.set(calls.get() + 1);
            last.set(v);
        });
        for _ in 0..5 {
            pot.set_update_values(true, false);
        }
        // Called at the bound too, with the clamped value.
        assert_eq!(calls.get(), 5);
        assert_eq!(last.get(), 3);
    }

    #[test]
    fn set_value_respects_range() {
        let mut pot = pot(0, 0, 10, 1, false);
        assert!(pot.set_value(7));
        assert!(!pot.set_value(11));
        assert_eq!(pot.value(), 7);
    }

    #[test]
    fn sample_pins_reads_both_phases() {
        let mut phase1 = PinMock::new(&[Transaction::get(State::Low), Transaction::get(State::High)]);
        let mut phase2 = PinMock::new(&[Transaction::get(State::Low), Transaction::get(State::High)]);
        let mut pot = pot(5, 0, 10, 1, false);

        // (low, low) then (high, high): two decrements.
        assert_eq!(pot.sample_pins(&mut phase1, &mut phase2).unwrap(), 4);
        assert_eq!(pot.sample_pins(&mut phase1, &mut phase2).unwrap(), 3);

        phase1.done();
        phase2.done();
    }

    #[test]
    fn sample_pins_mixed_levels() {
        let mut phase1 = PinMock::new(&[Transaction::get(State::High)]);
        let mut phase2 = PinMock::new(&[Transaction::get(State::Low)]);
        let mut pot = pot(5, 0, 10, 1, false);

        assert_eq!(pot.sample_pins(&mut phase1, &mut phase2).unwrap(), 6);

        phase1.done();
        phase2.done();
    }
}
