//! Bounded value model and value observers shared by both pot decoders.
//!
//! A pot value moves by exactly one `step` per detected detent and is
//! clamped to `[min, max]`. Pushing further against a bound is a silent
//! no-op.

use crate::error::PotError;

// ── PotValue ─────────────────────────────────────────────────────────────

/// Numeric type a pot can output.
///
/// Implemented for the primitive integers (stepping saturates instead of
/// overflowing), `f32`/`f64`, and with the `fixed` feature the
/// [`fixed`](https://docs.rs/fixed) `FixedI16`/`FixedI32` types for targets
/// without a hardware FPU.
pub trait PotValue: Copy + PartialOrd {
    /// Additive identity, used to validate steps.
    const ZERO: Self;

    /// `self + step`, saturating for integer types.
    fn step_up(self, step: Self) -> Self;

    /// `self - step`, saturating for integer types.
    fn step_down(self, step: Self) -> Self;
}

macro_rules! impl_pot_value_int {
    ($($t:ty),*) => {
        $(
            impl PotValue for $t {
                const ZERO: Self = 0;

                fn step_up(self, step: Self) -> Self {
                    self.saturating_add(step)
                }

                fn step_down(self, step: Self) -> Self {
                    self.saturating_sub(step)
                }
            }
        )*
    };
}

macro_rules! impl_pot_value_float {
    ($($t:ty),*) => {
        $(
            impl PotValue for $t {
                const ZERO: Self = 0.0;

                fn step_up(self, step: Self) -> Self {
                    self + step
                }

                fn step_down(self, step: Self) -> Self {
                    self - step
                }
            }
        )*
    };
}

impl_pot_value_int!(i8, i16, i32, i64, u8, u16, u32);
impl_pot_value_float!(f32, f64);

#[cfg(feature = "fixed")]
mod fixed_impls {
    use fixed::types::extra::{LeEqU16, LeEqU32};
    use fixed::{FixedI16, FixedI32};

    use super::PotValue;

    impl<Frac: LeEqU16> PotValue for FixedI16<Frac> {
        const ZERO: Self = FixedI16::ZERO;

        fn step_up(self, step: Self) -> Self {
            self.saturating_add(step)
        }

        fn step_down(self, step: Self) -> Self {
            self.saturating_sub(step)
        }
    }

    impl<Frac: LeEqU32> PotValue for FixedI32<Frac> {
        const ZERO: Self = FixedI32::ZERO;

        fn step_up(self, step: Self) -> Self {
            self.saturating_add(step)
        }

        fn step_down(self, step: Self) -> Self {
            self.saturating_sub(step)
        }
    }
}

// ── PotConfig ────────────────────────────────────────────────────────────

/// Output range and resolution of a pot.
///
/// `PotConfig::<i16>::default()` is `0..=100` in steps of 1, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PotConfig<V> {
    /// Initial value, within `[min, max]`.
    pub start: V,
    /// Lowest value (inclusive).
    pub min: V,
    /// Highest value (inclusive).
    pub max: V,
    /// Amount added or removed per detent. Must be positive.
    pub step: V,
}

impl Default for PotConfig<i16> {
    fn default() -> Self {
        Self {
            start: 0,
            min: 0,
            max: 100,
            step: 1,
        }
    }
}

impl<V: PotValue> PotConfig<V> {
    pub const fn new(start: V, min: V, max: V, step: V) -> Self {
        Self {
            start,
            min,
            max,
            step,
        }
    }

    /// Check the range, start value and step.
    ///
    /// Comparisons are written so that a NaN anywhere is rejected.
    pub fn validate(&self) -> Result<(), PotError> {
        if !(self.min <= self.max) {
            return Err(PotError::InvalidRange);
        }
        if !(self.start >= self.min && self.start <= self.max) {
            return Err(PotError::StartOutOfRange);
        }
        if !(self.step > V::ZERO) {
            return Err(PotError::InvalidStep);
        }
        Ok(())
    }
}

// ── BoundedValue ─────────────────────────────────────────────────────────

/// Direction of one detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Increment,
    Decrement,
}

/// A value clamped to `[min, max]` that moves in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedValue<V> {
    value: V,
    min: V,
    max: V,
    step: V,
}

impl<V: PotValue> BoundedValue<V> {
    /// Build from a validated configuration.
    pub fn new(config: PotConfig<V>) -> Result<Self, PotError> {
        config.validate()?;
        Ok(Self {
            value: config.start,
            min: config.min,
            max: config.max,
            step: config.step,
        })
    }

    pub fn get(&self) -> V {
        self.value
    }

    pub fn min(&self) -> V {
        self.min
    }

    pub fn max(&self) -> V {
        self.max
    }

    pub fn step(&self) -> V {
        self.step
    }

    /// Force a value. Values outside `[min, max]` are ignored and `false`
    /// is returned.
    pub fn set(&mut self, value: V) -> bool {
        if value >= self.min && value <= self.max {
            self.value = value;
            true
        } else {
            false
        }
    }

    /// Move one step in `direction`, clamping at the bound.
    pub fn apply(&mut self, direction: Direction) -> V {
        match direction {
            Direction::Increment => self.increment(),
            Direction::Decrement => self.decrement(),
        }
    }

    pub fn increment(&mut self) -> V {
        if self.value < self.max {
            let next = self.value.step_up(self.step);
            self.value = if next > self.max { self.max } else { next };
        }
        self.value
    }

    pub fn decrement(&mut self) -> V {
        if self.value > self.min {
            let next = self.value.step_down(self.step);
            self.value = if next < self.min { self.min } else { next };
        }
        self.value
    }
}

// ── Observers ────────────────────────────────────────────────────────────

/// Receiver of pot values.
///
/// Implemented for every `FnMut(V)`. Called synchronously after each
/// accepted update, once the pot state has been committed.
pub trait ValueObserver<V> {
    fn on_value(&mut self, value: V);
}

impl<V, F> ValueObserver<V> for F
where
    F: FnMut(V),
{
    fn on_value(&mut self, value: V) {
        self(value)
    }
}

/// Observer that ignores every value; the default for pots built without
/// a callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<V> ValueObserver<V> for NoObserver {
    fn on_value(&mut self, _value: V) {}
}

// ── Unit Tests ───────────────────────────────────────────────────────
