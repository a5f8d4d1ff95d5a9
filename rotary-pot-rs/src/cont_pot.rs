//! Rotary continuous pot: direction decoding for a free-spinning dual-gang
//! potentiometer whose two wipers are 90° out of phase.
//!
//! Each wiper is sampled by its own ADC channel. Over one turn the two
//! voltages trace overlapping triangles, shifted by a quarter period:
//!
//! ```text
//!            |1|2|3|4|1|2|3|4|
//!       max  _________________
//!                /\      /\
//! ADC2  1/2  ___/__\___ /__\___
//!              /    \  /    \
//!            _/______\/______\_
//!       min
//!
//!       max  ____________________
//!                  /\      /\
//! ADC1  1/2  _____/__\___ /__\___
//!             \  /    \  /    \
//!            __\/______\/______\_
//!       min
//! ```
//!
//! Comparing both samples against their channel's midpoint places the
//! wiper pair in one of four [`Quarter`]s. Inside a quarter one channel
//! moves steeply (the *dominant* channel) and its delta gives the turn
//! direction. Near a quarter boundary deltas are least reliable, so having
//! just entered a quarter from its predecessor counts as an increment
//! regardless of the delta.
//!
//! Each channel has its own dead zone: a sample of the dominant channel
//! within `dead_zone` of the last accepted sample is treated as noise and
//! discarded without touching any state. A larger dead zone also lowers the
//! sensitivity, so more rotation is needed per step.
//!
//! Feed the decoder low-noise samples. Averaging 2^N conversions and
//! shifting right by N is usually enough.

use crate::error::PotError;
use crate::value::{BoundedValue, Direction, NoObserver, PotConfig, PotValue, ValueObserver};

// ── ADC channel settings ─────────────────────────────────────────────────

/// Calibration of one ADC channel (one pot gang).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcSettings {
    /// Lowest ADC code, usually 0.
    pub min_adc_val: u16,
    /// Highest ADC code, usually `(1 << bits) - 1`.
    pub max_adc_val: u16,
    /// Half-width of the noise band around the last accepted sample.
    /// Prefer something above 10; larger values need more turning per step.
    pub dead_zone: u16,
}

impl Default for AdcSettings {
    /// 12-bit ADC with a dead zone of 10 codes.
    fn default() -> Self {
        Self::for_resolution(12, 10)
    }
}

impl AdcSettings {
    /// Settings for an unsigned `bits`-bit ADC spanning `0..=(1 << bits) - 1`.
    ///
    /// `bits` above 16 is treated as 16.
    pub const fn for_resolution(bits: u8, dead_zone: u16) -> Self {
        let max_adc_val = if bits >= 16 {
            u16::MAX
        } else {
            (1u16 << bits) - 1
        };
        Self {
            min_adc_val: 0,
            max_adc_val,
            dead_zone,
        }
    }

    /// Quarter threshold: `(max_adc_val - min_adc_val) >> 1`.
    pub fn midpoint(&self) -> u16 {
        self.max_adc_val.saturating_sub(self.min_adc_val) >> 1
    }

    /// Returns `true` if `sample` lies strictly inside the band
    /// `(current - dead_zone, current + dead_zone)`.
    pub fn in_dead_zone(&self, current: u16, sample: u16) -> bool {
        let current = i32::from(current);
        let sample = i32::from(sample);
        let dead_zone = i32::from(self.dead_zone);
        sample > current - dead_zone && sample < current + dead_zone
    }

    fn validate(&self) -> Result<(), PotError> {
        if self.min_adc_val > self.max_adc_val {
            return Err(PotError::InvalidRange);
        }
        Ok(())
    }
}

/// Current and previous accepted sample of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcSample {
    pub current: u16,
    pub previous: u16,
}

/// One of the two pot gangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Adc1,
    Adc2,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Adc1 => 0,
            Channel::Adc2 => 1,
        }
    }
}

// ── Quarters ─────────────────────────────────────────────────────────────

/// Region of the two-channel sample space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quarter {
    /// ADC1 low, ADC2 high.
    #[default]
    Q1,
    /// Both high.
    Q2,
    /// ADC1 high, ADC2 low.
    Q3,
    /// Both low.
    Q4,
}

impl Quarter {
    /// Classify a sample pair. A sample equal to its midpoint counts as both
    /// low and high; the first match in Q1, Q2, Q3, Q4 order wins.
    pub fn classify(adc1: u16, adc2: u16, mid1: u16, mid2: u16) -> Self {
        if adc1 <= mid1 && adc2 >= mid2 {
            Quarter::Q1
        } else if adc1 >= mid1 && adc2 >= mid2 {
            Quarter::Q2
        } else if adc1 >= mid1 {
            Quarter::Q3
        } else {
            Quarter::Q4
        }
    }

    /// Channel whose delta decides direction inside this quarter.
    pub fn dominant(self) -> Channel {
        match self {
            Quarter::Q1 | Quarter::Q4 => Channel::Adc2,
            Quarter::Q2 | Quarter::Q3 => Channel::Adc1,
        }
    }

    /// Quarter that precedes this one when turning in the increment
    /// direction.
    pub fn predecessor(self) -> Self {
        match self {
            Quarter::Q1 => Quarter::Q4,
            Quarter::Q2 => Quarter::Q1,
            Quarter::Q3 => Quarter::Q2,
            Quarter::Q4 => Quarter::Q3,
        }
    }

    // ADC1 descends through Q3, so a falling sample there means increment.
    fn rising_means_increment(self) -> bool {
        !matches!(self, Quarter::Q3)
    }
}

// ── ContPot ──────────────────────────────────────────────────────────────

/// Rotary continuous pot decoder.
///
/// # Examples
///
/// ```
/// use rotary_pot::{AdcSettings, ContPot, PotConfig, PotError};
///
/// let adc = AdcSettings { min_adc_val: 0, max_adc_val: 1023, dead_zone: 10 };
/// let mut pot = ContPot::new(PotConfig::new(0i16, 0, 100, 1), adc, adc)
///     .unwrap()
///     .with_initial_samples(20, 50);
///
/// // Inside ADC2's dead zone: discarded.
/// assert_eq!(pot.set_update_adc_values(20, 50), Err(PotError::DeadZone));
///
/// // Both channels below their midpoint (Q4), ADC2 rising: increment.
/// assert_eq!(pot.set_update_adc_values(30, 60), Ok(1));
/// assert_eq!(pot.set_update_adc_values(40, 80), Ok(2));
/// ```
pub struct ContPot<V = i16, C = NoObserver> {
    value: BoundedValue<V>,
    prev_quarter: Quarter,
    settings: [AdcSettings; 2],
    data: [AdcSample; 2],
    observer: C,
}

impl<V: PotValue> ContPot<V, NoObserver> {
    /// Create a pot with both channels' samples at zero and no observer.
    ///
    /// Fails if the value configuration or either ADC range is invalid.
    pub fn new(config: PotConfig<V>, adc1: AdcSettings, adc2: AdcSettings) -> Result<Self, PotError> {
        adc1.validate()?;
        adc2.validate()?;
        Ok(Self {
            value: BoundedValue::new(config)?,
            prev_quarter: Quarter::default(),
            settings: [adc1, adc2],
            data: [AdcSample::default(); 2],
            observer: NoObserver,
        })
    }
}

impl<V, C> ContPot<V, C>
where
    V: PotValue,
    C: ValueObserver<V>,
{
    /// Seed both channels with a known sample pair, typically the first
    /// conversion after power-up, so the first update measures a real delta.
    pub fn with_initial_samples(mut self, adc1_val: u16, adc2_val: u16) -> Self {
        self.data = [
            AdcSample {
                current: adc1_val,
                previous: adc1_val,
            },
            AdcSample {
                current: adc2_val,
                previous: adc2_val,
            },
        ];
        self
    }

    /// Attach an observer, called with the new value after every accepted
    /// update.
    pub fn with_observer<O: ValueObserver<V>>(self, observer: O) -> ContPot<V, O> {
        ContPot {
            value: self.value,
            prev_quarter: self.prev_quarter,
            settings: self.settings,
            data: self.data,
            observer,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn value(&self) -> V {
        self.value.get()
    }

    /// Force the value. Ignored (returns `false`) if outside `[min, max]`.
    pub fn set_value(&mut self, value: V) -> bool {
        self.value.set(value)
    }

    /// Quarter of the last accepted sample pair.
    pub fn quarter(&self) -> Quarter {
        self.prev_quarter
    }

    /// Stored samples of one channel.
    pub fn sample(&self, channel: Channel) -> AdcSample {
        self.data[channel.index()]
    }

    pub fn settings(&self, channel: Channel) -> AdcSettings {
        self.settings[channel.index()]
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

    // ── Update ───────────────────────────────────────────────────────

    /// Feed a new pair of ADC samples.
    ///
    /// On success the samples become the channels' current values (the old
    /// current values become previous), the quarter is stored, the value
    /// moves one step and the observer is called with the new value.
    ///
    /// Returns [`PotError::DeadZone`] if the dominant channel's sample lies
    /// inside its dead zone. In that case nothing is stored and the observer
    /// is not called.
    pub fn set_update_adc_values(&mut self, adc1_val: u16, adc2_val: u16) -> Result<V, PotError> {
        let quarter = Quarter::classify(
            adc1_val,
            adc2_val,
            self.settings[0].midpoint(),
            self.settings[1].midpoint(),
        );

        let dominant = quarter.dominant().index();
        let sample = [adc1_val, adc2_val][dominant];
        let current = self.data[dominant].current;

        if self.settings[dominant].in_dead_zone(current, sample) {
            #[cfg(feature = "defmt")]
            defmt::trace!("rcp: {} sample {} inside dead zone of {}", quarter, sample, current);
            return Err(PotError::DeadZone);
        }

        let rising = sample > current;
        let direction = if rising == quarter.rising_means_increment()
            || self.prev_quarter == quarter.predecessor()
        {
            Direction::Increment
        } else {
            Direction::Decrement
        };

        for (data, new) in self.data.iter_mut().zip([adc1_val, adc2_val]) {
            data.previous = data.current;
            data.current = new;
        }
        self.prev_quarter = quarter;
        let value = self.value.apply(direction);

        #[cfg(feature = "defmt")]
        defmt::debug!("rcp: {} {}", quarter, direction);

        self.observer.on_value(value);
        Ok(value)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
