//! Direction decoding for rotary pots on `no_std` targets.
//!
//! Two decoders turn raw readings into a bounded value that moves one
//! `step` per detected detent:
//!
//! - [`ContPot`] decodes a free-spinning dual-gang potentiometer whose two
//!   wipers are 90° out of phase, sampled by two ADC channels.
//! - [`EncPot`] decodes a two-phase mechanical encoder from its pin levels.
//!
//! Both clamp to `[min, max]` and optionally report every new value to a
//! [`ValueObserver`] (any `FnMut(V)` closure works).
//!
//! # Quick start
//!
//! ```
//! use rotary_pot::{AdcSettings, ContPot, PotConfig, PotError};
//!
//! let adc = AdcSettings::for_resolution(12, 10);
//! let mut volume = ContPot::new(PotConfig::new(0i16, 0, 100, 1), adc, adc)
//!     .unwrap()
//!     .with_observer(|v: i16| {
//!         // push v to the synth engine
//!         let _ = v;
//!     });
//!
//! // From the ADC conversion-complete handler:
//! match volume.set_update_adc_values(1200, 300) {
//!     Ok(value) => assert_eq!(value, 1),
//!     Err(PotError::DeadZone) => {} // knob at rest
//!     Err(e) => panic!("{}", e),
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — structured logging and [`defmt::Format`] implementations.
//! - **`fixed`** — [`PotValue`] for the `fixed` crate's `FixedI16` and
//!   `FixedI32` types.

#![no_std]

pub mod cont_pot;
pub mod enc_pot;
pub mod error;
pub mod value;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use cont_pot::{AdcSample, AdcSettings, Channel, ContPot, Quarter};
pub use enc_pot::EncPot;
pub use error::PotError;
pub use value::{BoundedValue, Direction, NoObserver, PotConfig, PotValue, ValueObserver};
