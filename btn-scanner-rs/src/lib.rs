//! Debounced, tick-driven button scanning for `no_std` targets.
//!
//! A [`Scanner`] owns a fixed number of buttons. Each call to
//! [`Scanner::update()`] samples every button's input pin once, advances a
//! per-button counter of consecutive active samples, and reports lifecycle
//! events to the button's [`ButtonObserver`]:
//!
//! ```text
//!   press ─┬─ Down                     (first active tick)
//!          ├─ DownPressed              (held `press_ms`)
//!          ├─ DownLongPressed          (held `long_press_ms`)
//!          └─ DownVeryLongPressed      (held `very_long_press_ms`)
//! release ─── Up / UpPressed / UpLongPressed / UpVeryLongPressed
//! ```
//!
//! Every event fires at most once per press and exactly one `Up*` event
//! closes it. No heap allocation is used and every update is bounded by
//! the number of registered buttons.
//!
//! # Quick start
//!
//! ```ignore
//! use btn_scanner::{ActiveLevel, ButtonConfig, ButtonId, ButtonStatus, Scanner};
//!
//! fn on_power(status: ButtonStatus) { /* ... */ }
//!
//! let mut scanner: Scanner<_, fn(ButtonStatus), 4> = Scanner::new(10)?;
//! let power = scanner.add(ButtonId::new(3, 2), power_pin, ButtonConfig::default(), on_power)?;
//!
//! // Every 10 ms, from a timer or the main loop:
//! scanner.update()?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — structured logging and [`defmt::Format`] implementations.
//! - **`task`** — [`scan_task`], an Embassy ticker loop that calls
//!   [`Scanner::update()`] at the scanner's tick period.

#![no_std]

pub mod button;
pub mod config;
pub mod error;
#[cfg(feature = "task")]
pub mod scan_task;
pub mod scanner;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use button::{Button, ButtonId, ButtonObserver, ButtonStatus};
pub use config::{ActiveLevel, ButtonConfig, TickThresholds};
pub use error::ScannerError;
#[cfg(feature = "task")]
pub use scan_task::scan_task;
pub use scanner::{ButtonHandle, Scanner};
