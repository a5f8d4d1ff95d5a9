//! Button configuration and tick threshold conversion.

/// Logic level at which a button reads as pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed when the pin reads low (button to GND, pull-up enabled).
    Low,
    /// Pressed when the pin reads high.
    #[default]
    High,
}

impl ActiveLevel {
    /// Returns `true` if a pin reading of `is_high` means "pressed".
    pub fn is_active(self, is_high: bool) -> bool {
        match self {
            ActiveLevel::High => is_high,
            ActiveLevel::Low => !is_high,
        }
    }
}

/// Per-button configuration, with press durations in milliseconds.
///
/// Durations are converted to scan ticks when the button is added to a
/// [`Scanner`](crate::Scanner), by truncating division with the scanner's
/// tick period. A duration shorter than one tick therefore becomes 0 ticks,
/// which fires that checkpoint on the very first active sample.
///
/// [`ButtonConfig::default()`] is a typical power button: active high,
/// 100 ms press, 1.2 s long press, 6 s very long press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Level that means "pressed". Default: [`ActiveLevel::High`].
    pub active_level: ActiveLevel,
    /// Hold time for a press. Default: 100.
    pub press_ms: u16,
    /// Hold time for a long press. Default: 1200.
    pub long_press_ms: u16,
    /// Hold time for a very long press. Default: 6000.
    pub very_long_press_ms: u16,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_level: ActiveLevel::High,
            press_ms: 100,
            long_press_ms: 1200,
            very_long_press_ms: 6000,
        }
    }
}

impl ButtonConfig {
    /// Returns `true` if `press <= long_press <= very_long_press`.
    ///
    /// The scanner does not enforce the ordering, but checkpoint events only
    /// arrive in a sensible order when it holds.
    pub fn is_ordered(&self) -> bool {
        self.press_ms <= self.long_press_ms && self.long_press_ms <= self.very_long_press_ms
    }

    /// Convert the millisecond thresholds to scan ticks.
    ///
    /// Returns `None` if `tick_period_ms` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use btn_scanner::ButtonConfig;
    ///
    /// let ticks = ButtonConfig::default().to_ticks(100).unwrap();
    /// assert_eq!((ticks.press, ticks.long_press, ticks.very_long_press), (1, 12, 60));
    /// ```
    pub fn to_ticks(&self, tick_period_ms: u16) -> Option<TickThresholds> {
        if tick_period_ms == 0 {
            return None;
        }
        Some(TickThresholds {
            press: self.press_ms / tick_period_ms,
            long_press: self.long_press_ms / tick_period_ms,
            very_long_press: self.very_long_press_ms / tick_period_ms,
        })
    }
}

/// Press thresholds expressed in scan ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickThresholds {
    pub press: u16,
    pub long_press: u16,
    pub very_long_press: u16,
}

impl TickThresholds {
    /// Returns `true` if any threshold truncated to zero ticks.
    pub fn has_zero(&self) -> bool {
        self.press == 0 || self.long_press == 0 || self.very_long_press == 0
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
