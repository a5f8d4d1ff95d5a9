//! Tick-driven scan loop for Embassy firmware.
//!
//! Only compiled with the `task` feature.

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;

use crate::button::ButtonObserver;
use crate::scanner::Scanner;

/// Periodic scan loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Embassy
/// tasks cannot be generic, so callers wrap it in a thin concrete task:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn buttons_task(scanner: &'static mut Scanner<Input<'static>, fn(ButtonStatus), 4>) {
///     scan_task(scanner).await;
/// }
/// ```
///
/// The loop ticks at [`Scanner::tick_period_ms()`] and never returns. A
/// failed pin read is logged and scanning continues on the next tick.
pub async fn scan_task<P, C, const N: usize>(scanner: &mut Scanner<P, C, N>)
where
    P: InputPin,
    C: ButtonObserver,
{
    let period = Duration::from_millis(u64::from(scanner.tick_period_ms()));
    let mut ticker = Ticker::every(period);

    #[cfg(feature = "defmt")]
    defmt::info!(
        "button scan started: {} buttons every {} ms",
        scanner.len(),
        scanner.tick_period_ms()
    );

    loop {
        ticker.next().await;
        if let Err(_e) = scanner.update() {
            #[cfg(feature = "defmt")]
            defmt::warn!("button scan: pin read failed");
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ButtonId, ButtonStatus};
    use crate::config::ButtonConfig;
    use crate::testing::FlakyPin;
    use core::cell::{Cell, RefCell};
    use core::future::Future;
    use core::pin::pin;
    use core::task::{Context, Poll, Waker};
    use embassy_time::MockDriver;
    use heapless::Vec;

    #[test]
    fn keeps_ticking_after_pin_error() {
        let level = Cell::new(true);
        let fail = Cell::new(true);
        let log: RefCell<Vec<ButtonStatus, 8>> = RefCell::new(Vec::new());

        let mut scanner: Scanner<_, _, 1> = Scanner::new(10).unwrap();
        scanner
            .add(
                ButtonId::new(0, 0),
                FlakyPin {
                    level: &level,
                    fail: &fail,
                },
                ButtonConfig::default(),
                |status: ButtonStatus| {
                    let _ = log.borrow_mut().push(status);
                },
            )
            .unwrap();

        let driver = MockDriver::get();
        let mut cx = Context::from_waker(Waker::noop());
        let mut task = pin!(scan_task(&mut scanner));

        // Nothing happens before the first tick.
        assert!(task.as_mut().poll(&mut cx).is_pending());
        assert!(log.borrow().is_empty());

        // First tick: the read fails and no event is reported.
        driver.advance(Duration::from_millis(10));
        assert!(task.as_mut().poll(&mut cx).is_pending());
        assert!(log.borrow().is_empty());

        // Second tick: the pin recovers and the press is seen.
        fail.set(false);
        driver.advance(Duration::from_millis(10));
        assert!(matches!(task.as_mut().poll(&mut cx), Poll::Pending));
        assert_eq!(log.borrow().as_slice(), &[ButtonStatus::Down]);
    }
}
