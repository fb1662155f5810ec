//! Drives a [`SharedButton`] from an embassy [`Ticker`].

use embassy_time::{Duration, Ticker};

use super::{SampleSource, SharedButton};

/// Calls [`SharedButton::exec`] once every `period`, forever.
///
/// Run it from its own task (or `join`/`select` it with other work). The period gives ticks
/// their real-world meaning: with 10 ms, a `long_tick` of 50 is half a second. Missed ticks
/// are not replayed; a late tick is simply counted as one tick.
///
/// Failures and non-zero callback results are logged (with the `defmt` feature) and
/// otherwise ignored.
///
/// # Example
///
/// ```rust,no_run
/// use embassy_time::Duration;
/// use tick_button::button::{Button, ButtonConfig, PinState, SharedButton, tick_forever};
///
/// async fn example() -> ! {
///     let shared = SharedButton::new(Button::new(ButtonConfig::default(), || PinState::High));
///     tick_forever(&shared, Duration::from_millis(10)).await
/// }
/// ```
pub async fn tick_forever<S: SampleSource>(button: &SharedButton<S>, period: Duration) -> ! {
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        match button.exec() {
            Ok(0) => {}
            Ok(_result) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("tick_forever: callback returned {}", _result);
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("tick_forever: exec failed: {}", _err);
            }
        }
    }
}
