//! A device abstraction for buttons with tick-driven debouncing and gesture detection.
//!
//! See [`Button`] for usage example.

mod callbacks;
mod debounce;
mod sample_source;
mod shared_button;
#[cfg(feature = "embassy")]
mod button_ticker;

pub use embedded_hal::digital::PinState;

#[cfg(feature = "embassy")]
pub use button_ticker::tick_forever;
pub use callbacks::{ButtonEvent, CallbackRegistry, Handler};
pub use sample_source::{PinSource, SampleSource};
pub use shared_button::SharedButton;

use callbacks::click_fallback_chain;
use debounce::Debouncer;

use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default debounce threshold, in ticks (10 ms at a 10 ms tick).
pub const DEFAULT_DEBOUNCE_THRESHOLD: u8 = 1;

/// Default long-press threshold, in ticks (500 ms at a 10 ms tick).
pub const DEFAULT_LONG_TICK: u16 = 50;

/// Default multi-click window, in ticks (250 ms at a 10 ms tick).
pub const DEFAULT_SHORT_TICK: u16 = 25;

/// Re-presses counted inside one multi-click window before the count saturates.
pub const MAX_REPEAT_COUNT: u8 = 63;

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage when pressed. Pin reads HIGH when pressed.
    Voltage,

    /// Button connects pin to ground when pressed. Pin reads LOW when pressed.
    Ground,
}

impl PressedTo {
    /// The raw level that counts as pressed.
    #[must_use]
    pub const fn press_level(self) -> PinState {
        match self {
            Self::Voltage => PinState::High,
            Self::Ground => PinState::Low,
        }
    }
}

// ============================================================================
// ButtonConfig
// ============================================================================

/// Thresholds for a [`Button`], all counted in ticks.
///
/// `short_tick` never exceeds `long_tick`; [`ButtonConfig::new`] clamps it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pressed_to: PressedTo,
    debounce_threshold: u8,
    long_tick: u16,
    short_tick: u16,
}

impl ButtonConfig {
    /// Creates a configuration, clamping `short_tick` to `long_tick`.
    #[must_use]
    pub const fn new(
        pressed_to: PressedTo,
        debounce_threshold: u8,
        long_tick: u16,
        short_tick: u16,
    ) -> Self {
        let short_tick = if short_tick > long_tick {
            long_tick
        } else {
            short_tick
        };
        Self {
            pressed_to,
            debounce_threshold,
            long_tick,
            short_tick,
        }
    }

    /// How the button is wired.
    #[must_use]
    pub const fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }

    /// The raw level that counts as pressed.
    #[must_use]
    pub const fn press_level(&self) -> PinState {
        self.pressed_to.press_level()
    }

    /// Consecutive pressed samples required to accept a press edge.
    #[must_use]
    pub const fn debounce_threshold(&self) -> u8 {
        self.debounce_threshold
    }

    /// Ticks a press must exceed to count as a long press.
    #[must_use]
    pub const fn long_tick(&self) -> u16 {
        self.long_tick
    }

    /// Length of the multi-click window, in ticks.
    #[must_use]
    pub const fn short_tick(&self) -> u16 {
        self.short_tick
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new(
            PressedTo::Ground,
            DEFAULT_DEBOUNCE_THRESHOLD,
            DEFAULT_LONG_TICK,
            DEFAULT_SHORT_TICK,
        )
    }
}

// ============================================================================
// Gesture phase
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum GesturePhase {
    Idle,
    PressDown,
    PressLongHold,
    WaitMulticlick,
}

/// Collects callback results for one tick. The first non-zero result wins.
struct TickOutcome {
    sample: PinState,
    result: i32,
}

impl TickOutcome {
    const fn new(sample: PinState) -> Self {
        Self { sample, result: 0 }
    }

    const fn record(&mut self, result: i32) {
        if self.result == 0 {
            self.result = result;
        }
    }
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A button that turns one raw sample per tick into gesture events.
///
/// The button performs no I/O of its own besides reading its [`SampleSource`] and no timing
/// at all: call [`exec`](Self::exec) from a fixed-period context (a timer interrupt, a
/// polling loop, or `tick_forever` with the `embassy` feature) and every threshold in
/// [`ButtonConfig`] is measured in those calls.
///
/// # Events
///
/// - [`ButtonEvent::PressDown`] on every tick the debounced press is held.
/// - [`ButtonEvent::PressLong`] once the press exceeds `long_tick`, then
///   [`ButtonEvent::PressUp`] on release. Long presses never count as clicks.
/// - Releasing earlier opens a multi-click window of `short_tick` ticks. Each new press
///   inside the window adds a click. When the window closes exactly one of
///   [`SingleClick`](ButtonEvent::SingleClick), [`DoubleClick`](ButtonEvent::DoubleClick),
///   [`TripleClick`](ButtonEvent::TripleClick) or [`PressRepeat`](ButtonEvent::PressRepeat)
///   fires. A missing click callback falls back to the next less specific one
///   (triple → double → single, single → press-up); `PressRepeat` has no fallback.
///
/// # Example
///
/// ```rust
/// use tick_button::button::{Button, ButtonConfig, ButtonEvent, PinState, PressedTo};
///
/// fn on_double_click(_sample: PinState) -> i32 {
///     // toggle something
///     0
/// }
///
/// # fn main() -> tick_button::Result<()> {
/// let config = ButtonConfig::new(PressedTo::Voltage, 1, 50, 25);
/// let mut samples = [PinState::High, PinState::Low, PinState::High].into_iter();
/// let mut button = Button::builder(config)
///     .sample_source(move || samples.next().unwrap_or(PinState::Low))
///     .build()?;
/// button.attach(ButtonEvent::DoubleClick, on_double_click)?;
///
/// // Called once per tick by your scheduler.
/// for _ in 0..40 {
///     button.exec()?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Button<S> {
    config: ButtonConfig,
    source: S,
    debouncer: Debouncer,
    phase: GesturePhase,
    gesture_ticks: u16,
    repeat_count: u8,
    click_timeout_ticks: u16,
    callbacks: CallbackRegistry,
}

impl<S> Button<S> {
    /// Starts building a button. The sample source is required.
    #[must_use]
    pub const fn builder(config: ButtonConfig) -> ButtonBuilder<S> {
        ButtonBuilder {
            config,
            source: None,
        }
    }

    /// Creates an idle button with no callbacks attached.
    #[must_use]
    pub const fn new(config: ButtonConfig, source: S) -> Self {
        Self {
            config,
            source,
            debouncer: Debouncer::new(),
            phase: GesturePhase::Idle,
            gesture_ticks: 0,
            repeat_count: 0,
            click_timeout_ticks: 0,
            callbacks: CallbackRegistry::new(),
        }
    }

    /// The configuration this button was built with.
    #[must_use]
    pub const fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Attaches `handler` for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOccupied`] if a handler is already attached for `event`.
    pub fn attach(&mut self, event: ButtonEvent, handler: Handler) -> Result<()> {
        self.callbacks.attach(event, handler)
    }

    /// Detaches and returns the handler for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotEmpty`] if nothing is attached for `event`.
    pub fn detach(&mut self, event: ButtonEvent) -> Result<Handler> {
        self.callbacks.detach(event)
    }

    /// The callback table.
    #[must_use]
    pub const fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Returns whether a debounced press is currently ongoing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.debouncer.is_active()
    }

    /// Returns whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    /// Re-presses seen in the current multi-click window.
    #[must_use]
    pub const fn repeat_count(&self) -> u8 {
        self.repeat_count
    }

    /// Ticks the current press has been held.
    #[must_use]
    pub const fn gesture_ticks(&self) -> u16 {
        self.gesture_ticks
    }

    /// Abandons any gesture in progress without firing events.
    ///
    /// Configuration and callbacks are kept.
    pub const fn reset(&mut self) {
        self.debouncer = Debouncer::new();
        self.phase = GesturePhase::Idle;
        self.gesture_ticks = 0;
        self.repeat_count = 0;
        self.click_timeout_ticks = 0;
    }

    /// Consumes the button, returning its sample source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn fire(&self, event: ButtonEvent, outcome: &mut TickOutcome) {
        if let Some(handler) = self.callbacks.get(event) {
            outcome.record(handler(outcome.sample));
        }
    }

    fn begin_press(&mut self) {
        if self.phase == GesturePhase::WaitMulticlick {
            self.repeat_count = self.repeat_count.saturating_add(1).min(MAX_REPEAT_COUNT);
        } else {
            // Only a press inside the click window continues the count.
            self.repeat_count = 0;
        }
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "button: press edge accepted in {} (repeat_count {})",
            self.phase,
            self.repeat_count
        );
        self.click_timeout_ticks = 0;
        self.gesture_ticks = 0;
        self.phase = GesturePhase::PressDown;
    }

    fn enter_long_hold(&mut self, outcome: &mut TickOutcome) {
        #[cfg(feature = "defmt")]
        defmt::debug!("button: long press after {} ticks", self.gesture_ticks);
        self.fire(ButtonEvent::PressLong, outcome);
        self.phase = GesturePhase::PressLongHold;
    }

    fn close_click_window(&mut self, outcome: &mut TickOutcome) {
        let chain = click_fallback_chain(self.repeat_count);
        let event = self.callbacks.first_attached(chain);
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "button: click window closed, repeat_count {} -> {}",
            self.repeat_count,
            event
        );
        if let Some(event) = event {
            self.fire(event, outcome);
        }
        self.gesture_ticks = 0;
        self.repeat_count = 0;
        self.click_timeout_ticks = 0;
        self.phase = GesturePhase::Idle;
    }
}

impl<S: SampleSource> Button<S> {
    /// Advances the button by one tick.
    ///
    /// Reads one sample, runs the debounce filter, evaluates one gesture transition and
    /// invokes the callbacks it produces. Returns the first non-zero callback result of the
    /// tick, or `0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputRead`] if the sample source fails. The button is left untouched.
    pub fn exec(&mut self) -> Result<i32> {
        let sample = self
            .source
            .read_sample()
            .map_err(|_| Error::InputRead)?;
        let pressed = sample == self.config.press_level();
        let mut outcome = TickOutcome::new(sample);

        if self
            .debouncer
            .update(pressed, self.config.debounce_threshold())
        {
            self.begin_press();
        }

        match self.phase {
            GesturePhase::Idle => {
                self.debouncer.set_inactive();
                self.repeat_count = 0;
            }
            GesturePhase::PressDown => {
                if pressed {
                    self.fire(ButtonEvent::PressDown, &mut outcome);
                    self.gesture_ticks = self.gesture_ticks.saturating_add(1);
                    if self.gesture_ticks > self.config.long_tick() {
                        self.enter_long_hold(&mut outcome);
                    }
                } else if self.gesture_ticks < self.config.long_tick() {
                    self.click_timeout_ticks = 0;
                    self.phase = GesturePhase::WaitMulticlick;
                } else {
                    // Released on the tick the long threshold was reached: still a hold.
                    self.enter_long_hold(&mut outcome);
                }
            }
            GesturePhase::PressLongHold => {
                if !pressed {
                    self.fire(ButtonEvent::PressUp, &mut outcome);
                    self.gesture_ticks = 0;
                    self.repeat_count = 0;
                    self.click_timeout_ticks = 0;
                    self.phase = GesturePhase::Idle;
                }
            }
            GesturePhase::WaitMulticlick => {
                self.click_timeout_ticks = self.click_timeout_ticks.saturating_add(1);
                if self.click_timeout_ticks > self.config.short_tick() {
                    self.close_click_window(&mut outcome);
                }
            }
        }

        Ok(outcome.result)
    }
}

// ============================================================================
// ButtonBuilder
// ============================================================================

/// Builder returned by [`Button::builder`].
#[derive(Debug)]
pub struct ButtonBuilder<S> {
    config: ButtonConfig,
    source: Option<S>,
}

impl<S> ButtonBuilder<S> {
    /// Sets the raw sample source read once per tick.
    #[must_use]
    pub fn sample_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds an idle button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSampleSource`] if no sample source was set.
    pub fn build(self) -> Result<Button<S>> {
        let source = self.source.ok_or(Error::MissingSampleSource)?;
        Ok(Button::new(self.config, source))
    }
}
