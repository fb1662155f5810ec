//! Fixed-slot callback table, one handler per public event kind.

use embedded_hal::digital::PinState;

use crate::{Error, Result};

/// A gesture event reported to callbacks.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Fired on every tick the button is held, from the accepted press edge until it is
    /// released or becomes a long press.
    PressDown,
    /// Fired when a long press is released, and for a single click when no
    /// [`SingleClick`](Self::SingleClick) callback is attached.
    PressUp,
    /// Four or more clicks inside the multi-click window.
    PressRepeat,
    /// One click.
    SingleClick,
    /// Two clicks.
    DoubleClick,
    /// Three clicks.
    TripleClick,
    /// The button was held past the long-press threshold.
    PressLong,
}

impl ButtonEvent {
    /// Every public event kind, in slot order.
    pub const ALL: [Self; 7] = [
        Self::PressDown,
        Self::PressUp,
        Self::PressRepeat,
        Self::SingleClick,
        Self::DoubleClick,
        Self::TripleClick,
        Self::PressLong,
    ];
}

/// Callback signature. Receives the raw sample of the tick that fired the event and
/// returns a status code that [`exec`](super::Button::exec) passes through untouched.
pub type Handler = fn(PinState) -> i32;

/// At most one [`Handler`] per [`ButtonEvent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CallbackRegistry {
    press_down: Option<Handler>,
    press_up: Option<Handler>,
    press_repeat: Option<Handler>,
    single_click: Option<Handler>,
    double_click: Option<Handler>,
    triple_click: Option<Handler>,
    press_long: Option<Handler>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            press_down: None,
            press_up: None,
            press_repeat: None,
            single_click: None,
            double_click: None,
            triple_click: None,
            press_long: None,
        }
    }

    const fn slot(&self, event: ButtonEvent) -> &Option<Handler> {
        match event {
            ButtonEvent::PressDown => &self.press_down,
            ButtonEvent::PressUp => &self.press_up,
            ButtonEvent::PressRepeat => &self.press_repeat,
            ButtonEvent::SingleClick => &self.single_click,
            ButtonEvent::DoubleClick => &self.double_click,
            ButtonEvent::TripleClick => &self.triple_click,
            ButtonEvent::PressLong => &self.press_long,
        }
    }

    const fn slot_mut(&mut self, event: ButtonEvent) -> &mut Option<Handler> {
        match event {
            ButtonEvent::PressDown => &mut self.press_down,
            ButtonEvent::PressUp => &mut self.press_up,
            ButtonEvent::PressRepeat => &mut self.press_repeat,
            ButtonEvent::SingleClick => &mut self.single_click,
            ButtonEvent::DoubleClick => &mut self.double_click,
            ButtonEvent::TripleClick => &mut self.triple_click,
            ButtonEvent::PressLong => &mut self.press_long,
        }
    }

    /// Installs `handler` for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOccupied`] if a handler is already attached for `event`.
    pub fn attach(&mut self, event: ButtonEvent, handler: Handler) -> Result<()> {
        let slot = self.slot_mut(event);
        if slot.is_some() {
            return Err(Error::SlotOccupied { event });
        }
        *slot = Some(handler);
        Ok(())
    }

    /// Removes and returns the handler for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotEmpty`] if nothing is attached for `event`.
    pub fn detach(&mut self, event: ButtonEvent) -> Result<Handler> {
        self.slot_mut(event).take().ok_or(Error::SlotEmpty { event })
    }

    /// Returns whether a handler is attached for `event`.
    #[must_use]
    pub const fn is_attached(&self, event: ButtonEvent) -> bool {
        self.slot(event).is_some()
    }

    /// Returns the handler attached for `event`, if any.
    #[must_use]
    pub const fn get(&self, event: ButtonEvent) -> Option<Handler> {
        *self.slot(event)
    }

    /// Returns the first event in `chain` that has a handler attached.
    #[must_use]
    pub fn first_attached(&self, chain: &[ButtonEvent]) -> Option<ButtonEvent> {
        chain
            .iter()
            .copied()
            .find(|&event| self.is_attached(event))
    }
}

/// Events tried, in order, when a multi-click window closes after `repeat_count` re-presses.
pub(crate) const fn click_fallback_chain(repeat_count: u8) -> &'static [ButtonEvent] {
    match repeat_count {
        0 => &[ButtonEvent::SingleClick, ButtonEvent::PressUp],
        1 => &[ButtonEvent::DoubleClick, ButtonEvent::SingleClick],
        2 => &[
            ButtonEvent::TripleClick,
            ButtonEvent::DoubleClick,
            ButtonEvent::SingleClick,
        ],
        _ => &[ButtonEvent::PressRepeat],
    }
}
