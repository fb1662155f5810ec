//! A [`Button`] that can be ticked from one context and configured from another.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::{Button, ButtonEvent, Handler, SampleSource};
use crate::{Error, Result};

/// Serializes access to a [`Button`] with a critical section.
///
/// A `Button` is not synchronized: `exec` must not overlap with itself or with
/// `attach`/`detach`. Put it in a `SharedButton` when the tick runs in a timer interrupt or
/// a separate task while the application attaches and detaches callbacks.
///
/// Callbacks run inside the critical section. A callback that calls back into the same
/// `SharedButton` gets [`Error::Busy`].
///
/// # Example
///
/// ```rust
/// use tick_button::button::{Button, ButtonConfig, ButtonEvent, PinState, SharedButton};
///
/// fn on_click(_sample: PinState) -> i32 {
///     0
/// }
///
/// # fn main() -> tick_button::Result<()> {
/// let shared = SharedButton::new(Button::new(ButtonConfig::default(), || PinState::High));
/// shared.attach(ButtonEvent::SingleClick, on_click)?;
/// assert_eq!(shared.exec()?, 0);
/// # Ok(())
/// # }
/// ```
pub struct SharedButton<S> {
    button: Mutex<CriticalSectionRawMutex, RefCell<Button<S>>>,
}

impl<S> SharedButton<S> {
    /// Wraps `button`.
    #[must_use]
    pub const fn new(button: Button<S>) -> Self {
        Self {
            button: Mutex::new(RefCell::new(button)),
        }
    }

    /// Runs `f` with exclusive access to the button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if the button is already borrowed.
    pub fn with<R>(&self, f: impl FnOnce(&mut Button<S>) -> R) -> Result<R> {
        self.button.lock(|cell| {
            let mut button = cell.try_borrow_mut().map_err(|_| Error::Busy)?;
            Ok(f(&mut *button))
        })
    }

    /// See [`Button::attach`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOccupied`] if a handler is already attached for `event`, or
    /// [`Error::Busy`] if called from inside a callback.
    pub fn attach(&self, event: ButtonEvent, handler: Handler) -> Result<()> {
        self.with(|button| button.attach(event, handler))?
    }

    /// See [`Button::detach`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotEmpty`] if nothing is attached for `event`, or
    /// [`Error::Busy`] if called from inside a callback.
    pub fn detach(&self, event: ButtonEvent) -> Result<Handler> {
        self.with(|button| button.detach(event))?
    }

    /// Consumes the wrapper, returning the button.
    pub fn into_inner(self) -> Button<S> {
        self.button.into_inner().into_inner()
    }
}

impl<S: SampleSource> SharedButton<S> {
    /// See [`Button::exec`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputRead`] if the sample source fails, or [`Error::Busy`] if called
    /// from inside a callback.
    pub fn exec(&self) -> Result<i32> {
        self.with(Button::exec)?
    }
}
