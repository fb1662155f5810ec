//! Crate-wide error type.

use derive_more::{Display, Error};

use crate::button::ButtonEvent;

/// Errors returned by [`Button`](crate::button::Button) and
/// [`SharedButton`](crate::button::SharedButton).
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The button was built without a sample source.
    #[display("button has no sample source")]
    MissingSampleSource,

    /// A callback is already attached for this event.
    #[display("a callback is already attached for {event:?}")]
    SlotOccupied {
        /// The event whose slot is taken.
        event: ButtonEvent,
    },

    /// No callback is attached for this event.
    #[display("no callback is attached for {event:?}")]
    SlotEmpty {
        /// The event whose slot is empty.
        event: ButtonEvent,
    },

    /// The sample source failed to read the input.
    #[display("sample source failed to read the input")]
    InputRead,

    /// The shared button is already borrowed, usually by a callback calling back into it.
    #[display("shared button is already in use")]
    Busy,
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
