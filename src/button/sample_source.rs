//! Where a [`Button`](super::Button) gets its raw samples.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, PinState};

/// A raw input read exactly once per tick.
///
/// Any `FnMut() -> PinState` closure is a sample source. Use [`PinSource`] to read an
/// [`embedded_hal`] input pin directly.
pub trait SampleSource {
    /// Error reported when the input cannot be read.
    type Error;

    /// Reads the current signal level. Must return promptly and must not block.
    ///
    /// # Errors
    ///
    /// Returns the source's own error when the input cannot be read.
    fn read_sample(&mut self) -> Result<PinState, Self::Error>;
}

impl<F> SampleSource for F
where
    F: FnMut() -> PinState,
{
    type Error = Infallible;

    fn read_sample(&mut self) -> Result<PinState, Self::Error> {
        Ok(self())
    }
}

/// Samples an [`InputPin`].
///
/// # Example
///
/// ```rust
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, InputPin};
/// # struct Pin;
/// # impl ErrorType for Pin { type Error = Infallible; }
/// # impl InputPin for Pin {
/// #     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(false) }
/// #     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(true) }
/// # }
/// use tick_button::button::{Button, ButtonConfig, PinSource};
///
/// let mut button = Button::new(ButtonConfig::default(), PinSource::new(Pin));
/// assert_eq!(button.exec(), Ok(0));
/// ```
#[derive(Debug)]
pub struct PinSource<P> {
    pin: P,
}

impl<P: InputPin> PinSource<P> {
    /// Wraps `pin`.
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> SampleSource for PinSource<P> {
    type Error = P::Error;

    fn read_sample(&mut self) -> Result<PinState, Self::Error> {
        self.pin.is_high().map(PinState::from)
    }
}
