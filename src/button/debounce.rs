//! Consecutive-sample debounce filter.

/// Accepts a press edge once enough consecutive pressed samples have been seen.
///
/// The edge fires once per physical press. It cannot fire again until a released sample
/// clears the filter and the pressed level is re-established.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Debouncer {
    counter: u8,
    active: bool,
}

impl Debouncer {
    pub(crate) const fn new() -> Self {
        Self {
            counter: 0,
            active: false,
        }
    }

    /// Feeds one sample. Returns `true` on the tick the press edge is accepted.
    pub(crate) fn update(&mut self, pressed: bool, threshold: u8) -> bool {
        if !pressed {
            self.counter = 0;
            self.active = false;
            return false;
        }

        if self.counter < threshold {
            self.counter = self.counter.saturating_add(1);
        }

        if self.counter >= threshold && !self.active {
            self.active = true;
            self.counter = 0;
            return true;
        }
        false
    }

    pub(crate) const fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) const fn set_inactive(&mut self) {
        self.active = false;
    }

    #[cfg(test)]
    pub(crate) const fn counter(&self) -> u8 {
        self.counter
    }
}
