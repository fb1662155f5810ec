//! Tick-driven button debouncing and gesture detection.
//!
//! A [`Button`](button::Button) owns nothing but counters: an external scheduler (a timer
//! interrupt, a polling loop, or `button::tick_forever` with the `embassy` feature) calls
//! [`exec`](button::Button::exec) once per tick, the button reads one raw sample, and at most
//! a couple of registered callbacks fire.
//!
//! # Glossary
//!
//! - **Tick:** one call of [`exec`](button::Button::exec); the driver's only unit of time.
//! - **Debounce threshold:** consecutive consistent samples required to accept a press edge.
//! - **Long tick:** tick count separating a held press from a click.
//! - **Short tick:** tick count of the multi-click window that opens after a release.
//! - **Gesture:** everything from a press edge until a terminal event fires and the button is
//!   idle again.
//! - **Fallback chain:** firing a less specific event when the more specific one has no
//!   callback attached (e.g. a double click reported as a single click).
#![cfg_attr(not(test), no_std)]

pub mod button;
mod error;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
