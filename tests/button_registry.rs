#![allow(missing_docs)]
//! Host-level tests for callback registration, construction and the shared wrapper.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use tick_button::Error;
use tick_button::button::{Button, ButtonConfig, ButtonEvent, PinState, PressedTo, SharedButton};

fn released() -> PinState {
    PinState::Low
}

fn pressed() -> PinState {
    PinState::High
}

fn zero(_: PinState) -> i32 {
    0
}

fn minus_one(_: PinState) -> i32 {
    -1
}

const CONFIG: ButtonConfig = ButtonConfig::new(PressedTo::Voltage, 0, 5, 3);

#[test]
fn attach_twice_fails() {
    let mut button = Button::new(CONFIG, released);
    button
        .attach(ButtonEvent::SingleClick, zero)
        .expect("fresh slot");
    assert_eq!(
        button.attach(ButtonEvent::SingleClick, minus_one),
        Err(Error::SlotOccupied {
            event: ButtonEvent::SingleClick
        })
    );

    // The original handler stays in place.
    let handler = button.detach(ButtonEvent::SingleClick).expect("attached");
    assert_eq!(handler(PinState::Low), 0);
}

#[test]
fn detach_never_attached_fails() {
    let mut button = Button::new(CONFIG, released);
    for event in ButtonEvent::ALL {
        assert_eq!(
            button.detach(event).err(),
            Some(Error::SlotEmpty { event })
        );
    }
}

#[test]
fn detach_frees_slot_for_reattach() {
    let mut button = Button::new(CONFIG, released);
    button.attach(ButtonEvent::PressLong, zero).expect("fresh slot");
    button.detach(ButtonEvent::PressLong).expect("attached");
    assert!(!button.callbacks().is_attached(ButtonEvent::PressLong));
    button
        .attach(ButtonEvent::PressLong, minus_one)
        .expect("slot freed");
    assert!(button.callbacks().is_attached(ButtonEvent::PressLong));
}

#[test]
fn builder_requires_sample_source() {
    let missing = Button::<fn() -> PinState>::builder(CONFIG).build();
    assert_eq!(missing.err(), Some(Error::MissingSampleSource));

    let button = Button::builder(CONFIG)
        .sample_source(released as fn() -> PinState)
        .build()
        .expect("source supplied");
    assert!(button.is_idle());
    assert_eq!(button.config(), &CONFIG);
}

#[test]
fn error_messages_name_the_event() {
    let message = Error::SlotOccupied {
        event: ButtonEvent::DoubleClick,
    }
    .to_string();
    assert!(message.contains("DoubleClick"), "{message}");
}

#[test]
fn shared_button_serializes_exec_and_attach() {
    let shared = SharedButton::new(Button::new(CONFIG, pressed));
    shared
        .attach(ButtonEvent::PressDown, minus_one)
        .expect("fresh slot");
    assert_eq!(shared.exec(), Ok(-1));

    shared.detach(ButtonEvent::PressDown).expect("attached");
    assert_eq!(shared.exec(), Ok(0));

    let button = shared.into_inner();
    assert_eq!(button.gesture_ticks(), 2);
}

static REENTRANT: SharedButton<fn() -> PinState> =
    SharedButton::new(Button::new(CONFIG, pressed as fn() -> PinState));
static REENTRY_REJECTED: AtomicBool = AtomicBool::new(false);
static REENTRY_CALLS: AtomicU32 = AtomicU32::new(0);

fn detach_self(_: PinState) -> i32 {
    REENTRY_CALLS.fetch_add(1, Ordering::SeqCst);
    let result = REENTRANT.detach(ButtonEvent::PressDown);
    REENTRY_REJECTED.store(matches!(result, Err(Error::Busy)), Ordering::SeqCst);
    0
}

#[test]
fn callback_reentry_is_busy() {
    REENTRANT
        .attach(ButtonEvent::PressDown, detach_self)
        .expect("fresh slot");

    assert_eq!(REENTRANT.exec(), Ok(0));
    assert_eq!(REENTRY_CALLS.load(Ordering::SeqCst), 1);
    assert!(REENTRY_REJECTED.load(Ordering::SeqCst));
    assert_eq!(
        REENTRANT.with(|button| button.callbacks().is_attached(ButtonEvent::PressDown)),
        Ok(true)
    );
}
