#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use tick_button::button::{
    Button, ButtonConfig, ButtonEvent, PinSource, PinState, PressedTo, SharedButton, tick_forever,
};
use {defmt_rtt as _, panic_probe as _};

type DemoButton = SharedButton<PinSource<Input<'static>>>;

/// One tick every 10 ms: 1 tick debounce, 500 ms long press, 250 ms multi-click window.
const TICK: Duration = Duration::from_millis(10);
const CONFIG: ButtonConfig = ButtonConfig::new(PressedTo::Ground, 1, 50, 25);

static BUTTON: StaticCell<DemoButton> = StaticCell::new();
static GESTURE: Signal<CriticalSectionRawMutex, ButtonEvent> = Signal::new();

fn on_press_up(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::PressUp);
    0
}

fn on_single_click(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::SingleClick);
    0
}

fn on_double_click(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::DoubleClick);
    0
}

fn on_triple_click(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::TripleClick);
    0
}

fn on_press_repeat(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::PressRepeat);
    0
}

fn on_press_long(_sample: PinState) -> i32 {
    GESTURE.signal(ButtonEvent::PressLong);
    0
}

#[embassy_executor::task]
async fn tick_task(button: &'static DemoButton) -> ! {
    tick_forever(button, TICK).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    // Button wired from PIN_13 to GND, so the internal pull-up keeps it HIGH when released.
    let input = Input::new(p.PIN_13, Pull::Up);
    let button = BUTTON.init(SharedButton::new(Button::new(CONFIG, PinSource::new(input))));

    for (event, handler) in [
        (ButtonEvent::PressUp, on_press_up as fn(PinState) -> i32),
        (ButtonEvent::SingleClick, on_single_click),
        (ButtonEvent::DoubleClick, on_double_click),
        (ButtonEvent::TripleClick, on_triple_click),
        (ButtonEvent::PressRepeat, on_press_repeat),
        (ButtonEvent::PressLong, on_press_long),
    ] {
        defmt::unwrap!(button.attach(event, handler));
    }

    defmt::unwrap!(spawner.spawn(tick_task(button)));

    // Blink the on-board LED once per click; stay lit while a long press is held.
    let mut led = Output::new(p.PIN_25, Level::Low);
    loop {
        let event = GESTURE.wait().await;
        defmt::info!("gesture: {}", event);
        let blinks = match event {
            ButtonEvent::PressLong => {
                led.set_high();
                continue;
            }
            ButtonEvent::PressUp => {
                led.set_low();
                continue;
            }
            ButtonEvent::SingleClick => 1,
            ButtonEvent::DoubleClick => 2,
            ButtonEvent::TripleClick => 3,
            ButtonEvent::PressRepeat | ButtonEvent::PressDown => 5,
        };
        for _ in 0..blinks {
            led.set_high();
            Timer::after(Duration::from_millis(100)).await;
            led.set_low();
            Timer::after(Duration::from_millis(100)).await;
        }
    }
}
