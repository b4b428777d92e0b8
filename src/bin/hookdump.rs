//! hookdump -- dispatch demo driven by a scripted raw event session.
//!
//! Registers a pretty-printing listener on `keydown` and a JSON-lines
//! listener on `input`, replays a short synthetic session through a
//! `ChannelSource`, then runs one chord injection through a logging backend.
//! RUST_LOG=debug shows the per-record dispatch decisions.

use inputhook::keycodes::windows::key_to_vkcode;
use inputhook::raw::{
    EVENT_KEY_PRESSED, EVENT_KEY_RELEASED, EVENT_MOUSE_MOVED, EVENT_MOUSE_PRESSED,
    EVENT_MOUSE_RELEASED, EVENT_MOUSE_WHEEL, WHEEL_VERTICAL,
};
use inputhook::{
    Channel, ChannelSource, Dispatcher, HookError, InjectKey, InputEvent, Key, KeySequencer,
    KeyToggle, RawEvent,
};

/// Injection backend that logs instead of synthesizing OS events.
struct LoggingInjector;

impl InjectKey for LoggingInjector {
    fn inject(&self, code: u16, toggle: KeyToggle) -> Result<(), HookError> {
        println!("inject: code={code:#04x} {toggle:?}");
        Ok(())
    }
}

fn pretty_modifier(name: &str, state: bool) -> String {
    if state {
        format!("[{name}]")
    } else {
        format!(" {name} ")
    }
}

fn session() -> Vec<RawEvent> {
    vec![
        RawEvent {
            event_type: EVENT_KEY_PRESSED,
            time: Some(10),
            ctrl: true,
            keycode: 0x41,
            ..RawEvent::default()
        },
        RawEvent {
            event_type: EVENT_KEY_RELEASED,
            time: Some(90),
            ctrl: true,
            keycode: 0x41,
            ..RawEvent::default()
        },
        RawEvent {
            event_type: EVENT_MOUSE_MOVED,
            time: Some(120),
            x: 640,
            y: 360,
            ..RawEvent::default()
        },
        RawEvent {
            event_type: EVENT_MOUSE_PRESSED,
            time: Some(150),
            x: 640,
            y: 360,
            button: 1,
            clicks: 1,
            ..RawEvent::default()
        },
        RawEvent {
            event_type: EVENT_MOUSE_RELEASED,
            time: Some(210),
            x: 640,
            y: 360,
            button: 1,
            clicks: 1,
            ..RawEvent::default()
        },
        RawEvent {
            event_type: EVENT_MOUSE_WHEEL,
            time: Some(300),
            x: 640,
            y: 360,
            clicks: 1,
            amount: 3,
            direction: WHEEL_VERTICAL,
            rotation: -1,
            ..RawEvent::default()
        },
        // Unknown discriminant: dropped with a debug log, session continues.
        RawEvent {
            event_type: 999,
            ..RawEvent::default()
        },
    ]
}

fn main() {
    env_logger::init();
    println!("hookdump v{}", env!("CARGO_PKG_VERSION"));

    let dispatcher = Dispatcher::new();

    dispatcher.on(Channel::KeyDown, |event| {
        if let InputEvent::Keyboard(key) = event {
            println!(
                "{}{}{} keycode={}",
                pretty_modifier("ctrl", key.modifiers.ctrl),
                pretty_modifier("shift", key.modifiers.shift),
                pretty_modifier("alt", key.modifiers.alt),
                key.keycode
            );
        }
    });

    dispatcher.on(Channel::Input, |event| match serde_json::to_string(event) {
        Ok(line) => println!("{line}"),
        Err(err) => log::warn!("could not serialize event: {err}"),
    });

    let source = ChannelSource::new();
    let sender = source.sender();
    if let Err(err) = dispatcher.start(Box::new(source)) {
        eprintln!("failed to start dispatcher: {err}");
        std::process::exit(1);
    }

    for record in session() {
        sender.send(record);
    }

    // stop() joins the delivery thread, so every queued record above has been
    // fanned out by the time it returns.
    if let Err(err) = dispatcher.stop() {
        eprintln!("failed to stop dispatcher: {err}");
    }

    // Chord injection: Ctrl+Shift+C through the logging backend.
    let sequencer = KeySequencer::new(LoggingInjector);
    let modifiers = [
        key_to_vkcode(Key::CtrlLeft),
        key_to_vkcode(Key::ShiftLeft),
    ];
    if let Err(err) = sequencer.tap(key_to_vkcode(Key::C), &modifiers) {
        eprintln!("injection failed: {err}");
    }
}
