//! Process-wide input event hook: canonical event dispatch and synthetic key
//! injection.
//!
//! An external OS-level hook component (behind the [`EventSource`] seam)
//! delivers raw records; this crate normalizes them into a canonical event
//! taxonomy and fans them out through typed subscription channels. On the
//! outbound side, [`KeySequencer`] orders multi-key chord injections over an
//! external [`InjectKey`] primitive.
//!
//! ```no_run
//! use inputhook::{Channel, ChannelSource, Dispatcher, InputEvent};
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.on(Channel::KeyDown, |event| {
//!     if let InputEvent::Keyboard(key) = event {
//!         println!("keycode {} pressed", key.keycode);
//!     }
//! });
//!
//! let source = ChannelSource::new();
//! let sender = source.sender(); // hand this to the native hook shim
//! dispatcher.start(Box::new(source))?;
//! # let _ = sender;
//! # Ok::<(), inputhook::HookError>(())
//! ```

mod dispatcher;
mod error;
mod event;
mod injector;
pub mod keycodes;
pub mod raw;
mod source;

pub use dispatcher::{hook, Dispatcher, ListenerHandle};
pub use error::HookError;
pub use event::{
    Channel, EventKind, InputEvent, KeyboardEvent, Modifiers, MouseEvent, WheelDirection,
    WheelEvent,
};
pub use injector::{InjectKey, KeySequencer, KeyToggle};
pub use keycodes::Key;
pub use raw::{normalize, RawEvent};
pub use source::{ChannelSource, EventSource, RawCallback, RawEventSender};
