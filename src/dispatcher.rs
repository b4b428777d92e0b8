//! Publish/subscribe hub and hook lifecycle.
//!
//! The [`Dispatcher`] owns the listener registry and the attached
//! [`EventSource`]. Each canonical event fans out in two tiers: always to the
//! generic `input` channel, then to exactly one type-specific channel chosen
//! by the fixed kind lookup ([`InputEvent::channel`]). Subscribers pick their
//! granularity instead of re-filtering.
//!
//! Locking discipline per the concurrency contract: a writer lock guards
//! subscriber-list mutation (`on`/`off`), fan-out takes read access, and
//! `start`/`stop` serialize on a separate mutex around the source slot.
//! Listeners run sequentially on whichever thread the source delivers from;
//! one event is fully fanned out before the next is handled.
//!
//! A process-wide instance is available through [`hook()`] for hosts that
//! want the classic singleton surface; owning an explicit `Dispatcher` and
//! passing it around is the preferred shape.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use crate::error::HookError;
use crate::event::{Channel, InputEvent};
use crate::raw::{normalize, RawEvent};
use crate::source::EventSource;

// ---------------------------------------------------------------------------
// Listener registry
// ---------------------------------------------------------------------------

type Listener = Box<dyn Fn(&InputEvent) + Send + Sync>;

struct ListenerEntry {
    id: u64,
    callback: Listener,
}

/// Registered-listener handle; pass to [`Dispatcher::off`] to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle {
    channel: Channel,
    id: u64,
}

impl ListenerHandle {
    /// The channel this handle's listener is registered on.
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// Channel → ordered listener lists. Shared between the dispatcher and the
/// delivery callback installed on the source.
struct Registry {
    channels: RwLock<HashMap<Channel, Vec<ListenerEntry>>>,
    next_id: AtomicU64,
}

impl Registry {
    fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    fn add(&self, channel: Channel, callback: Listener) -> ListenerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut channels = self
            .channels
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        channels
            .entry(channel)
            .or_default()
            .push(ListenerEntry { id, callback });
        ListenerHandle { channel, id }
    }

    fn remove(&self, handle: ListenerHandle) -> bool {
        let mut channels = self
            .channels
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(list) = channels.get_mut(&handle.channel) else {
            return false;
        };
        let before = list.len();
        list.retain(|entry| entry.id != handle.id);
        list.len() != before
    }

    fn count(&self, channel: Channel) -> usize {
        self.channels
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&channel)
            .map_or(0, Vec::len)
    }

    /// Two-tier fan-out: generic channel first, then the kind-specific one.
    /// Listeners run in registration order under the read lock.
    fn dispatch(&self, event: &InputEvent) {
        let channels = self
            .channels
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for target in [Channel::Input, event.channel()] {
            if let Some(list) = channels.get(&target) {
                for entry in list {
                    (entry.callback)(event);
                }
            }
        }
    }

    /// Normalizes and dispatches one raw record. Unrecognized records are
    /// dropped with a debug log; a malformed record must never take down the
    /// delivery loop.
    fn feed(&self, raw: &RawEvent) {
        match normalize(raw) {
            Ok(event) => self.dispatch(&event),
            Err(err) => log::debug!("dispatch: dropping raw record: {err}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Process-wide hub: receives raw records, normalizes them, and fans the
/// canonical events out to subscribed listeners.
pub struct Dispatcher {
    registry: Arc<Registry>,
    /// `Some` while started. Mutex serializes start/stop against each other.
    source: Mutex<Option<Box<dyn EventSource>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            source: Mutex::new(None),
        }
    }

    /// Attaches a raw event source and begins receiving events.
    ///
    /// Installs the single normalize-and-fan-out callback with the source.
    /// Calling `start` while already started is an idempotent no-op: the
    /// running source is kept, the new one is dropped unstarted.
    pub fn start(&self, mut source: Box<dyn EventSource>) -> Result<(), HookError> {
        let mut slot = self
            .source
            .lock()
            .map_err(|_| HookError::Source("dispatcher state mutex poisoned".into()))?;

        if slot.is_some() {
            log::warn!("dispatcher: start called while already started; ignoring");
            return Ok(());
        }

        let registry = Arc::clone(&self.registry);
        source.start(Box::new(move |raw| registry.feed(&raw)))?;

        log::info!("dispatcher: source started");
        *slot = Some(source);
        Ok(())
    }

    /// Stops and detaches the raw event source.
    ///
    /// Best effort: records the source already queued for delivery may still
    /// reach listeners. Calling `stop` before `start` is an idempotent no-op.
    pub fn stop(&self) -> Result<(), HookError> {
        let mut slot = self
            .source
            .lock()
            .map_err(|_| HookError::Source("dispatcher state mutex poisoned".into()))?;

        match slot.take() {
            Some(mut source) => {
                source.stop()?;
                log::info!("dispatcher: source stopped");
            }
            None => log::debug!("dispatcher: stop called while not started; ignoring"),
        }
        Ok(())
    }

    /// True while a source is attached and delivering.
    pub fn is_started(&self) -> bool {
        self.source
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Registers a listener on a channel. Listeners on the same channel are
    /// invoked in registration order for every matching event.
    pub fn on<F>(&self, channel: Channel, listener: F) -> ListenerHandle
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.registry.add(channel, Box::new(listener))
    }

    /// Removes a previously registered listener. Returns false if the handle
    /// was already removed.
    pub fn off(&self, handle: ListenerHandle) -> bool {
        self.registry.remove(handle)
    }

    /// Number of listeners currently registered on a channel.
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.registry.count(channel)
    }

    /// Direct raw-record entry point for callback-style native layers that
    /// bypass the [`EventSource`] seam. Unrecognized records are dropped.
    pub fn feed(&self, raw: &RawEvent) {
        self.registry.feed(raw);
    }

    /// Publishes an already-normalized event to subscribers.
    pub fn dispatch(&self, event: &InputEvent) {
        self.registry.dispatch(event);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Process-wide instance
// ---------------------------------------------------------------------------

/// Lazily-initialized process-wide dispatcher.
///
/// Channels start empty on every process start; there is no persistence.
pub fn hook() -> &'static Dispatcher {
    static HOOK: OnceLock<Dispatcher> = OnceLock::new();
    HOOK.get_or_init(Dispatcher::new)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, Modifiers};
    use crate::raw::{
        EVENT_KEY_PRESSED, EVENT_MOUSE_MOVED, EVENT_MOUSE_PRESSED, EVENT_MOUSE_WHEEL,
    };
    use crate::source::ChannelSource;
    use std::sync::atomic::AtomicUsize;

    fn key_record(keycode: u16, ctrl: bool) -> RawEvent {
        RawEvent {
            event_type: EVENT_KEY_PRESSED,
            keycode,
            ctrl,
            ..RawEvent::default()
        }
    }

    /// Counts invocations on one channel.
    fn counting_listener(dispatcher: &Dispatcher, channel: Channel) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let probe = Arc::clone(&count);
        dispatcher.on(channel, move |_| {
            probe.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn event_reaches_input_and_specific_channel_only() {
        let dispatcher = Dispatcher::new();
        let counters: Vec<(Channel, Arc<AtomicUsize>)> = Channel::ALL
            .iter()
            .map(|&c| (c, counting_listener(&dispatcher, c)))
            .collect();

        dispatcher.feed(&key_record(65, false));

        for (channel, count) in &counters {
            let expected = match channel {
                Channel::Input | Channel::KeyDown => 1,
                _ => 0,
            };
            assert_eq!(
                count.load(Ordering::SeqCst),
                expected,
                "{}",
                channel.name()
            );
        }
    }

    #[test]
    fn every_registered_listener_fires_once_per_event() {
        let dispatcher = Dispatcher::new();
        let a = counting_listener(&dispatcher, Channel::Input);
        let b = counting_listener(&dispatcher, Channel::Input);
        let c = counting_listener(&dispatcher, Channel::Input);

        dispatcher.feed(&key_record(65, false));
        dispatcher.feed(&key_record(66, false));

        for count in [a, b, c] {
            assert_eq!(count.load(Ordering::SeqCst), 2);
        }
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let dispatcher = Dispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&order);
            dispatcher.on(Channel::Input, move |_| log.lock().unwrap().push(tag));
        }

        dispatcher.feed(&key_record(65, false));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn ctrl_a_keydown_scenario() {
        let dispatcher = Dispatcher::new();
        let keydown_seen = Arc::new(Mutex::new(Vec::new()));
        let input_seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&keydown_seen);
        dispatcher.on(Channel::KeyDown, move |e| sink.lock().unwrap().push(*e));
        let sink = Arc::clone(&input_seen);
        dispatcher.on(Channel::Input, move |e| sink.lock().unwrap().push(*e));
        let keyup_count = counting_listener(&dispatcher, Channel::KeyUp);
        let click_count = counting_listener(&dispatcher, Channel::Click);

        dispatcher.feed(&key_record(65, true));

        let keydown = keydown_seen.lock().unwrap();
        let input = input_seen.lock().unwrap();
        assert_eq!(keydown.len(), 1);
        assert_eq!(input.len(), 1);
        assert_eq!(keydown[0], input[0]);

        let InputEvent::Keyboard(e) = keydown[0] else {
            panic!("expected keyboard variant");
        };
        assert_eq!(e.kind, EventKind::KeyPressed);
        assert_eq!(e.keycode, 65);
        assert_eq!(
            e.modifiers,
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            }
        );

        assert_eq!(keyup_count.load(Ordering::SeqCst), 0);
        assert_eq!(click_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unrecognized_record_does_not_poison_dispatch() {
        let dispatcher = Dispatcher::new();
        let input_count = counting_listener(&dispatcher, Channel::Input);

        dispatcher.feed(&RawEvent {
            event_type: 999,
            ..RawEvent::default()
        });
        assert_eq!(input_count.load(Ordering::SeqCst), 0);

        dispatcher.feed(&key_record(65, false));
        assert_eq!(input_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mouse_and_wheel_records_route_to_their_channels() {
        let dispatcher = Dispatcher::new();
        let mousedown = counting_listener(&dispatcher, Channel::MouseDown);
        let mousemove = counting_listener(&dispatcher, Channel::MouseMove);
        let wheel = counting_listener(&dispatcher, Channel::Wheel);

        dispatcher.feed(&RawEvent {
            event_type: EVENT_MOUSE_PRESSED,
            ..RawEvent::default()
        });
        dispatcher.feed(&RawEvent {
            event_type: EVENT_MOUSE_MOVED,
            ..RawEvent::default()
        });
        dispatcher.feed(&RawEvent {
            event_type: EVENT_MOUSE_WHEEL,
            ..RawEvent::default()
        });

        assert_eq!(mousedown.load(Ordering::SeqCst), 1);
        assert_eq!(mousemove.load(Ordering::SeqCst), 1);
        assert_eq!(wheel.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn off_stops_further_invocations() {
        let dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));
        let probe = Arc::clone(&count);
        let handle = dispatcher.on(Channel::Input, move |_| {
            probe.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.feed(&key_record(65, false));
        assert!(dispatcher.off(handle));
        dispatcher.feed(&key_record(65, false));

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Second removal of the same handle reports failure.
        assert!(!dispatcher.off(handle));
    }

    #[test]
    fn listener_count_tracks_registration() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.listener_count(Channel::KeyDown), 0);
        let handle = dispatcher.on(Channel::KeyDown, |_| {});
        dispatcher.on(Channel::KeyDown, |_| {});
        assert_eq!(dispatcher.listener_count(Channel::KeyDown), 2);
        dispatcher.off(handle);
        assert_eq!(dispatcher.listener_count(Channel::KeyDown), 1);
    }

    #[test]
    fn start_routes_source_records_to_listeners() {
        let dispatcher = Dispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        dispatcher.on(Channel::KeyDown, move |e| {
            if let InputEvent::Keyboard(k) = e {
                sink.lock().unwrap().push(k.keycode);
            }
        });

        let source = ChannelSource::new();
        let sender = source.sender();
        dispatcher.start(Box::new(source)).unwrap();
        assert!(dispatcher.is_started());

        sender.send(key_record(65, false));
        sender.send(key_record(66, false));
        dispatcher.stop().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![65, 66]);
        assert!(!dispatcher.is_started());
    }

    #[test]
    fn double_start_keeps_the_running_source() {
        let dispatcher = Dispatcher::new();
        let first = ChannelSource::new();
        let sender = first.sender();
        dispatcher.start(Box::new(first)).unwrap();

        // Second start is a no-op; the first source keeps delivering.
        dispatcher.start(Box::new(ChannelSource::new())).unwrap();

        let count = counting_listener(&dispatcher, Channel::Input);
        sender.send(key_record(65, false));
        dispatcher.stop().unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stop_before_start_is_noop() {
        let dispatcher = Dispatcher::new();
        assert!(dispatcher.stop().is_ok());
        assert!(!dispatcher.is_started());
        // State stays usable afterwards.
        let source = ChannelSource::new();
        dispatcher.start(Box::new(source)).unwrap();
        assert!(dispatcher.stop().is_ok());
    }

    #[test]
    fn process_wide_hook_is_stable() {
        let a = hook() as *const Dispatcher;
        let b = hook() as *const Dispatcher;
        assert_eq!(a, b);
    }
}
