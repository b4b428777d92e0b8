//! Raw event source seam.
//!
//! The OS-level hook itself is an external collaborator. It reaches this
//! crate through the [`EventSource`] trait: one callback registration on
//! `start()`, delivery ceases after `stop()`. The dispatcher owns the
//! lifecycle and installs exactly one callback per source.
//!
//! [`ChannelSource`] is the bundled implementation for native shims that push
//! records from their own thread: `start()` spawns a delivery thread draining
//! an mpsc channel, `stop()` posts a shutdown sentinel and joins. Records
//! queued before the sentinel are still delivered (stop is best effort, no
//! synchronous flush).

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::error::HookError;
use crate::raw::RawEvent;

/// Callback shape a source invokes once per delivered raw record.
pub type RawCallback = Box<dyn Fn(RawEvent) + Send>;

/// A running raw-event delivery mechanism.
///
/// Implementations must invoke the callback sequentially: one record fully
/// handled before the next is delivered.
pub trait EventSource: Send {
    /// Registers the single delivery callback and begins delivering events.
    fn start(&mut self, callback: RawCallback) -> Result<(), HookError>;

    /// Instructs the source to cease delivering. Records already scheduled
    /// may still arrive; cancellation is best effort.
    fn stop(&mut self) -> Result<(), HookError>;
}

// ---------------------------------------------------------------------------
// Channel-backed source
// ---------------------------------------------------------------------------

enum Delivery {
    Event(RawEvent),
    Shutdown,
}

/// Cloneable producer handle for a [`ChannelSource`].
///
/// Native shims (or tests) push raw records through this from any thread.
/// Records sent after the source stopped are silently discarded.
#[derive(Clone)]
pub struct RawEventSender {
    tx: Sender<Delivery>,
}

impl RawEventSender {
    /// Queues one raw record for delivery.
    pub fn send(&self, raw: RawEvent) {
        let _ = self.tx.send(Delivery::Event(raw));
    }
}

/// mpsc-backed [`EventSource`] with a background delivery thread.
///
/// Single use: once stopped, the receiving side is gone and the source cannot
/// be restarted. Attach a fresh source to the dispatcher instead.
pub struct ChannelSource {
    tx: Sender<Delivery>,
    rx: Option<Receiver<Delivery>>,
    thread: Option<JoinHandle<()>>,
}

impl ChannelSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx: Some(rx),
            thread: None,
        }
    }

    /// Returns a producer handle for pushing raw records into this source.
    pub fn sender(&self) -> RawEventSender {
        RawEventSender {
            tx: self.tx.clone(),
        }
    }
}

impl Default for ChannelSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for ChannelSource {
    fn start(&mut self, callback: RawCallback) -> Result<(), HookError> {
        let rx = self
            .rx
            .take()
            .ok_or_else(|| HookError::Source("source is already running or spent".into()))?;

        let thread = thread::spawn(move || {
            log::info!("source: delivery thread active");
            while let Ok(msg) = rx.recv() {
                match msg {
                    Delivery::Event(raw) => callback(raw),
                    Delivery::Shutdown => break,
                }
            }
            log::info!("source: delivery thread exited");
        });

        self.thread = Some(thread);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), HookError> {
        // Sentinel after any queued records: those are still delivered.
        let _ = self.tx.send(Delivery::Shutdown);
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
        Ok(())
    }
}

impl Drop for ChannelSource {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
