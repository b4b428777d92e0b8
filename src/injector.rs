//! Synthetic key injection sequencing.
//!
//! The actual "synthesize a key event" capability belongs to an external
//! primitive behind the [`InjectKey`] trait. [`KeySequencer`] turns a
//! "tap key K while holding modifiers M1..Mn" request into the correctly
//! ordered primitive calls: modifiers down first-to-last, the tap, then
//! modifiers up last-to-first. Reverse release mirrors physical chord release
//! and avoids OS-level modifier-state ambiguity when modifiers overlap.
//!
//! All operations are fire-and-forget: they do not wait for the OS to process
//! the injected events, and injected events re-enter the hook as ordinary raw
//! records with no causal link back to the call that produced them.

use crate::error::HookError;

// ---------------------------------------------------------------------------
// Injection primitive seam
// ---------------------------------------------------------------------------

/// How a single injection call moves the key.
///
/// Wire values match the hook protocol: tap = 0, down = 1, up = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToggle {
    /// Press and release in one call.
    Tap = 0,
    /// Press only.
    Down = 1,
    /// Release only.
    Up = 2,
}

/// The external injection primitive.
///
/// Implementations may fail immediately (e.g. insufficient OS permission);
/// such failures surface to the caller of the specific sequencer operation
/// and must be treated as non-fatal to the process.
pub trait InjectKey {
    fn inject(&self, code: u16, toggle: KeyToggle) -> Result<(), HookError>;
}

// ---------------------------------------------------------------------------
// Sequencer
// ---------------------------------------------------------------------------

/// Orders chord injections over an [`InjectKey`] backend.
///
/// Stateless between calls: each request builds its sequence, issues it, and
/// retains nothing. Modifier state bookkeeping is left to the OS.
pub struct KeySequencer<I> {
    backend: I,
}

impl<I: InjectKey> KeySequencer<I> {
    pub fn new(backend: I) -> Self {
        Self { backend }
    }

    /// Taps `key` while holding `modifiers`.
    ///
    /// With no modifiers this is a single tap injection. Otherwise modifiers
    /// go down in the given order, the key is tapped, and the modifiers come
    /// up in reverse order.
    ///
    /// If a step fails, already-pressed modifiers are not rolled back; the
    /// error is returned as-is and the caller decides how to recover.
    pub fn tap(&self, key: u16, modifiers: &[u16]) -> Result<(), HookError> {
        if modifiers.is_empty() {
            return self.backend.inject(key, KeyToggle::Tap);
        }

        for &modifier in modifiers {
            self.backend.inject(modifier, KeyToggle::Down)?;
        }
        self.backend.inject(key, KeyToggle::Tap)?;
        for &modifier in modifiers.iter().rev() {
            self.backend.inject(modifier, KeyToggle::Up)?;
        }
        Ok(())
    }

    /// Issues a single down-only or up-only injection, for manual
    /// press-and-hold sequences outside [`tap`](Self::tap).
    pub fn toggle(&self, key: u16, toggle: KeyToggle) -> Result<(), HookError> {
        self.backend.inject(key, toggle)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
