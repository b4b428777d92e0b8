//! Crate-wide error taxonomy.
//!
//! Two classes matter to callers: normalization failures, which the dispatch
//! loop recovers from locally by dropping the record, and injection failures,
//! which surface synchronously to the `tap`/`toggle` caller and nowhere else.

use thiserror::Error;

/// Errors produced by the hook layer.
#[derive(Debug, Error)]
pub enum HookError {
    /// The raw record's type discriminant matches none of the recognized
    /// event kinds. Non-fatal: the dispatcher drops the record and continues.
    #[error("unrecognized raw event type {0}")]
    UnrecognizedEventType(u32),

    /// The external injection primitive refused a call. Surfaced only to the
    /// caller of the specific `tap`/`toggle` that failed; never retried.
    #[error("key injection rejected: {0}")]
    InjectionRejected(String),

    /// The OS denied access (e.g. missing Accessibility permission for the
    /// injection primitive on macOS).
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The raw event source failed to start or deliver.
    #[error("event source error: {0}")]
    Source(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
