//! Error Types
//!
//! The main error type [`MarionetteError`] covers all failure modes of the
//! crate, and makes one distinction that callers are expected to rely on:
//! **cancellation is a signal, not a fault**. A command that ends because the
//! user pressed stop completes with [`MarionetteError::Cancelled`], and
//! [`MarionetteError::is_cancelled`] lets callers separate "stopped on
//! purpose" from "something broke" without string matching.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, MarionetteError>`.

use thiserror::Error;

/// The main error type for the marionette crate.
#[derive(Error, Debug)]
pub enum MarionetteError {
    // ========================================================================
    // Control-flow signals
    // ========================================================================
    /// The in-flight operation was deliberately stopped.
    ///
    /// This is the distinguished cancellation signal: composite operations
    /// propagate it upward unchanged instead of wrapping it in a generic
    /// failure.
    #[error("operation cancelled by stop request")]
    Cancelled,

    /// The sequencer is in the stopped state; a reset is required before new
    /// commands may be issued.
    #[error("sequencer is stopped; call reset() before issuing new commands")]
    Stopped,

    // ========================================================================
    // Caller contract violations
    // ========================================================================
    /// A numeric argument was outside its declared range or not finite.
    ///
    /// Validated at the sequencer's public boundary so the failure is
    /// attributable to the offending call site.
    #[error("invalid command argument: {0}")]
    InvalidCommand(String),

    /// An operation that requires a loaded model was called without one.
    #[error("no model is loaded")]
    NoModel,

    // ========================================================================
    // Asset loading
    // ========================================================================
    /// The model asset could not be loaded or parsed.
    #[error("model load failed: {0}")]
    LoadFailed(String),

    /// glTF parsing or structure error.
    #[cfg(feature = "gltf")]
    #[error("glTF error: {0}")]
    Gltf(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Serialization
    // ========================================================================
    /// JSON (de)serialization error for persisted records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarionetteError {
    /// Returns `true` if this error is the cancellation signal.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MarionetteError::Cancelled)
    }
}

#[cfg(feature = "gltf")]
impl From<gltf::Error> for MarionetteError {
    fn from(err: gltf::Error) -> Self {
        MarionetteError::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
