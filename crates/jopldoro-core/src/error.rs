//! Error types for the capability boundary.
//!
//! The timer state machine itself cannot fail - it is pure state
//! transformation over integers and enums. Errors only arise in the host
//! capabilities (sound, notifications, window control), and hosts are
//! expected to log them and keep the countdown going.

use thiserror::Error;

/// Failure reported by a host capability.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Could not spawn the helper command backing a capability.
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper command ran but reported failure.
    #[error("{command} failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// A capability backend refused or dropped the request.
    #[error("{capability} dispatch failed: {message}")]
    Dispatch { capability: String, message: String },
}

/// Result type alias for capability calls.
pub type Result<T, E = CapabilityError> = std::result::Result<T, E>;
