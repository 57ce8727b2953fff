use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::timer::Period;

/// Summary line shared by every period-boundary notification.
pub const NOTIFICATION_TITLE: &str = "JOPLdoro";

/// Short audio cue played at a period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Bell,
    Start,
}

/// Fixed-text desktop notification raised at a period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

/// A side effect the timer asks its host to carry out.
///
/// The state machine never performs I/O itself: crossing a period boundary
/// emits these, in order, and the host executes them through its
/// capabilities. Nothing deserializes intents - they exist for the current
/// session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Intent {
    PlaySound { cue: SoundCue },
    Notify { notice: Notice },
}

/// Point-in-time view of the timer, for status reporting.
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub period: Period,
    pub running: bool,
    pub remaining_secs: u64,
    pub total_secs: u64,
    /// Remaining time as zero-padded `MM:SS`.
    pub display: String,
    pub at: DateTime<Utc>,
}
