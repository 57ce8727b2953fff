//! Period timer implementation.
//!
//! The timer is a tick-driven state machine. It keeps no internal threads
//! or clocks - the host is responsible for calling `tick()` once per second
//! while the countdown is running, and for stopping the cadence whenever it
//! stops (pause, skip, or a period boundary).
//!
//! ## State Transitions
//!
//! ```text
//! (Work, Paused) <-> (Work, Running) --boundary--> (Break, Paused)
//! (Break, Paused) <-> (Break, Running) --boundary--> (Work, Paused)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = PeriodTimer::new();
//! timer.start();
//! // Once per second while running:
//! for intent in timer.tick() {
//!     // hand to the SoundPlayer / Notifier capabilities
//! }
//! ```

use chrono::Utc;

use super::period::Period;
use crate::events::{Intent, TimerSnapshot};

/// Core period timer.
///
/// Counts down whole seconds within the current period. Crossing a period
/// boundary emits the side-effect intents for the host to execute; every
/// other operation is silent.
#[derive(Debug, Clone)]
pub struct PeriodTimer {
    period: Period,
    /// Seconds left in the current period. Never rests at 0: the tick that
    /// would reach 0 rolls into the next period in the same step.
    remaining_secs: u64,
    running: bool,
}

impl PeriodTimer {
    /// Create a timer at the start of a work period, paused.
    pub fn new() -> Self {
        Self {
            period: Period::Work,
            remaining_secs: Period::Work.duration_secs(),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Full length of the current period in seconds.
    pub fn total_secs(&self) -> u64 {
        self.period.duration_secs()
    }

    /// Remaining time as zero-padded `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Build a full state snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            period: self.period,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            display: self.format_remaining(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Let the countdown run. Idempotent; emits nothing. The host begins
    /// delivering one-second ticks once this returns.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt the countdown. Idempotent; emits nothing. The host stops
    /// delivering ticks.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause if running, start if paused. Backs the single play/pause
    /// control a front end exposes.
    pub fn toggle_running(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Safe to call spuriously: while paused this is a no-op and emits
    /// nothing. The tick that exhausts the period rolls into the other
    /// period atomically - the period flips to the other kind at its full
    /// length and the countdown stops - and returns the completed period's
    /// sound and notification intents, in that order.
    pub fn tick(&mut self) -> Vec<Intent> {
        if !self.running {
            return Vec::new();
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return Vec::new();
        }
        let completed = self.period;
        self.roll_over();
        vec![
            Intent::PlaySound {
                cue: completed.completion_cue(),
            },
            Intent::Notify {
                notice: completed.completion_notice(),
            },
        ]
    }

    /// Jump to the other period immediately, whatever the running state.
    /// Silent: no sound, no notification. Forces the countdown to paused,
    /// so the host stops delivering ticks.
    pub fn skip(&mut self) {
        self.roll_over();
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Flip to the other period at its full length and stop the countdown.
    fn roll_over(&mut self) {
        self.period = self.period.other();
        self.remaining_secs = self.period.duration_secs();
        self.running = false;
    }
}

impl Default for PeriodTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-padded `MM:SS` for a whole-second count.
///
/// Accepts 0 ("00:00") even though stored timer state never rests there.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
