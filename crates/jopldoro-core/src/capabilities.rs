//! Host capability contracts.
//!
//! The timer core performs no I/O. Hosts implement these traits and route
//! the intents emitted by [`PeriodTimer::tick`](crate::PeriodTimer::tick)
//! through them. All calls are fire-and-forget from the timer's point of
//! view: the host logs failures and the countdown continues without the
//! side effect.

use crate::error::Result;
use crate::events::{Notice, SoundCue};

/// Plays a short audio cue. Playback resources belong to the host.
pub trait SoundPlayer: Send + Sync {
    fn play(&self, cue: SoundCue) -> Result<()>;
}

/// Delivers a desktop notification.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice) -> Result<()>;
}

/// Window-manager surface for the hosting window: pin on top and close.
pub trait WindowControl: Send + Sync {
    /// Ask the OS to set the always-on-top flag to `enabled`.
    ///
    /// Hosts track the flag themselves and must flip their tracked value
    /// only after this returns `Ok`, so the tracked state never runs ahead
    /// of the OS state.
    fn set_always_on_top(&self, enabled: bool) -> Result<()>;

    /// Ask the OS to close the window hosting the session.
    fn close(&self) -> Result<()>;
}
