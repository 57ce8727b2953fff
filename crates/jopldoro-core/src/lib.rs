//! # jopldoro Core Library
//!
//! This library provides the core logic for jopldoro, a minimal work/break
//! interval timer. It implements a host-driven philosophy: the timer is a
//! deterministic state machine with no threads, clocks, or I/O of its own,
//! and any front end - the terminal session in jopldoro-cli, or a widget
//! shell - drives it and carries out the side effects it asks for.
//!
//! ## Architecture
//!
//! - **Period Timer**: a tick-driven state machine; the host calls `tick()`
//!   once per second while the countdown is running
//! - **Intents**: period boundaries emit sound/notification intents for the
//!   host to execute; the core never touches audio or notification APIs
//! - **Capabilities**: traits a host implements for sound playback, desktop
//!   notifications, and window control
//!
//! ## Key Components
//!
//! - [`PeriodTimer`]: core timer state machine
//! - [`Intent`]: side effects requested at period boundaries
//! - [`SoundPlayer`], [`Notifier`], [`WindowControl`]: host capability traits

pub mod timer;
pub mod events;
pub mod capabilities;
pub mod error;

pub use timer::{format_clock, Period, PeriodTimer};
pub use events::{Intent, Notice, SoundCue, TimerSnapshot, NOTIFICATION_TITLE};
pub use capabilities::{Notifier, SoundPlayer, WindowControl};
pub use error::CapabilityError;
