//! Concrete capability implementations for the terminal host.
//!
//! Sound and window control shell out to system tools; notifications go
//! through the desktop notification service. Everything here is
//! best-effort: a failure is reported to the caller, logged there, and the
//! countdown keeps going without the side effect.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use jopldoro_core::{
    CapabilityError, Intent, Notice, Notifier, SoundCue, SoundPlayer, WindowControl,
};
use notify_rust::Notification;
use tracing::{debug, warn};

/// Default cue files from the freedesktop sound theme.
const DEFAULT_BELL: &str = "/usr/share/sounds/freedesktop/stereo/bell.oga";
const DEFAULT_START: &str = "/usr/share/sounds/freedesktop/stereo/complete.oga";

/// Audio players tried in order for cue playback.
const PLAYERS: [&str; 2] = ["paplay", "aplay"];

/// The host's capability set, wired from the CLI flags.
pub struct Effects {
    no_sound: bool,
    sound: Box<dyn SoundPlayer>,
    notifier: Box<dyn Notifier>,
    window: Box<dyn WindowControl>,
}

impl Effects {
    pub fn new(no_sound: bool, bell: Option<PathBuf>, start: Option<PathBuf>) -> Self {
        Self {
            no_sound,
            sound: Box::new(SystemSoundPlayer::new(bell, start)),
            notifier: Box::new(DesktopNotifier),
            window: Box::new(HyprlandWindow),
        }
    }

    pub fn window(&self) -> &dyn WindowControl {
        self.window.as_ref()
    }

    /// Carry out one timer intent. Failures are logged, never fatal.
    pub fn execute(&self, intent: &Intent) {
        match intent {
            Intent::PlaySound { cue } => {
                if self.no_sound {
                    debug!("sound disabled; skipping {cue:?} cue");
                } else if let Err(e) = self.sound.play(*cue) {
                    warn!("sound cue failed: {e}");
                }
            }
            Intent::Notify { notice } => {
                if let Err(e) = self.notifier.notify(notice) {
                    warn!("notification failed: {e}");
                }
            }
        }
    }
}

/// Log, at startup, which capability tools are missing. The session still
/// runs - side effects are best-effort - but the user learns early.
pub fn probe_tools(no_sound: bool) {
    if !no_sound && !PLAYERS.iter().any(|p| tool_available(p)) {
        warn!(
            "no audio player on PATH (tried {}); sound cues will fail",
            PLAYERS.join(", ")
        );
    }
    if !tool_available("hyprctl") {
        warn!("hyprctl not found; pin and close will be unavailable");
    }
}

fn tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Plays cues by spawning a system audio player, detached.
pub struct SystemSoundPlayer {
    bell: PathBuf,
    start: PathBuf,
}

impl SystemSoundPlayer {
    pub fn new(bell: Option<PathBuf>, start: Option<PathBuf>) -> Self {
        Self {
            bell: bell.unwrap_or_else(|| PathBuf::from(DEFAULT_BELL)),
            start: start.unwrap_or_else(|| PathBuf::from(DEFAULT_START)),
        }
    }

    fn cue_file(&self, cue: SoundCue) -> &Path {
        match cue {
            SoundCue::Bell => &self.bell,
            SoundCue::Start => &self.start,
        }
    }
}

impl SoundPlayer for SystemSoundPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), CapabilityError> {
        let file = self.cue_file(cue);
        if !file.exists() {
            return Err(CapabilityError::Dispatch {
                capability: "sound".into(),
                message: format!("cue file {} not found", file.display()),
            });
        }
        for player in PLAYERS {
            match Command::new(player)
                .arg(file)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                // Fire-and-forget: the child plays on its own while the
                // countdown continues.
                Ok(_child) => {
                    debug!("playing {cue:?} cue via {player}");
                    return Ok(());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(CapabilityError::Spawn {
                        command: player.to_string(),
                        source: e,
                    })
                }
            }
        }
        Err(CapabilityError::Dispatch {
            capability: "sound".into(),
            message: format!("no audio player found (tried {})", PLAYERS.join(", ")),
        })
    }
}

/// Desktop notifications over the session notification service.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), CapabilityError> {
        Notification::new()
            .summary(notice.title)
            .body(notice.body)
            .timeout(0) // No auto-dismiss
            .show()
            .map_err(|e| CapabilityError::Dispatch {
                capability: "notification".into(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Window control through the Hyprland IPC tool.
pub struct HyprlandWindow;

impl HyprlandWindow {
    fn dispatch(&self, args: &[&str]) -> Result<(), CapabilityError> {
        let out = Command::new("hyprctl")
            .args(args)
            .output()
            .map_err(|e| CapabilityError::Spawn {
                command: "hyprctl".into(),
                source: e,
            })?;
        if !out.status.success() {
            let err = String::from_utf8_lossy(&out.stderr);
            return Err(CapabilityError::CommandFailed {
                command: format!("hyprctl {}", args.join(" ")),
                detail: err.trim().to_string(),
            });
        }
        Ok(())
    }
}

impl WindowControl for HyprlandWindow {
    fn set_always_on_top(&self, enabled: bool) -> Result<(), CapabilityError> {
        // The pin dispatcher toggles. The session only ever requests the
        // opposite of its tracked state, so one toggle lands on `enabled`.
        debug!("pinning window: {enabled}");
        self.dispatch(&["dispatch", "pin"])
    }

    fn close(&self) -> Result<(), CapabilityError> {
        self.dispatch(&["dispatch", "killactive"])
    }
}
