use serde::Serialize;

use crate::events::{Notice, SoundCue, NOTIFICATION_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Work,
    Break,
}

impl Period {
    /// Fixed period length in seconds.
    pub fn duration_secs(self) -> u64 {
        match self {
            Period::Work => 25 * 60,
            Period::Break => 5 * 60,
        }
    }

    /// The period that follows this one.
    pub fn other(self) -> Period {
        match self {
            Period::Work => Period::Break,
            Period::Break => Period::Work,
        }
    }

    /// Display name for host front ends.
    pub fn label(self) -> &'static str {
        match self {
            Period::Work => "Work",
            Period::Break => "Break",
        }
    }

    /// Sound cue announcing that this period has finished.
    ///
    /// A finished break rings the bell; finished work plays the start cue.
    pub fn completion_cue(self) -> SoundCue {
        match self {
            Period::Work => SoundCue::Start,
            Period::Break => SoundCue::Bell,
        }
    }

    /// Notification announcing that this period has finished.
    pub fn completion_notice(self) -> Notice {
        match self {
            Period::Work => Notice {
                title: NOTIFICATION_TITLE,
                body: "Time is up! Take a 5-minute break.",
            },
            Period::Break => Notice {
                title: NOTIFICATION_TITLE,
                body: "Break is over! Back to work!",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_fixed() {
        assert_eq!(Period::Work.duration_secs(), 1500);
        assert_eq!(Period::Break.duration_secs(), 300);
    }

    #[test]
    fn other_flips_between_the_two_kinds() {
        assert_eq!(Period::Work.other(), Period::Break);
        assert_eq!(Period::Break.other(), Period::Work);
    }

    #[test]
    fn completion_cues_keep_their_roles() {
        assert_eq!(Period::Work.completion_cue(), SoundCue::Start);
        assert_eq!(Period::Break.completion_cue(), SoundCue::Bell);
    }

    #[test]
    fn completion_notices_carry_fixed_text() {
        let work = Period::Work.completion_notice();
        assert_eq!(work.title, "JOPLdoro");
        assert_eq!(work.body, "Time is up! Take a 5-minute break.");

        let brk = Period::Break.completion_notice();
        assert_eq!(brk.title, "JOPLdoro");
        assert_eq!(brk.body, "Break is over! Back to work!");
    }
}
