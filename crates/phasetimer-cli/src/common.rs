use clap::Subcommand;

use phasetimer_core::{
    IntervalConfig, MeditationConfig, PomodoroConfig, PresetStore, SessionType,
    TimerPreset, TrainingConfig,
};

/// Wall clock in milliseconds since the Unix epoch, fed to the engine as
/// its `now_ms` collaborator.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Timer mode selection shared by `run` and `preview`.
#[derive(Subcommand, Clone)]
pub enum Mode {
    /// Interval/HIIT workout (durations in seconds)
    Interval {
        /// Get-ready countdown before the first set (0 skips it)
        #[arg(long, default_value_t = 10)]
        ready: i64,
        #[arg(long, default_value_t = 30)]
        work: i64,
        #[arg(long, default_value_t = 10)]
        rest: i64,
        #[arg(long, default_value_t = 8)]
        sets: u32,
    },
    /// Training timer: rest follows every set including the last (seconds)
    Training {
        #[arg(long, default_value_t = 10)]
        ready: i64,
        #[arg(long, default_value_t = 30)]
        exercise: i64,
        #[arg(long, default_value_t = 10)]
        rest: i64,
        #[arg(long, default_value_t = 3)]
        sets: u32,
    },
    /// Pomodoro focus sessions (durations in minutes)
    Pomodoro {
        #[arg(long, default_value_t = 25)]
        focus: i64,
        /// Short break minutes
        #[arg(long, default_value_t = 5)]
        short: i64,
        /// Long break minutes
        #[arg(long, default_value_t = 15)]
        long: i64,
        /// Sessions until the long break replaces the short one
        #[arg(long, default_value_t = 4)]
        until_long: u32,
        #[arg(long, default_value_t = 4)]
        sessions: u32,
    },
    /// Meditation session (duration in minutes, prep/bell in seconds)
    Meditation {
        #[arg(long, default_value_t = 10)]
        minutes: i64,
        /// Preparation seconds before the session (0 skips it)
        #[arg(long, default_value_t = 10)]
        prep: i64,
        /// Interval bell seconds (0 disables)
        #[arg(long, default_value_t = 0)]
        bell: i64,
        /// Show the 4-7-8 breathing guide
        #[arg(long)]
        breathing: bool,
    },
    /// Use a saved preset by name
    Preset { name: String },
}

impl Mode {
    /// Resolve CLI arguments (or a stored preset) into a timer preset.
    pub fn resolve(self) -> Result<TimerPreset, Box<dyn std::error::Error>> {
        let preset = match self {
            Mode::Interval {
                ready,
                work,
                rest,
                sets,
            } => TimerPreset::Interval(IntervalConfig {
                ready_secs: ready,
                work_secs: work,
                rest_secs: rest,
                sets,
            }),
            Mode::Training {
                ready,
                exercise,
                rest,
                sets,
            } => TimerPreset::Training(TrainingConfig {
                ready_secs: ready,
                exercise_secs: exercise,
                rest_secs: rest,
                sets,
            }),
            Mode::Pomodoro {
                focus,
                short,
                long,
                until_long,
                sessions,
            } => TimerPreset::Pomodoro(PomodoroConfig {
                focus_secs: focus.saturating_mul(60),
                short_break_secs: short.saturating_mul(60),
                long_break_secs: long.saturating_mul(60),
                sessions_until_long_break: until_long,
                total_sessions: sessions,
            }),
            Mode::Meditation {
                minutes,
                prep,
                bell,
                breathing,
            } => TimerPreset::Meditation(MeditationConfig {
                preparation_secs: prep,
                meditation_secs: minutes.saturating_mul(60),
                bell_interval_secs: bell,
                session_type: if breathing {
                    SessionType::Breathing
                } else {
                    SessionType::Silent
                },
            }),
            Mode::Preset { name } => PresetStore::load()?.get(&name)?.clone(),
        };
        Ok(preset)
    }
}

/// "mm:ss" display of a millisecond remainder, rounded up so the last
/// second reads 0:01 rather than 0:00.
pub fn format_remaining(ms: u64) -> String {
    let secs = ms.div_ceil(1_000);
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rounds_up_to_the_next_second() {
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(1), "0:01");
        assert_eq!(format_remaining(1_000), "0:01");
        assert_eq!(format_remaining(61_500), "1:02");
        assert_eq!(format_remaining(1_500_000), "25:00");
    }

    #[test]
    fn pomodoro_mode_converts_minutes_to_seconds() {
        let preset = Mode::Pomodoro {
            focus: 25,
            short: 5,
            long: 15,
            until_long: 4,
            sessions: 4,
        }
        .resolve()
        .unwrap();
        match preset {
            TimerPreset::Pomodoro(c) => assert_eq!(c.focus_secs, 1_500),
            other => panic!("expected pomodoro preset, got {}", other.mode_name()),
        }
    }
}
