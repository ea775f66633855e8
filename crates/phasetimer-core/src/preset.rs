//! TOML-based named timer presets.
//!
//! Each preset bundles one mode configuration under a user-chosen name.
//! The store ships with built-in presets (Tabata intervals, a classic
//! pomodoro cycle, a 4-7-8 breathing session) and is persisted at
//! `~/.config/phasetimer/presets.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::timer::{
    IntervalConfig, MeditationConfig, PhaseSequence, PomodoroConfig, SessionType,
    TrainingConfig,
};

/// One named timer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TimerPreset {
    Interval(IntervalConfig),
    Training(TrainingConfig),
    Pomodoro(PomodoroConfig),
    Meditation(MeditationConfig),
}

impl TimerPreset {
    /// Expand this preset into a phase sequence.
    pub fn build(&self) -> Result<PhaseSequence, ConfigError> {
        match self {
            TimerPreset::Interval(c) => c.build(),
            TimerPreset::Training(c) => c.build(),
            TimerPreset::Pomodoro(c) => c.build(),
            TimerPreset::Meditation(c) => c.build(),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            TimerPreset::Interval(_) => "interval",
            TimerPreset::Training(_) => "training",
            TimerPreset::Pomodoro(_) => "pomodoro",
            TimerPreset::Meditation(_) => "meditation",
        }
    }
}

/// Named presets, serialized to/from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetStore {
    #[serde(default)]
    pub presets: BTreeMap<String, TimerPreset>,
}

impl PresetStore {
    /// Built-in presets mirroring the stock timer pages.
    pub fn builtin() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            "tabata".to_string(),
            TimerPreset::Interval(IntervalConfig {
                ready_secs: 10,
                work_secs: 20,
                rest_secs: 10,
                sets: 8,
            }),
        );
        presets.insert(
            "pomodoro".to_string(),
            TimerPreset::Pomodoro(PomodoroConfig {
                focus_secs: 25 * 60,
                short_break_secs: 5 * 60,
                long_break_secs: 15 * 60,
                sessions_until_long_break: 4,
                total_sessions: 4,
            }),
        );
        presets.insert(
            "breathing".to_string(),
            TimerPreset::Meditation(MeditationConfig {
                preparation_secs: 10,
                meditation_secs: 10 * 60,
                bell_interval_secs: 0,
                session_type: SessionType::Breathing,
            }),
        );
        Self { presets }
    }

    /// `~/.config/phasetimer/presets.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("phasetimer");
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        Ok(dir.join("presets.toml"))
    }

    /// Load from the default path, falling back to the built-ins when no
    /// file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::builtin());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Result<&TimerPreset, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }
}
