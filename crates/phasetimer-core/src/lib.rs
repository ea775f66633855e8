//! # Phasetimer Core Library
//!
//! Core logic for phasetimer: a phase-sequenced countdown engine shared by
//! interval/HIIT, training, pomodoro and meditation timers. The CLI binary
//! is a thin layer over this library; a GUI would consume the same surface.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a wall-clock-anchored state machine that requires the
//!   caller to supply `now_ms` and invoke `tick()` periodically. It never
//!   reads the clock or plays audio itself - phase transitions carry
//!   symbolic cue ids for a collaborator to play.
//! - **Builders**: pure config-to-sequence expansion, one per timer mode,
//!   all producing the same [`PhaseSequence`] shape.
//! - **Overlays**: breathing micro-cycle and interval bells, derived from
//!   phase-elapsed time without touching engine state.
//! - **Presets**: TOML-stored named configurations.
//!
//! ## Key Components
//!
//! - [`PhaseTimerEngine`]: core timer state machine
//! - [`PhaseSequence`]: fully expanded phase list with terminal sentinel
//! - [`PresetStore`]: named preset persistence
//! - [`Event`]: state-change notifications polled by hosts

pub mod error;
pub mod events;
pub mod preset;
pub mod timer;

pub use error::{ConfigError, CoreError, EngineError};
pub use events::Event;
pub use preset::{PresetStore, TimerPreset};
pub use timer::{
    cue, BellSchedule, BreathPhase, BreathingPattern, IntervalConfig, MeditationConfig,
    PhaseSequence, PhaseSpec, PhaseTimerEngine, PomodoroConfig, SessionType, TimerState,
    TrainingConfig,
};
