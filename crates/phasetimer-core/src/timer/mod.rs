mod builder;
mod engine;
mod overlay;
mod sequence;

pub use builder::{
    IntervalConfig, MeditationConfig, PomodoroConfig, SessionType, TrainingConfig,
};
pub use engine::{PhaseTimerEngine, TimerState};
pub use overlay::{BellSchedule, BreathPhase, BreathingPattern};
pub use sequence::{cue, PhaseSequence, PhaseSpec, COMPLETE_ID};
