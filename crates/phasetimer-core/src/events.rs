use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Every engine state change produces an Event.
///
/// Commands and `tick()` return the event for the host to dispatch: the
/// presentation layer renders it, the audio collaborator plays `cue` when
/// one is present. Timestamps are `at_ms` on the caller-supplied clock, so
/// event streams are deterministic under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Session began at phase 0.
    SessionStarted {
        phase_id: String,
        cue: Option<String>,
        duration_ms: u64,
        at_ms: u64,
    },
    /// A non-terminal phase became active.
    PhaseEntered {
        phase_index: usize,
        phase_id: String,
        cue: Option<String>,
        duration_ms: u64,
        at_ms: u64,
    },
    /// The terminal phase was reached; the session is over.
    SessionCompleted {
        cue: Option<String>,
        at_ms: u64,
    },
    TimerPaused {
        remaining_ms: u64,
        at_ms: u64,
    },
    TimerResumed {
        remaining_ms: u64,
        at_ms: u64,
    },
    TimerReset,
    StateSnapshot {
        state: TimerState,
        phase_index: usize,
        phase_id: String,
        remaining_ms: u64,
        total_ms: u64,
        progress: f64,
        set_index: usize,
        total_sets: usize,
    },
}

impl Event {
    /// Audio cue carried by this event, if any.
    pub fn cue(&self) -> Option<&str> {
        match self {
            Event::SessionStarted { cue, .. }
            | Event::PhaseEntered { cue, .. }
            | Event::SessionCompleted { cue, .. } => cue.as_deref(),
            _ => None,
        }
    }
}
