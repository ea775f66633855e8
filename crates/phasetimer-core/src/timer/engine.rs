//! Phase timer engine.
//!
//! The engine is a wall-clock-anchored state machine. It has no internal
//! threads and never reads the clock itself - every operation that needs the
//! current time takes `now_ms` from the caller, and the external scheduler is
//! responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused <-> Running) -> Completed
//!   ^                                           |
//!   +--------------- reset() -------------------+
//! ```
//!
//! ## Timing model
//!
//! Remaining time is never decremented per tick. The engine records the
//! timestamp at which the current phase began (`phase_anchor_ms`) and
//! recomputes elapsed/remaining from it on every query, so the total elapsed
//! across a phase is exact regardless of tick cadence or missed callbacks.
//! On a phase transition the anchor resets to the transition's `now_ms`;
//! overshoot is deliberately not carried into the next phase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sequence::{PhaseSequence, PhaseSpec};
use crate::error::EngineError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// Drives a single countdown through a pre-built [`PhaseSequence`].
///
/// One engine owns at most one session; `reset()` returns it to the
/// pre-start condition (sequence dropped). All operations are O(1) and
/// synchronous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimerEngine {
    sequence: Option<PhaseSequence>,
    state: TimerState,
    current_index: usize,
    /// Timestamp (caller clock, ms) when the current phase began, adjusted
    /// on resume to compensate for the paused interval.
    phase_anchor_ms: u64,
    /// Elapsed-within-phase captured at pause, re-applied on resume.
    paused_elapsed_ms: u64,
}

impl PhaseTimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == TimerState::Completed
    }

    pub fn phase_index(&self) -> usize {
        self.current_index
    }

    pub fn current_phase(&self) -> Option<&PhaseSpec> {
        self.sequence.as_ref()?.get(self.current_index)
    }

    pub fn current_phase_id(&self) -> Option<&str> {
        self.current_phase().map(|p| p.id.as_str())
    }

    pub fn sequence(&self) -> Option<&PhaseSequence> {
        self.sequence.as_ref()
    }

    /// Duration of the current phase, 0 before `start`.
    pub fn phase_duration_ms(&self) -> u64 {
        self.current_phase().map(|p| p.duration_ms).unwrap_or(0)
    }

    /// Elapsed time within the current phase, clamped to its duration.
    pub fn elapsed_in_phase_ms(&self, now_ms: u64) -> u64 {
        let duration = self.phase_duration_ms();
        let elapsed = match self.state {
            TimerState::Running => now_ms.saturating_sub(self.phase_anchor_ms),
            TimerState::Paused => self.paused_elapsed_ms,
            TimerState::Idle | TimerState::Completed => 0,
        };
        elapsed.min(duration)
    }

    /// Remaining time in the current phase. Never negative, never more
    /// than the phase duration.
    pub fn time_remaining_ms(&self, now_ms: u64) -> u64 {
        self.phase_duration_ms()
            .saturating_sub(self.elapsed_in_phase_ms(now_ms))
    }

    /// 0.0 .. 1.0 progress within the current phase. A zero-duration phase
    /// reports 1.0 (instantly complete).
    pub fn progress(&self, now_ms: u64) -> f64 {
        let duration = self.phase_duration_ms();
        if duration == 0 {
            return 1.0;
        }
        (self.elapsed_in_phase_ms(now_ms) as f64 / duration as f64).min(1.0)
    }

    /// 1-based set ordinal for display ("Set 3 of 8"); 0 outside any set.
    pub fn set_index(&self) -> usize {
        self.sequence
            .as_ref()
            .map(|s| s.set_ordinal(self.current_index))
            .unwrap_or(0)
    }

    pub fn total_sets(&self) -> usize {
        self.sequence.as_ref().map(|s| s.total_sets()).unwrap_or(0)
    }

    /// Projected wall-clock completion time: the current phase's remainder
    /// plus every later non-terminal phase, added to `now`. None before
    /// `start`. A paused session projects as if resumed at `now`.
    pub fn estimated_end_time(
        &self,
        now_ms: u64,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let sequence = self.sequence.as_ref()?;
        let later: u64 = sequence
            .iter()
            .skip(self.current_index + 1)
            .filter(|p| !p.is_terminal())
            .map(|p| p.duration_ms)
            .sum();
        let remaining = self.time_remaining_ms(now_ms) + later;
        Some(now + chrono::Duration::milliseconds(remaining as i64))
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now_ms: u64) -> Event {
        Event::StateSnapshot {
            state: self.state,
            phase_index: self.current_index,
            phase_id: self.current_phase_id().unwrap_or_default().to_string(),
            remaining_ms: self.time_remaining_ms(now_ms),
            total_ms: self.phase_duration_ms(),
            progress: self.progress(now_ms),
            set_index: self.set_index(),
            total_sets: self.total_sets(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a session at phase 0, firing its enter cue.
    ///
    /// Errors unless the engine is Idle; a running, paused or completed
    /// engine must be `reset()` first.
    pub fn start(
        &mut self,
        sequence: PhaseSequence,
        now_ms: u64,
    ) -> Result<Event, EngineError> {
        if self.state != TimerState::Idle {
            return Err(EngineError::AlreadyStarted { state: self.state });
        }
        self.sequence = Some(sequence);
        self.current_index = 0;
        self.phase_anchor_ms = now_ms;
        self.paused_elapsed_ms = 0;
        self.state = TimerState::Running;

        let phase = self.current_phase().ok_or(EngineError::EmptySequence)?.clone();
        if phase.is_terminal() {
            // Degenerate sequence with no timed phases: complete immediately
            // rather than running a terminal phase that never expires.
            self.state = TimerState::Completed;
            return Ok(Event::SessionCompleted {
                cue: phase.cue_on_enter,
                at_ms: now_ms,
            });
        }
        Ok(Event::SessionStarted {
            phase_id: phase.id,
            cue: phase.cue_on_enter,
            duration_ms: phase.duration_ms,
            at_ms: now_ms,
        })
    }

    /// Advance the countdown. Call periodically from the host scheduler.
    ///
    /// The only operation that mutates the phase index. Advances at most one
    /// phase per call; returns the transition event when one occurs. No-op
    /// unless Running.
    pub fn tick(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let phase = self.current_phase()?;
        if phase.is_terminal() {
            // Unreachable while Running; the terminal phase never expires.
            return None;
        }
        let elapsed = now_ms.saturating_sub(self.phase_anchor_ms);
        if elapsed < phase.duration_ms {
            return None;
        }

        self.current_index += 1;
        self.phase_anchor_ms = now_ms;
        self.paused_elapsed_ms = 0;

        let entered = self.current_phase()?.clone();
        if entered.is_terminal() {
            self.state = TimerState::Completed;
            return Some(Event::SessionCompleted {
                cue: entered.cue_on_enter,
                at_ms: now_ms,
            });
        }
        Some(Event::PhaseEntered {
            phase_index: self.current_index,
            phase_id: entered.id,
            cue: entered.cue_on_enter,
            duration_ms: entered.duration_ms,
            at_ms: now_ms,
        })
    }

    /// Freeze the countdown, capturing elapsed-within-phase so that resume
    /// loses no time. Idempotent; no-op unless Running.
    pub fn pause(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.paused_elapsed_ms = self.elapsed_in_phase_ms(now_ms);
        self.state = TimerState::Paused;
        Some(Event::TimerPaused {
            remaining_ms: self.time_remaining_ms(now_ms),
            at_ms: now_ms,
        })
    }

    /// Continue a paused countdown by re-anchoring so the captured elapsed
    /// is preserved exactly. No-op unless Paused.
    pub fn resume(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.phase_anchor_ms = now_ms.saturating_sub(self.paused_elapsed_ms);
        self.state = TimerState::Running;
        Some(Event::TimerResumed {
            remaining_ms: self.time_remaining_ms(now_ms),
            at_ms: now_ms,
        })
    }

    /// Force an immediate transition, exactly as if the current phase's
    /// duration had elapsed. Permitted only while Running; a paused engine
    /// must be resumed first. No-op otherwise.
    pub fn skip(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let expiry = self.phase_anchor_ms + self.phase_duration_ms();
        self.tick(expiry)
    }

    /// Return the engine to the pre-start condition. Always succeeds.
    pub fn reset(&mut self) -> Event {
        *self = Self::default();
        Event::TimerReset
    }
}
