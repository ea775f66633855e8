//! Mode-specific sequence builders.
//!
//! Each timer mode translates its user-facing configuration (seconds, set
//! counts) into the same flat [`PhaseSequence`] shape, so one engine drives
//! all of them. Building is a pure data transformation: validation errors
//! surface as [`ConfigError`], and nothing is mutated.
//!
//! Shared policy across builders:
//! - a zero-duration phase is omitted entirely, not emitted as a
//!   zero-length no-op (most commonly the ready/preparation countdown);
//! - every builder appends exactly one terminal `complete` phase;
//! - durations arrive as whole seconds and are validated non-negative
//!   (counts must be at least 1) before expansion.

use serde::{Deserialize, Serialize};

use super::sequence::{cue, PhaseSequence, PhaseSpec};
use crate::error::ConfigError;

fn secs_to_ms(field: &'static str, secs: i64) -> Result<u64, ConfigError> {
    if secs < 0 {
        return Err(ConfigError::NegativeDuration { field, value: secs });
    }
    Ok((secs as u64).saturating_mul(1_000))
}

fn at_least_one(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value < 1 {
        return Err(ConfigError::CountTooSmall { field, value });
    }
    Ok(())
}

/// Zero-duration phases are skipped at build time, not emitted.
fn push_timed(phases: &mut Vec<PhaseSpec>, phase: PhaseSpec) {
    if phase.duration_ms > 0 {
        phases.push(phase);
    }
}

/// HIIT-style interval workout: ready, then work/rest sets.
///
/// No rest is scheduled after the final work set; the session ends straight
/// off the last work phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    pub ready_secs: i64,
    pub work_secs: i64,
    pub rest_secs: i64,
    pub sets: u32,
}

impl IntervalConfig {
    pub fn build(&self) -> Result<PhaseSequence, ConfigError> {
        at_least_one("sets", self.sets)?;
        let ready_ms = secs_to_ms("ready_secs", self.ready_secs)?;
        let work_ms = secs_to_ms("work_secs", self.work_secs)?;
        let rest_ms = secs_to_ms("rest_secs", self.rest_secs)?;

        let mut phases = Vec::new();
        push_timed(&mut phases, PhaseSpec::new("ready", ready_ms).with_cue(cue::GET_READY));
        for set in 1..=self.sets {
            push_timed(
                &mut phases,
                PhaseSpec::new("work", work_ms).with_cue(cue::START).in_group("set"),
            );
            if set < self.sets {
                push_timed(
                    &mut phases,
                    PhaseSpec::new("rest", rest_ms).with_cue(cue::REST).in_group("set"),
                );
            }
        }
        Ok(PhaseSequence::new(phases, None))
    }
}

/// Training-timer variant of the interval workout.
///
/// Unlike [`IntervalConfig`], rest follows every set including the last:
/// this variant's transition logic only finishes once the final rest
/// expires, and that behavior is preserved rather than merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub ready_secs: i64,
    pub exercise_secs: i64,
    pub rest_secs: i64,
    pub sets: u32,
}

impl TrainingConfig {
    pub fn build(&self) -> Result<PhaseSequence, ConfigError> {
        at_least_one("sets", self.sets)?;
        let ready_ms = secs_to_ms("ready_secs", self.ready_secs)?;
        let exercise_ms = secs_to_ms("exercise_secs", self.exercise_secs)?;
        let rest_ms = secs_to_ms("rest_secs", self.rest_secs)?;

        let mut phases = Vec::new();
        push_timed(&mut phases, PhaseSpec::new("ready", ready_ms).with_cue(cue::GET_READY));
        for _ in 0..self.sets {
            push_timed(
                &mut phases,
                PhaseSpec::new("exercise", exercise_ms).with_cue(cue::START).in_group("set"),
            );
            push_timed(
                &mut phases,
                PhaseSpec::new("rest", rest_ms).with_cue(cue::REST).in_group("set"),
            );
        }
        Ok(PhaseSequence::new(phases, None))
    }
}

/// Pomodoro-style focus sessions with short and long breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    pub focus_secs: i64,
    pub short_break_secs: i64,
    pub long_break_secs: i64,
    pub sessions_until_long_break: u32,
    pub total_sessions: u32,
}

impl PomodoroConfig {
    pub fn build(&self) -> Result<PhaseSequence, ConfigError> {
        at_least_one("sessions_until_long_break", self.sessions_until_long_break)?;
        at_least_one("total_sessions", self.total_sessions)?;
        let focus_ms = secs_to_ms("focus_secs", self.focus_secs)?;
        let short_ms = secs_to_ms("short_break_secs", self.short_break_secs)?;
        let long_ms = secs_to_ms("long_break_secs", self.long_break_secs)?;

        let mut phases = Vec::new();
        for session in 1..=self.total_sessions {
            push_timed(
                &mut phases,
                PhaseSpec::new("focus", focus_ms).with_cue(cue::START).in_group("session"),
            );
            if session == self.total_sessions {
                // The final focus session runs straight into completion.
                break;
            }
            // Long break every Nth completed session, by modulo on the
            // completed-session count rather than any index.
            let long_due = session % self.sessions_until_long_break == 0;
            let (id, ms) = if long_due {
                ("long-break", long_ms)
            } else {
                ("short-break", short_ms)
            };
            push_timed(&mut phases, PhaseSpec::new(id, ms).with_cue(cue::REST).in_group("session"));
        }
        Ok(PhaseSequence::new(phases, None))
    }
}

/// Kind of meditation session; `Breathing` activates the nested
/// inhale/hold/exhale/pause overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Guided,
    Silent,
    Breathing,
}

/// Meditation session: optional preparation, then one long meditate phase.
///
/// `bell_interval_secs` drives the observational
/// [`BellSchedule`](super::BellSchedule); 0 disables the bells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationConfig {
    pub preparation_secs: i64,
    pub meditation_secs: i64,
    pub bell_interval_secs: i64,
    pub session_type: SessionType,
}

impl MeditationConfig {
    pub fn build(&self) -> Result<PhaseSequence, ConfigError> {
        let prep_ms = secs_to_ms("preparation_secs", self.preparation_secs)?;
        let meditation_ms = secs_to_ms("meditation_secs", self.meditation_secs)?;
        secs_to_ms("bell_interval_secs", self.bell_interval_secs)?;

        let mut phases = Vec::new();
        push_timed(
            &mut phases,
            PhaseSpec::new("preparation", prep_ms).with_cue(cue::GET_READY),
        );
        push_timed(
            &mut phases,
            PhaseSpec::new("meditate", meditation_ms).with_cue(cue::START),
        );
        // Final bell on completion.
        Ok(PhaseSequence::new(phases, Some(cue::REST)))
    }

    pub fn bell_interval_ms(&self) -> u64 {
        self.bell_interval_secs.max(0) as u64 * 1_000
    }
}
