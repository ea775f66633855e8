//! Observational overlays derived from phase-elapsed time.
//!
//! Neither overlay touches engine state: both are pure functions of
//! `elapsed_in_phase_ms`, computed the same drift-free way as the engine
//! itself. They exist for UI and cue purposes only and never affect the
//! phase index or remaining time.

use serde::{Deserialize, Serialize};

/// One part of the nested breathing micro-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Pause,
}

/// Four-part breathing cycle nested inside a meditate phase.
///
/// The default is the 4-7-8 pattern with a one-second pause between
/// cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingPattern {
    pub inhale_ms: u64,
    pub hold_ms: u64,
    pub exhale_ms: u64,
    pub pause_ms: u64,
}

impl Default for BreathingPattern {
    fn default() -> Self {
        Self {
            inhale_ms: 4_000,
            hold_ms: 7_000,
            exhale_ms: 8_000,
            pause_ms: 1_000,
        }
    }
}

impl BreathingPattern {
    pub fn cycle_ms(&self) -> u64 {
        self.inhale_ms + self.hold_ms + self.exhale_ms + self.pause_ms
    }

    /// Breath phase active at `elapsed_ms` into the meditate phase, plus
    /// clamped 0..1 progress within that breath phase.
    pub fn phase_at(&self, elapsed_ms: u64) -> (BreathPhase, f64) {
        let cycle = self.cycle_ms();
        if cycle == 0 {
            return (BreathPhase::Inhale, 1.0);
        }
        let position = elapsed_ms % cycle;

        let (phase, start, duration) = if position < self.inhale_ms {
            (BreathPhase::Inhale, 0, self.inhale_ms)
        } else if position < self.inhale_ms + self.hold_ms {
            (BreathPhase::Hold, self.inhale_ms, self.hold_ms)
        } else if position < self.inhale_ms + self.hold_ms + self.exhale_ms {
            (BreathPhase::Exhale, self.inhale_ms + self.hold_ms, self.exhale_ms)
        } else {
            (
                BreathPhase::Pause,
                self.inhale_ms + self.hold_ms + self.exhale_ms,
                self.pause_ms,
            )
        };
        if duration == 0 {
            return (phase, 1.0);
        }
        let progress = (position - start) as f64 / duration as f64;
        (phase, progress.clamp(0.0, 1.0))
    }

    /// 1-based count of the breathing cycle active at `elapsed_ms`.
    pub fn cycle_number(&self, elapsed_ms: u64) -> u64 {
        let cycle = self.cycle_ms();
        if cycle == 0 {
            return 1;
        }
        elapsed_ms / cycle + 1
    }
}

/// Interval-bell schedule for meditation sessions.
///
/// The host compares successive `bells_by` values and plays a bell cue
/// each time the count grows; an interval of 0 disables the bells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellSchedule {
    interval_ms: u64,
}

impl BellSchedule {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    /// Number of bells due by `elapsed_ms` into the meditate phase. The
    /// bell at t=0 is not counted; phase entry already carries a cue.
    pub fn bells_by(&self, elapsed_ms: u64) -> u64 {
        if self.interval_ms == 0 {
            return 0;
        }
        elapsed_ms / self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_is_4_7_8() {
        let p = BreathingPattern::default();
        assert_eq!(p.cycle_ms(), 20_000);
    }

    #[test]
    fn phase_boundaries() {
        let p = BreathingPattern::default();
        assert_eq!(p.phase_at(0).0, BreathPhase::Inhale);
        assert_eq!(p.phase_at(3_999).0, BreathPhase::Inhale);
        assert_eq!(p.phase_at(4_000).0, BreathPhase::Hold);
        assert_eq!(p.phase_at(10_999).0, BreathPhase::Hold);
        assert_eq!(p.phase_at(11_000).0, BreathPhase::Exhale);
        assert_eq!(p.phase_at(18_999).0, BreathPhase::Exhale);
        assert_eq!(p.phase_at(19_000).0, BreathPhase::Pause);
        assert_eq!(p.phase_at(19_999).0, BreathPhase::Pause);
        // Wraps into the next cycle.
        assert_eq!(p.phase_at(20_000).0, BreathPhase::Inhale);
    }

    #[test]
    fn phase_progress_is_clamped_fraction() {
        let p = BreathingPattern::default();
        let (_, progress) = p.phase_at(2_000);
        assert!((progress - 0.5).abs() < f64::EPSILON);
        let (_, progress) = p.phase_at(4_000);
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn cycle_number_is_one_based() {
        let p = BreathingPattern::default();
        assert_eq!(p.cycle_number(0), 1);
        assert_eq!(p.cycle_number(19_999), 1);
        assert_eq!(p.cycle_number(20_000), 2);
        assert_eq!(p.cycle_number(61_000), 4);
    }

    #[test]
    fn bells_count_by_interval() {
        let bells = BellSchedule::new(60_000);
        assert_eq!(bells.bells_by(0), 0);
        assert_eq!(bells.bells_by(59_999), 0);
        assert_eq!(bells.bells_by(60_000), 1);
        assert_eq!(bells.bells_by(180_000), 3);
    }

    #[test]
    fn zero_interval_disables_bells() {
        let bells = BellSchedule::new(0);
        assert_eq!(bells.bells_by(600_000), 0);
    }
}
