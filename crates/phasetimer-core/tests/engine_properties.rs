//! Property tests for the timing laws of the phase timer engine.

use proptest::prelude::*;

use phasetimer_core::{IntervalConfig, PhaseTimerEngine};

fn small_config() -> impl Strategy<Value = IntervalConfig> {
    (0i64..=30, 1i64..=120, 1i64..=60, 1u32..=8).prop_map(|(ready, work, rest, sets)| {
        IntervalConfig {
            ready_secs: ready,
            work_secs: work,
            rest_secs: rest,
            sets,
        }
    })
}

/// Drive a session to completion, ticking exactly at each phase expiry.
/// An optional pause is applied once `pause_at` (wall ms) falls inside the
/// current phase window; the engine then resumes `gap` ms later.
fn completion_time(config: &IntervalConfig, pause: Option<(u64, u64)>) -> u64 {
    let sequence = config.build().unwrap();
    let mut engine = PhaseTimerEngine::new();
    engine.start(sequence, 0).unwrap();

    let mut now = 0u64;
    let mut pending = pause;
    while !engine.is_complete() {
        let next = now + engine.time_remaining_ms(now);
        if let Some((at, gap)) = pending {
            if at >= now && at < next {
                engine.pause(at);
                engine.resume(at + gap);
                now = at + gap;
                pending = None;
                continue;
            }
        }
        now = next;
        engine.tick(now);
    }
    now
}

proptest! {
    #[test]
    fn uninterrupted_run_takes_exactly_the_configured_total(config in small_config()) {
        let total = config.build().unwrap().total_duration_ms();
        prop_assert_eq!(completion_time(&config, None), total);
    }

    #[test]
    fn pause_resume_shifts_completion_by_exactly_the_gap(
        config in small_config(),
        pause_frac in 0.0f64..1.0,
        gap in 0u64..120_000,
    ) {
        let total = config.build().unwrap().total_duration_ms();
        let pause_at = ((total as f64 * pause_frac) as u64).min(total - 1);
        prop_assert_eq!(
            completion_time(&config, Some((pause_at, gap))),
            total + gap
        );
    }

    #[test]
    fn remaining_and_progress_stay_in_bounds(
        config in small_config(),
        ticks in proptest::collection::vec(0u64..1_000_000, 1..64),
    ) {
        let sequence = config.build().unwrap();
        let mut engine = PhaseTimerEngine::new();
        engine.start(sequence, 0).unwrap();

        let mut ticks = ticks;
        ticks.sort_unstable();
        for now in ticks {
            engine.tick(now);
            let duration = engine.current_phase().map(|p| p.duration_ms).unwrap_or(0);
            prop_assert!(engine.time_remaining_ms(now) <= duration);
            let progress = engine.progress(now);
            prop_assert!((0.0..=1.0).contains(&progress));
        }
    }

    #[test]
    fn skip_is_indistinguishable_from_natural_expiry(
        config in small_config(),
        skips in 0usize..12,
    ) {
        let sequence = config.build().unwrap();

        let mut natural = PhaseTimerEngine::new();
        natural.start(sequence.clone(), 0).unwrap();
        let mut skipped = PhaseTimerEngine::new();
        skipped.start(sequence, 0).unwrap();

        let mut now = 0u64;
        for _ in 0..skips {
            now += natural.time_remaining_ms(now);
            natural.tick(now);
            skipped.skip();
            prop_assert_eq!(&natural, &skipped);
        }
    }

    #[test]
    fn reset_always_restores_the_fresh_state(
        config in small_config(),
        ops in proptest::collection::vec(0u8..5, 0..24),
    ) {
        let sequence = config.build().unwrap();
        let mut engine = PhaseTimerEngine::new();
        engine.start(sequence, 0).unwrap();

        let mut now = 0u64;
        for op in ops {
            now += 500;
            match op {
                0 => {
                    engine.tick(now);
                }
                1 => {
                    engine.pause(now);
                }
                2 => {
                    engine.resume(now);
                }
                3 => {
                    engine.skip();
                }
                _ => {
                    now += engine.time_remaining_ms(now);
                    engine.tick(now);
                }
            }
        }
        engine.reset();
        prop_assert_eq!(engine, PhaseTimerEngine::new());
    }
}
