//! End-to-end session walkthroughs driven by a simulated clock.

use phasetimer_core::{
    cue, BellSchedule, BreathPhase, BreathingPattern, Event, IntervalConfig,
    MeditationConfig, PhaseTimerEngine, PomodoroConfig, SessionType, TimerState,
};

/// Tick the engine at a fixed cadence until completion, collecting every
/// event the host would dispatch.
fn drive(engine: &mut PhaseTimerEngine, start_ms: u64, step_ms: u64) -> Vec<Event> {
    let mut events = Vec::new();
    let mut now = start_ms;
    while !engine.is_complete() {
        now += step_ms;
        if let Some(event) = engine.tick(now) {
            events.push(event);
        }
    }
    events
}

#[test]
fn interval_session_emits_cues_in_workout_order() {
    let sequence = IntervalConfig {
        ready_secs: 10,
        work_secs: 30,
        rest_secs: 10,
        sets: 3,
    }
    .build()
    .unwrap();

    let mut engine = PhaseTimerEngine::new();
    let started = engine.start(sequence, 0).unwrap();
    assert_eq!(started.cue(), Some(cue::GET_READY));

    let events = drive(&mut engine, 0, 250);
    let cues: Vec<_> = events.iter().filter_map(|e| e.cue()).collect();
    assert_eq!(
        cues,
        [cue::START, cue::REST, cue::START, cue::REST, cue::START]
    );
    assert!(matches!(events.last(), Some(Event::SessionCompleted { .. })));
    assert_eq!(engine.state(), TimerState::Completed);
}

#[test]
fn interval_session_total_time_is_tick_count_independent() {
    let config = IntervalConfig {
        ready_secs: 5,
        work_secs: 20,
        rest_secs: 10,
        sets: 2,
    };
    let total = config.build().unwrap().total_duration_ms();

    // Coarse 7s ticks: every boundary is detected late, but because each
    // transition re-anchors at the tick time the per-phase time is never
    // shortened, only the detection of the boundary is delayed.
    let mut engine = PhaseTimerEngine::new();
    engine.start(config.build().unwrap(), 0).unwrap();
    let mut now = 0;
    let mut transitions = 0;
    while !engine.is_complete() {
        now += 7_000;
        if engine.tick(now).is_some() {
            transitions += 1;
        }
    }
    // [ready, work, rest, work, complete]: four transitions.
    assert_eq!(transitions, 4);
    assert!(now >= total);
}

#[test]
fn pomodoro_walkthrough_matches_session_counters() {
    let sequence = PomodoroConfig {
        focus_secs: 1_500,
        short_break_secs: 300,
        long_break_secs: 900,
        sessions_until_long_break: 4,
        total_sessions: 5,
    }
    .build()
    .unwrap();

    let mut engine = PhaseTimerEngine::new();
    engine.start(sequence, 0).unwrap();
    assert_eq!(engine.set_index(), 1);
    assert_eq!(engine.total_sets(), 5);

    let mut seen = vec![engine.current_phase_id().unwrap().to_string()];
    while !engine.is_complete() {
        engine.skip();
        if let Some(id) = engine.current_phase_id() {
            seen.push(id.to_string());
        }
    }
    assert_eq!(
        seen,
        [
            "focus",
            "short-break",
            "focus",
            "short-break",
            "focus",
            "short-break",
            "focus",
            "long-break",
            "focus",
            "complete",
        ]
    );
    assert_eq!(engine.set_index(), 5);
}

#[test]
fn breathing_meditation_overlays_follow_phase_elapsed_time() {
    let config = MeditationConfig {
        preparation_secs: 0,
        meditation_secs: 120,
        bell_interval_secs: 30,
        session_type: SessionType::Breathing,
    };
    let mut engine = PhaseTimerEngine::new();
    engine.start(config.build().unwrap(), 0).unwrap();
    assert_eq!(engine.current_phase_id(), Some("meditate"));

    let pattern = BreathingPattern::default();
    let bells = BellSchedule::new(config.bell_interval_ms());

    // 45s in: third breathing cycle, 5s into it (hold), one bell boundary
    // passed at 30s.
    let elapsed = engine.elapsed_in_phase_ms(45_000);
    assert_eq!(elapsed, 45_000);
    assert_eq!(pattern.cycle_number(elapsed), 3);
    assert_eq!(pattern.phase_at(elapsed).0, BreathPhase::Hold);
    assert_eq!(bells.bells_by(elapsed), 1);

    // The overlay never advances the engine itself.
    assert_eq!(engine.phase_index(), 0);
    assert_eq!(engine.time_remaining_ms(45_000), 75_000);

    // Pausing freezes the overlay input along with the countdown.
    engine.pause(45_000);
    assert_eq!(engine.elapsed_in_phase_ms(500_000), 45_000);
    engine.resume(100_000);
    assert_eq!(engine.elapsed_in_phase_ms(100_000), 45_000);
    assert_eq!(bells.bells_by(engine.elapsed_in_phase_ms(130_000)), 2);
}

#[test]
fn completed_meditation_carries_final_bell_cue() {
    let sequence = MeditationConfig {
        preparation_secs: 10,
        meditation_secs: 60,
        bell_interval_secs: 0,
        session_type: SessionType::Silent,
    }
    .build()
    .unwrap();

    let mut engine = PhaseTimerEngine::new();
    engine.start(sequence, 0).unwrap();
    engine.tick(10_000);
    let done = engine.tick(70_000).unwrap();
    assert_eq!(done.cue(), Some(cue::REST));
    assert!(engine.is_complete());
}
