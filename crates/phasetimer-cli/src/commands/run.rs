//! Drive a timer session in the terminal.
//!
//! The tokio interval here is the "external scheduler" collaborator: the
//! engine itself never sleeps or reads the clock. Cue lines stand in for
//! the audio player.

use std::io::Write;
use std::time::Duration;

use phasetimer_core::{
    BellSchedule, BreathingPattern, Event, PhaseTimerEngine, SessionType, TimerPreset,
};

use crate::common::{format_remaining, now_ms, Mode};

const TICK_MS: u64 = 250;

/// Per-session view of the meditation overlays; None for other modes.
struct Overlays {
    pattern: Option<BreathingPattern>,
    bells: BellSchedule,
    bells_played: u64,
}

impl Overlays {
    fn for_preset(preset: &TimerPreset) -> Option<Self> {
        match preset {
            TimerPreset::Meditation(config) => Some(Self {
                pattern: (config.session_type == SessionType::Breathing)
                    .then(BreathingPattern::default),
                bells: BellSchedule::new(config.bell_interval_ms()),
                bells_played: 0,
            }),
            _ => None,
        }
    }
}

pub fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    let preset = mode.resolve()?;
    let sequence = preset.build()?;
    let mut overlays = Overlays::for_preset(&preset);

    let mut engine = PhaseTimerEngine::new();
    let started = engine.start(sequence, now_ms())?;
    announce(&started);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(drive(&mut engine, &mut overlays))
}

async fn drive(
    engine: &mut PhaseTimerEngine,
    overlays: &mut Option<Overlays>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = now_ms();
                if let Some(event) = engine.tick(now) {
                    println!();
                    announce(&event);
                }
                if engine.is_complete() {
                    return Ok(());
                }
                if let Some(overlays) = overlays {
                    ring_due_bells(engine, overlays, now);
                }
                render_status(engine, overlays, now)?;
            }
            _ = tokio::signal::ctrl_c() => {
                engine.reset();
                println!("\ninterrupted; timer reset");
                return Ok(());
            }
        }
    }
}

fn ring_due_bells(engine: &PhaseTimerEngine, overlays: &mut Overlays, now: u64) {
    if engine.current_phase_id() != Some("meditate") {
        return;
    }
    let due = overlays.bells.bells_by(engine.elapsed_in_phase_ms(now));
    if due > overlays.bells_played {
        overlays.bells_played = due;
        println!("\n[cue] rest");
    }
}

fn announce(event: &Event) {
    match event {
        Event::SessionStarted {
            phase_id,
            duration_ms,
            ..
        } => println!("{phase_id} ({})", format_remaining(*duration_ms)),
        Event::PhaseEntered {
            phase_id,
            duration_ms,
            ..
        } => println!("{phase_id} ({})", format_remaining(*duration_ms)),
        Event::SessionCompleted { .. } => println!("session complete"),
        _ => {}
    }
    if let Some(cue) = event.cue() {
        println!("[cue] {cue}");
    }
}

fn render_status(
    engine: &PhaseTimerEngine,
    overlays: &Option<Overlays>,
    now: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let phase = engine.current_phase_id().unwrap_or("-");
    let remaining = format_remaining(engine.time_remaining_ms(now));
    let mut line = format!("\r{phase} {remaining}");
    if engine.total_sets() > 0 {
        line.push_str(&format!(
            "  set {}/{}",
            engine.set_index(),
            engine.total_sets()
        ));
    }
    if let Some(overlays) = overlays {
        if let Some(pattern) = &overlays.pattern {
            if phase == "meditate" {
                let elapsed = engine.elapsed_in_phase_ms(now);
                let (breath, _) = pattern.phase_at(elapsed);
                line.push_str(&format!(
                    "  breathe: {:?} (cycle {})",
                    breath,
                    pattern.cycle_number(elapsed)
                ));
            }
        }
    }
    let mut stdout = std::io::stdout();
    write!(stdout, "{line}    ")?;
    stdout.flush()?;
    Ok(())
}
