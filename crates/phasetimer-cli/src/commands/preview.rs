//! Print the built phase sequence as JSON without running it.

use chrono::Utc;
use serde::Serialize;

use phasetimer_core::PhaseSequence;

use crate::common::Mode;

#[derive(Serialize)]
struct Preview<'a> {
    mode: &'static str,
    total_ms: u64,
    total_sets: usize,
    /// Projected completion time if the session started now.
    estimated_end: chrono::DateTime<Utc>,
    sequence: &'a PhaseSequence,
}

pub fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    let preset = mode.resolve()?;
    let sequence = preset.build()?;
    let total_ms = sequence.total_duration_ms();
    let preview = Preview {
        mode: preset.mode_name(),
        total_ms,
        total_sets: sequence.total_sets(),
        estimated_end: Utc::now() + chrono::Duration::milliseconds(total_ms as i64),
        sequence: &sequence,
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
