use serde::{Deserialize, Serialize};

/// Symbolic audio-cue identifiers emitted on phase entry.
///
/// Playback is entirely the host's concern; the engine only names the cue.
pub mod cue {
    /// Countdown-before-start alert.
    pub const GET_READY: &str = "get-ready";
    /// Work/focus/meditation phase begins.
    pub const START: &str = "start";
    /// Rest/break phase begins (also used as the meditation bell).
    pub const REST: &str = "rest";
}

/// Phase id of the terminal sentinel appended to every sequence.
pub const COMPLETE_ID: &str = "complete";

/// Static descriptor of one phase in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Symbolic name, e.g. "ready", "work", "rest", "meditate".
    pub id: String,
    /// Duration in milliseconds. The terminal phase is the only
    /// zero-duration phase a builder will emit.
    pub duration_ms: u64,
    /// Audio cue fired when this phase becomes active.
    #[serde(default)]
    pub cue_on_enter: Option<String>,
    /// Tag marking membership in a repeating set (e.g. work/rest pairs).
    #[serde(default)]
    pub repeat_group: Option<String>,
}

impl PhaseSpec {
    pub fn new(id: &str, duration_ms: u64) -> Self {
        Self {
            id: id.into(),
            duration_ms,
            cue_on_enter: None,
            repeat_group: None,
        }
    }

    pub fn with_cue(mut self, cue: &str) -> Self {
        self.cue_on_enter = Some(cue.into());
        self
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.repeat_group = Some(group.into());
        self
    }

    /// The terminal sentinel never expires on its own.
    pub fn is_terminal(&self) -> bool {
        self.id == COMPLETE_ID
    }
}

/// Fully expanded, ordered list of phases for one session.
///
/// Invariants: never empty, the final element is always the terminal
/// `complete` phase, and the terminal phase is never repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSequence {
    phases: Vec<PhaseSpec>,
}

impl PhaseSequence {
    /// Build a sequence from non-terminal phases, appending the terminal
    /// sentinel. `completion_cue` is fired when the session finishes.
    pub fn new(phases: Vec<PhaseSpec>, completion_cue: Option<&str>) -> Self {
        let mut phases = phases;
        let mut terminal = PhaseSpec::new(COMPLETE_ID, 0);
        terminal.cue_on_enter = completion_cue.map(Into::into);
        phases.push(terminal);
        Self { phases }
    }

    pub fn get(&self, index: usize) -> Option<&PhaseSpec> {
        self.phases.get(index)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false: the terminal phase is present by construction.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseSpec> {
        self.phases.iter()
    }

    /// Total session length, excluding the zero-duration terminal phase.
    pub fn total_duration_ms(&self) -> u64 {
        self.phases
            .iter()
            .filter(|p| !p.is_terminal())
            .map(|p| p.duration_ms)
            .sum()
    }

    /// Milliseconds of all phases before `index`.
    pub fn cumulative_ms(&self, index: usize) -> u64 {
        self.phases
            .iter()
            .take(index)
            .map(|p| p.duration_ms)
            .sum()
    }

    /// Id of the first phase carrying a repeat group, if any. Set counters
    /// are derived by counting its occurrences rather than stored.
    fn group_leader(&self) -> Option<&str> {
        self.phases
            .iter()
            .find(|p| p.repeat_group.is_some())
            .map(|p| p.id.as_str())
    }

    /// 1-based ordinal of the set that phase `index` belongs to, for
    /// "Set 3 of 8" style display. 0 before the first set (e.g. during a
    /// ready phase) or when the sequence has no repeat groups.
    pub fn set_ordinal(&self, index: usize) -> usize {
        let Some(leader) = self.group_leader() else {
            return 0;
        };
        self.phases
            .iter()
            .take(index + 1)
            .filter(|p| p.repeat_group.is_some() && p.id == leader)
            .count()
    }

    /// Number of sets in the sequence; 0 when no phase repeats.
    pub fn total_sets(&self) -> usize {
        let Some(leader) = self.group_leader() else {
            return 0;
        };
        self.phases
            .iter()
            .filter(|p| p.repeat_group.is_some() && p.id == leader)
            .count()
    }
}
