//! Experiment stage table.
//!
//! A session walks through a fixed, ordered list of named stages, each with a
//! duration and an operator-facing description.  The list ends with a
//! zero-duration terminal marker that signals session completion.  The table
//! is immutable after construction; the stage *index* is its identity.
//!
//! The table has no notion of "current stage".  The session controller
//! derives the active index from absolute elapsed time on every query via
//! [`StageTable::stage_containing`], so boundary detection survives missed
//! or irregular polling.

/// Static descriptor for a single experiment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDef {
    pub name: &'static str,
    /// Stage length in milliseconds.  Zero only for the terminal marker.
    pub duration_ms: u64,
    pub description: &'static str,
}

/// The standard stress-protocol timeline: calibration, baseline, stressor,
/// recovery, terminal marker.  Total active duration 500 s.
pub const DEFAULT_TIMELINE: &[StageDef] = &[
    StageDef {
        name: "Calibration",
        duration_ms: 20_000,
        description: "Calibration (20 seconds)",
    },
    StageDef {
        name: "Normal stage",
        duration_ms: 240_000,
        description: "Normal stage (4 minutes)",
    },
    StageDef {
        name: "Stress",
        duration_ms: 180_000,
        description: "Stress (3 minutes)",
    },
    StageDef {
        name: "Relaxation",
        duration_ms: 60_000,
        description: "Relaxation (1 minute)",
    },
    StageDef {
        name: "Session complete",
        duration_ms: 0,
        description: "Session complete",
    },
];

/// Ordered, immutable stage list.
pub struct StageTable {
    stages: &'static [StageDef],
}

impl StageTable {
    /// Construct a table, checking the timeline invariants.
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty, if the last entry is not the
    /// zero-duration terminal marker, or if any earlier entry has a zero
    /// duration.  Timelines are compile-time data, so a violation is a
    /// programming error caught at boot.
    pub fn new(stages: &'static [StageDef]) -> Self {
        assert!(!stages.is_empty(), "stage table must not be empty");
        let last = stages.len() - 1;
        assert!(
            stages[last].duration_ms == 0,
            "last stage must be the zero-duration terminal marker"
        );
        assert!(
            stages[..last].iter().all(|s| s.duration_ms > 0),
            "non-terminal stages must have a positive duration"
        );
        Self { stages }
    }

    /// Number of entries, terminal marker included.
    pub fn count(&self) -> usize {
        self.stages.len()
    }

    /// The stage at `index`.
    pub fn at(&self, index: usize) -> &StageDef {
        &self.stages[index]
    }

    /// Whether `index` is the terminal marker (`duration_ms == 0`).
    pub fn is_terminal(&self, index: usize) -> bool {
        self.stages[index].duration_ms == 0
    }

    /// Index of the terminal marker (always the last entry).
    pub fn terminal_index(&self) -> usize {
        self.stages.len() - 1
    }

    /// Sum of all non-terminal durations in milliseconds.
    pub fn total_active_duration_ms(&self) -> u64 {
        self.stages.iter().map(|s| s.duration_ms).sum()
    }

    /// The non-terminal stage containing `elapsed_ms`, or `None` once the
    /// full active timeline has been exhausted.
    ///
    /// Walks the stages in order accumulating cumulative end times and
    /// returns the first index whose end exceeds `elapsed_ms`.
    pub fn stage_containing(&self, elapsed_ms: u64) -> Option<usize> {
        let mut cumulative_ms: u64 = 0;
        for (i, stage) in self.stages.iter().enumerate() {
            if stage.duration_ms == 0 {
                // Terminal marker ends the walk.
                break;
            }
            cumulative_ms += stage.duration_ms;
            if elapsed_ms < cumulative_ms {
                return Some(i);
            }
        }
        None
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self::new(DEFAULT_TIMELINE)
    }
}
