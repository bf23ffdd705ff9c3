//! Tour state machine — one running flag and a step cursor.

use serde::{Deserialize, Serialize};

use crate::catalog::DemoType;

/// Why a tour ended. Both reasons mark the tour complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    Finished,
    Skipped,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// A callback event from the rendering collaborator.
///
/// `target_not_found` is a normal skip, not an error — a step's target may
/// be legitimately absent for the active demo type or section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourEvent {
    /// The user moved past the step at `index`.
    Advanced { index: usize },
    /// The renderer could not locate the step's target element.
    TargetNotFound { index: usize },
    /// The user walked the whole tour.
    Finished,
    /// The user bailed out early.
    Skipped,
}

/// Coordinator-owned tour state.
///
/// `step_index` stays within `[0, step_count]`; a value equal to
/// `step_count` means the tour is exhausted. There are exactly two modes:
/// idle and running — no paused state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourState {
    pub running: bool,
    pub step_index: usize,
    pub demo_type: DemoType,
}

impl TourState {
    /// Initial state. `completed` is the persisted flag read at startup:
    /// a returning user who finished the tour doesn't get it again.
    pub fn new(demo_type: DemoType, completed: bool) -> Self {
        Self {
            running: !completed,
            step_index: 0,
            demo_type,
        }
    }

    /// Begin (or replay) the tour from `from_index`.
    ///
    /// Out-of-range input is a caller bug: it is clamped into
    /// `[0, step_count]` and reported rather than silently ignored.
    pub fn start(&mut self, from_index: usize, step_count: usize) {
        let clamped = from_index.min(step_count);
        if clamped != from_index {
            tracing::warn!(from_index, step_count, "Start index out of range, clamping");
        }
        self.running = true;
        self.step_index = clamped;
    }

    /// Move the cursor past the current step, saturating at `step_count`.
    /// Applies regardless of `running` — the consumer decides when to stop
    /// rendering.
    pub fn advance(&mut self, step_count: usize) {
        self.step_index = (self.step_index + 1).min(step_count);
    }

    /// Leave the running state. The cursor resets so a replay starts from
    /// the top.
    pub fn end(&mut self) {
        self.running = false;
        self.step_index = 0;
    }

    /// Swap the content persona in place. The cursor and running flag are
    /// untouched — this is a content swap, not a restart.
    pub fn select_demo_type(&mut self, demo_type: DemoType) {
        self.demo_type = demo_type;
    }
}
