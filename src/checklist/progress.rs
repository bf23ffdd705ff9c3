//! Progress derivation — a pure function over the coordinator's state.

use serde::Serialize;

use super::model::ChecklistStep;

/// Derived progress view. Never stored; recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistView {
    /// Ids of completed steps — always a prefix of the checklist order.
    pub completed_step_ids: Vec<String>,
    /// Rounded completion percentage in `[0, 100]`.
    pub progress_percent: u8,
}

/// Derive the checklist view from the tour's step index and the persisted
/// completion flag.
///
/// A completed tour marks every step done regardless of the index. An
/// empty catalog derives to 0% rather than dividing by zero.
pub fn derive(steps: &[ChecklistStep], step_index: usize, completed: bool) -> ChecklistView {
    let total = steps.len();
    if total == 0 {
        return ChecklistView {
            completed_step_ids: Vec::new(),
            progress_percent: 0,
        };
    }

    let done = if completed {
        total
    } else {
        step_index.min(total)
    };

    ChecklistView {
        completed_step_ids: steps[..done].iter().map(|s| s.id.to_string()).collect(),
        progress_percent: (done as f64 / total as f64 * 100.0).round() as u8,
    }
}

/// Whether a step can be clicked to replay the tour from its position.
///
/// Accessible means completed or current — never a step strictly ahead of
/// the cursor.
pub fn is_accessible(
    steps: &[ChecklistStep],
    step_index: usize,
    completed: bool,
    step_id: &str,
) -> bool {
    let Some(position) = steps.iter().position(|s| s.id == step_id) else {
        return false;
    };
    completed || position < step_index.min(steps.len()) || position == step_index
}
