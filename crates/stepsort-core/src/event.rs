#![forbid(unsafe_code)]

//! Step event vocabulary.
//!
//! A step is one atomic, observable unit of algorithm progress: a comparison,
//! an exchange, an insertion shift, or a pivot selection. Events are
//! ephemeral - produced, observed, discarded. The engine keeps no history;
//! recording is a host (or test probe) concern.

use std::fmt;

use crate::algorithm::Algorithm;

/// Classification of a step, independent of the indices it touches.
///
/// The highlight mapping in `stepsort-runtime` is keyed on
/// `(Algorithm, StepKind)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Two values were compared.
    Compare,
    /// Two positions exchanged values.
    Swap,
    /// A value was copied one position over (insertion sort).
    Shift,
    /// A partition chose its pivot (quick sort).
    PivotSelect,
}

/// One step, with the sequence positions it implicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepAction {
    /// Positions `i` and `j` were compared.
    Compare { i: usize, j: usize },
    /// Positions `i` and `j` exchanged values (possibly `i == j`).
    Swap { i: usize, j: usize },
    /// The value at `from` was copied to `to`.
    Shift { from: usize, to: usize },
    /// The partition over the current range selected `index` as pivot.
    PivotSelect { index: usize },
}

impl StepAction {
    /// The kind of this step.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        match self {
            StepAction::Compare { .. } => StepKind::Compare,
            StepAction::Swap { .. } => StepKind::Swap,
            StepAction::Shift { .. } => StepKind::Shift,
            StepAction::PivotSelect { .. } => StepKind::PivotSelect,
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Compare { i, j } => write!(f, "compare {i}<>{j}"),
            StepAction::Swap { i, j } => write!(f, "swap {i}<>{j}"),
            StepAction::Shift { from, to } => write!(f, "shift {from}->{to}"),
            StepAction::PivotSelect { index } => write!(f, "pivot {index}"),
        }
    }
}

/// A step together with its provenance and the post-step sequence snapshot.
///
/// This is the unit recorded by probes and exported by hosts; inside a run
/// the synchronizer works from the leaner `(StepAction, &SequenceModel)`
/// pair and builds renderer frames directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEvent {
    /// Which driver produced the step.
    pub algorithm: Algorithm,
    /// The step itself.
    pub action: StepAction,
    /// Sequence contents after the step was applied.
    pub sequence: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(StepAction::Compare { i: 0, j: 1 }.kind(), StepKind::Compare);
        assert_eq!(StepAction::Swap { i: 2, j: 2 }.kind(), StepKind::Swap);
        assert_eq!(StepAction::Shift { from: 1, to: 2 }.kind(), StepKind::Shift);
        assert_eq!(
            StepAction::PivotSelect { index: 4 }.kind(),
            StepKind::PivotSelect
        );
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(StepAction::Compare { i: 3, j: 4 }.to_string(), "compare 3<>4");
        assert_eq!(StepAction::Shift { from: 1, to: 2 }.to_string(), "shift 1->2");
        assert_eq!(StepAction::PivotSelect { index: 7 }.to_string(), "pivot 7");
    }

    #[test]
    fn event_carries_snapshot() {
        let event = StepEvent {
            algorithm: Algorithm::Bubble,
            action: StepAction::Swap { i: 0, j: 1 },
            sequence: vec![1, 2],
        };
        assert_eq!(event.sequence, vec![1, 2]);
        assert_eq!(event.algorithm, Algorithm::Bubble);
    }
}
