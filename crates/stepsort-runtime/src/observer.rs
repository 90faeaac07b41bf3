#![forbid(unsafe_code)]

//! Collaborator interfaces: where the engine reports progress.
//!
//! The engine draws nothing and highlights nothing itself. Hosts hand it a
//! [`FrameSink`] and a [`Highlighter`]; both are called from the run worker
//! thread, once per step, in step order.
//!
//! # Reentrancy
//!
//! Callbacks run on the worker thread with no engine lock held, so reading
//! engine state (`stats`, `state`, `sequence`) from inside a callback is
//! fine. Control operations are not: `start`, `reset`, `generate`, and
//! `wait_until_settled` block on the run worker and would deadlock when
//! called from it. Keep callbacks quick; the run makes no progress while one
//! executes.

use stepsort_core::Stats;

use crate::highlight::RegionSet;

/// One rendered view of the run, delivered per step and at run boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Sequence contents after the step.
    pub sequence: Vec<i32>,
    /// Positions under comparison, when the step was a comparison.
    pub comparing: Vec<usize>,
    /// Positions being exchanged or shifted, when the step moved values.
    pub swapping: Vec<usize>,
    /// Positions known sorted: empty mid-run, `0..n` on the final frame.
    pub sorted: Vec<usize>,
    /// The most recent pivot, retained until the next pivot or run end.
    pub pivot: Option<usize>,
    /// Counters at the time of the frame.
    pub stats: Stats,
}

impl Frame {
    /// Frame for a fresh or cleared dataset: no step markers, no pivot.
    #[must_use]
    pub fn dataset(sequence: Vec<i32>, stats: Stats) -> Self {
        Self {
            sequence,
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            pivot: None,
            stats,
        }
    }

    /// Final frame of a completed run: every position marked sorted.
    #[must_use]
    pub fn completed(sequence: Vec<i32>, stats: Stats) -> Self {
        let sorted = (0..sequence.len()).collect();
        Self {
            sequence,
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted,
            pivot: None,
            stats,
        }
    }
}

/// Receives one [`Frame`] per step, plus dataset and completion frames.
pub trait FrameSink: Send + Sync {
    /// Present `frame`. Called in step order, never concurrently.
    fn render_frame(&self, frame: &Frame);
}

/// Receives the symbolic region set active at each step.
pub trait Highlighter: Send + Sync {
    /// Light up `regions` for the step just taken.
    fn highlight(&self, regions: RegionSet);

    /// Remove any active highlight (reset, or a fresh dataset).
    fn clear(&self);
}

/// Observer that ignores everything: the headless default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl FrameSink for Silent {
    fn render_frame(&self, _frame: &Frame) {}
}

impl Highlighter for Silent {
    fn highlight(&self, _regions: RegionSet) {}

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_frame_has_no_markers() {
        let frame = Frame::dataset(vec![3, 1, 2], Stats::new());
        assert!(frame.comparing.is_empty());
        assert!(frame.swapping.is_empty());
        assert!(frame.sorted.is_empty());
        assert_eq!(frame.pivot, None);
        assert_eq!(frame.sequence, vec![3, 1, 2]);
    }

    #[test]
    fn completed_frame_marks_every_position() {
        let frame = Frame::completed(vec![1, 2, 3], Stats::new());
        assert_eq!(frame.sorted, vec![0, 1, 2]);
        assert_eq!(frame.pivot, None);
    }

    #[test]
    fn silent_observer_accepts_everything() {
        let silent = Silent;
        silent.render_frame(&Frame::dataset(vec![], Stats::new()));
        silent.highlight(RegionSet::COMPARE);
        silent.clear();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frames_round_trip_through_serde() {
        let frame = Frame {
            sequence: vec![3, 1, 2],
            comparing: vec![0, 1],
            swapping: vec![],
            sorted: vec![],
            pivot: Some(2),
            stats: Stats::new(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
