#![forbid(unsafe_code)]

//! The paced sink between a driver and its observers.
//!
//! One [`StepSynchronizer`] exists per run, on the run worker thread. For
//! every step the driver emits it publishes the post-step sequence and
//! counters to the engine's shared cell, resolves the highlight regions,
//! delivers a frame, and then suspends on the pacer. Events pass through in
//! driver order; nothing is reordered, dropped, or coalesced.
//!
//! Collaborator callbacks run with no engine lock held, so observers may
//! read engine state reentrantly.

use std::sync::Arc;

use stepsort_core::{Algorithm, Interrupted, SequenceModel, StepAction, StepSink};
use tracing::trace;

use crate::highlight::regions;
use crate::observer::{Frame, FrameSink, Highlighter};
use crate::pacer::Pacer;

/// Callback invoked with the post-step sequence and stats, under no lock of
/// the synchronizer's own. The engine uses it to keep its shared cell
/// current at step granularity.
pub(crate) type PublishFn = Box<dyn FnMut(&SequenceModel) + Send>;

pub(crate) struct StepSynchronizer {
    algorithm: Algorithm,
    pacer: Pacer,
    frames: Arc<dyn FrameSink>,
    highlighter: Arc<dyn Highlighter>,
    publish: PublishFn,
    /// Most recent pivot, retained across steps until the next selection.
    pivot: Option<usize>,
}

impl StepSynchronizer {
    pub(crate) fn new(
        algorithm: Algorithm,
        pacer: Pacer,
        frames: Arc<dyn FrameSink>,
        highlighter: Arc<dyn Highlighter>,
        publish: PublishFn,
    ) -> Self {
        Self {
            algorithm,
            pacer,
            frames,
            highlighter,
            publish,
            pivot: None,
        }
    }

    /// The indices a frame should mark for `action`.
    fn markers(action: StepAction) -> (Vec<usize>, Vec<usize>) {
        match action {
            StepAction::Compare { i, j } => (vec![i, j], Vec::new()),
            StepAction::Swap { i, j } => (Vec::new(), vec![i, j]),
            StepAction::Shift { from, to } => (Vec::new(), vec![from, to]),
            StepAction::PivotSelect { .. } => (Vec::new(), Vec::new()),
        }
    }
}

impl StepSink for StepSynchronizer {
    fn emit(&mut self, action: StepAction, seq: &SequenceModel) -> Result<(), Interrupted> {
        (self.publish)(seq);

        if let StepAction::PivotSelect { index } = action {
            self.pivot = Some(index);
        }

        trace!(algorithm = %self.algorithm, step = %action, "step");

        self.highlighter
            .highlight(regions(self.algorithm, action.kind()));

        let (comparing, swapping) = Self::markers(action);
        let frame = Frame {
            sequence: seq.snapshot(),
            comparing,
            swapping,
            sorted: Vec::new(),
            pivot: self.pivot,
            stats: seq.stats(),
        };
        self.frames.render_frame(&frame);

        self.pacer.pause()
    }
}
