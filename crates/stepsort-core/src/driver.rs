#![forbid(unsafe_code)]

//! Driver and sink traits.
//!
//! A [`SortDriver`] owns one algorithm's control flow and reports every
//! observable operation through a [`StepSink`] immediately after applying it
//! to the [`SequenceModel`]. The sink decides what happens next: record the
//! step, block until a pacer releases it, or interrupt the run.
//!
//! # Contract
//!
//! - Exactly one sink call per counted model operation, in execution order.
//! - The model mutation happens *before* the sink call, so the sequence the
//!   sink observes already reflects the step.
//! - When the sink returns [`Interrupted`], the driver unwinds promptly via
//!   `?` without emitting further steps. The sequence stays in whatever
//!   mid-sort state it had reached.

use std::error::Error;
use std::fmt;

use crate::algorithm::Algorithm;
use crate::bubble::BubbleSort;
use crate::event::StepAction;
use crate::insertion::InsertionSort;
use crate::model::SequenceModel;
use crate::quick::QuickSort;
use crate::selection::SelectionSort;

/// A run was cut short by its sink.
///
/// This is a control-flow signal, not a failure: cancellation is the normal
/// way to abandon a run mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sort run interrupted")
    }
}

impl Error for Interrupted {}

/// Receives each step as it happens.
///
/// Implementations gate pacing and cancellation: returning `Ok(())` lets the
/// driver continue, returning `Err(Interrupted)` unwinds it.
pub trait StepSink {
    /// Observe one step. `seq` reflects the sequence *after* the step.
    fn emit(&mut self, action: StepAction, seq: &SequenceModel) -> Result<(), Interrupted>;
}

/// One sorting algorithm's step-for-step control flow.
///
/// Drivers are stateless: all mutable state lives in the [`SequenceModel`]
/// and the sink. That keeps them shareable as `&'static dyn SortDriver`.
pub trait SortDriver: Sync {
    /// Which algorithm this driver implements.
    fn algorithm(&self) -> Algorithm;

    /// Sort `seq` in place, reporting every step through `sink`.
    ///
    /// Returns `Ok(())` when the sequence reached sorted order, or
    /// `Err(Interrupted)` when the sink cut the run short.
    fn drive(&self, seq: &mut SequenceModel, sink: &mut dyn StepSink) -> Result<(), Interrupted>;
}

/// Look up the driver for an algorithm.
#[must_use]
pub fn driver_for(algorithm: Algorithm) -> &'static dyn SortDriver {
    match algorithm {
        Algorithm::Bubble => &BubbleSort,
        Algorithm::Selection => &SelectionSort,
        Algorithm::Insertion => &InsertionSort,
        Algorithm::Quick => &QuickSort,
    }
}

/// Test sink that records every action and never interrupts.
#[cfg(test)]
pub(crate) struct RecordingSink {
    pub actions: Vec<StepAction>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
impl StepSink for RecordingSink {
    fn emit(&mut self, action: StepAction, _seq: &SequenceModel) -> Result<(), Interrupted> {
        self.actions.push(action);
        Ok(())
    }
}

/// Test sink that interrupts after a fixed number of steps.
#[cfg(test)]
pub(crate) struct CountdownSink {
    pub remaining: usize,
    pub seen: usize,
}

#[cfg(test)]
impl CountdownSink {
    pub fn new(allow: usize) -> Self {
        Self {
            remaining: allow,
            seen: 0,
        }
    }
}

#[cfg(test)]
impl StepSink for CountdownSink {
    fn emit(&mut self, _action: StepAction, _seq: &SequenceModel) -> Result<(), Interrupted> {
        if self.remaining == 0 {
            return Err(Interrupted);
        }
        self.remaining -= 1;
        self.seen += 1;
        Ok(())
    }
}
