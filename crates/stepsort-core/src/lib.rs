#![forbid(unsafe_code)]

//! stepsort core
//!
//! This crate holds the algorithmic heart of stepsort: the instrumented
//! sequence model, the step event vocabulary, and the four sorting drivers
//! (bubble, selection, insertion, quick) that narrate their own progress one
//! observable step at a time.
//!
//! # Key Components
//!
//! - [`SequenceModel`] - Mutable integer sequence with counting primitives
//! - [`Stats`] - Running comparison/swap/shift counters
//! - [`StepAction`] / [`StepEvent`] - One atomic unit of algorithm progress
//! - [`SortDriver`] - The capability every algorithm implements
//! - [`StepSink`] - Where drivers hand off steps (and may be suspended)
//!
//! # Role in stepsort
//! `stepsort-core` knows nothing about pacing, threads, rendering, or
//! highlighting. Drivers push [`StepAction`]s into a [`StepSink`]; the sink
//! decides what observation and suspension mean. `stepsort-runtime` supplies
//! the paced, cancellable sink that hosts actually run.

pub mod algorithm;
pub mod bubble;
pub mod driver;
pub mod event;
pub mod insertion;
pub mod model;
pub mod quick;
pub mod selection;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use bubble::BubbleSort;
pub use driver::{Interrupted, SortDriver, StepSink, driver_for};
pub use event::{StepAction, StepEvent, StepKind};
pub use insertion::InsertionSort;
pub use model::{SequenceModel, Stats};
pub use quick::QuickSort;
pub use selection::SelectionSort;
