#![forbid(unsafe_code)]

//! stepsort public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Quick start
//!
//! ```
//! # #[cfg(feature = "runtime")] {
//! use std::time::Duration;
//! use stepsort::prelude::*;
//!
//! let engine = Engine::new(
//!     EngineConfig::new().with_speed(Duration::ZERO).with_seed(42),
//! );
//! engine.generate(20);
//! engine.start(Algorithm::Insertion);
//! assert!(engine.wait_until_settled(Duration::from_secs(5)));
//! assert_eq!(engine.state(), RunState::Completed);
//! # }
//! ```

// --- Core re-exports -------------------------------------------------------

pub use stepsort_core::{
    Algorithm, Interrupted, ParseAlgorithmError, SequenceModel, SortDriver, Stats, StepAction,
    StepEvent, StepKind, StepSink, driver_for,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use stepsort_runtime::{
    Engine, EngineConfig, Frame, FrameSink, HighlightCall, Highlighter, RecordingFrames,
    RecordingHighlights, RegionSet, RunState, Silent, regions,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Algorithm, SequenceModel, Stats, StepAction, StepKind};

    #[cfg(feature = "runtime")]
    pub use crate::{Engine, EngineConfig, Frame, FrameSink, Highlighter, RegionSet, RunState};

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use stepsort_core as core;
#[cfg(feature = "runtime")]
pub use stepsort_runtime as runtime;
