#![forbid(unsafe_code)]

//! stepsort runtime
//!
//! The paced, cancellable half of stepsort: everything between a sorting
//! driver and the host that watches it run.
//!
//! # Key Components
//!
//! - [`Engine`] - The run controller: Idle/Running/Completed state machine,
//!   exclusivity, cancellation, live speed adjustment
//! - [`EngineConfig`] - Tunables with clamped normalization
//! - [`FrameSink`] / [`Highlighter`] - Collaborator traits hosts implement
//! - [`Frame`] - One rendered view of the run, delivered per step
//! - [`RegionSet`] / [`regions`] - Symbolic highlight mapping
//! - [`RecordingFrames`] / [`RecordingHighlights`] - Observer doubles for
//!   tests and headless diagnostics
//!
//! # A complete headless run
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use stepsort_core::Algorithm;
//! use stepsort_runtime::{Engine, EngineConfig, RecordingFrames};
//!
//! let frames = Arc::new(RecordingFrames::new());
//! let engine = Engine::with_observers(
//!     EngineConfig::new().with_speed(Duration::ZERO).with_seed(7),
//!     frames.clone(),
//!     Arc::new(stepsort_runtime::Silent),
//! );
//! engine.generate(12);
//! engine.start(Algorithm::Bubble);
//! assert!(engine.wait_until_settled(Duration::from_secs(5)));
//! let last = frames.last().expect("final frame");
//! assert_eq!(last.sorted.len(), 12);
//! ```

pub mod config;
pub mod dataset;
pub mod debug_trace;
pub mod engine;
pub mod highlight;
pub mod observer;
pub mod pacer;
pub mod probe;
mod synchronizer;

pub use config::EngineConfig;
pub use engine::{Engine, RunState};
pub use highlight::{RegionSet, regions};
pub use observer::{Frame, FrameSink, Highlighter, Silent};
pub use pacer::SpeedHandle;
pub use probe::{HighlightCall, RecordingFrames, RecordingHighlights};
