#![forbid(unsafe_code)]

//! The run controller.
//!
//! [`Engine`] owns the sequence, the counters, the run state machine, and
//! the pacing handle. Exactly one run is in flight at a time; `start` and
//! `generate` are logged no-ops while one is. Runs execute on a worker
//! thread that pushes the selected driver through a paced synchronizer, so
//! control calls return immediately and `wait_until_settled` is the
//! blocking complement.
//!
//! Cancellation is prompt: `reset` fires the pacer's cancel handle, which
//! wakes any pacing wait in progress, joins the worker, and only then
//! clears state and highlights. No stale frame lands after a reset.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use stepsort_core::{Algorithm, Interrupted, SequenceModel, Stats, driver_for};
use tracing::{debug, info_span};

use crate::config::EngineConfig;
use crate::dataset::{SeededRng, draw_values};
use crate::observer::{Frame, FrameSink, Highlighter, Silent};
use crate::pacer::{CancelHandle, Pacer, SpeedHandle};
use crate::synchronizer::StepSynchronizer;

/// Where the engine is in its run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// No run in flight; `start` and `generate` are accepted.
    Idle,
    /// A driver is producing steps on the worker thread.
    Running,
    /// The last run finished; the sequence is sorted.
    Completed,
}

/// State guarded by the engine's one mutex.
struct Shared {
    sequence: Vec<i32>,
    stats: Stats,
    state: RunState,
    algorithm: Option<Algorithm>,
    rng: SeededRng,
}

struct Inner {
    config: EngineConfig,
    speed: SpeedHandle,
    shared: Mutex<Shared>,
    /// Signalled on every transition out of `Running`.
    settled: Condvar,
    frames: Arc<dyn FrameSink>,
    highlighter: Arc<dyn Highlighter>,
    run_counter: AtomicU64,
}

/// The single-instance sorting run controller.
///
/// All methods take `&self`; hand an `Arc<Engine>` to UI threads freely.
/// `start`, `reset`, and `generate` serialize on an internal control
/// mutex, so concurrent control calls cannot interleave mid-transition;
/// they execute in some order, each seeing the previous one's final state.
/// Control operations (including `wait_until_settled`) must not be called
/// from observer callbacks - they block on the run worker those callbacks
/// execute on.
pub struct Engine {
    inner: Arc<Inner>,
    /// Held for the full span of every control operation.
    control: Mutex<()>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    cancel: Mutex<Option<CancelHandle>>,
}

impl Engine {
    /// Headless engine: frames and highlights go nowhere.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_observers(config, Arc::new(Silent), Arc::new(Silent))
    }

    /// Engine reporting to the given collaborators.
    #[must_use]
    pub fn with_observers(
        config: EngineConfig,
        frames: Arc<dyn FrameSink>,
        highlighter: Arc<dyn Highlighter>,
    ) -> Self {
        let config = config.normalized();
        let rng = match config.seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        };
        let speed = SpeedHandle::new(config.speed);
        Self {
            inner: Arc::new(Inner {
                config,
                speed,
                shared: Mutex::new(Shared {
                    sequence: Vec::new(),
                    stats: Stats::new(),
                    state: RunState::Idle,
                    algorithm: None,
                    rng,
                }),
                settled: Condvar::new(),
                frames,
                highlighter,
                run_counter: AtomicU64::new(0),
            }),
            control: Mutex::new(()),
            worker: Mutex::new(None),
            cancel: Mutex::new(None),
        }
    }

    /// Start a run of `algorithm` over the current sequence.
    ///
    /// Logged no-op while a run is in flight. Counters reset to zero, the
    /// state becomes [`RunState::Running`], and the driver executes on a
    /// worker thread until completion or cancellation.
    pub fn start(&self, algorithm: Algorithm) {
        let _control = self.control.lock().unwrap();
        {
            let shared = self.inner.shared.lock().unwrap();
            if shared.state == RunState::Running {
                debug!(%algorithm, "start rejected: a run is already in flight");
                return;
            }
        }

        // With state out of Running the previous worker is finished or
        // exiting; join it so its final frame cannot interleave with the
        // new run's.
        if let Some(handle) = self.worker.lock().unwrap().take() {
            let _ = handle.join();
        }

        let snapshot = {
            let mut shared = self.inner.shared.lock().unwrap();
            shared.stats = Stats::new();
            shared.state = RunState::Running;
            shared.algorithm = Some(algorithm);
            shared.sequence.clone()
        };

        let (pacer, cancel) = Pacer::new(self.inner.speed.clone());
        *self.cancel.lock().unwrap() = Some(cancel);

        let run_id = self.inner.run_counter.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(%algorithm, run_id, n = snapshot.len(), "run starting");

        let inner = self.inner.clone();
        let handle = thread::spawn(move || run_worker(inner, algorithm, snapshot, pacer, run_id));
        *self.worker.lock().unwrap() = Some(handle);
    }

    /// Cancel any run, clear the sequence and counters, return to Idle.
    ///
    /// Joins the worker before clearing, so no stale frame or highlight can
    /// land afterwards. Idempotent: resetting an idle engine is a cheap
    /// no-op that still clears highlights.
    pub fn reset(&self) {
        let _control = self.control.lock().unwrap();
        if let Some(cancel) = self.cancel.lock().unwrap().take() {
            cancel.cancel();
        }
        if let Some(handle) = self.worker.lock().unwrap().take() {
            let _ = handle.join();
        }
        {
            let mut shared = self.inner.shared.lock().unwrap();
            shared.sequence.clear();
            shared.stats = Stats::new();
            shared.state = RunState::Idle;
            shared.algorithm = None;
            self.inner.settled.notify_all();
        }
        self.inner.highlighter.clear();
        crate::debug_trace!("engine reset");
        debug!("engine reset");
    }

    /// Replace the sequence with `size` freshly drawn values.
    ///
    /// Logged no-op while a run is in flight. `size` clamps into the
    /// configured bounds, counters zero, state returns to Idle, and the new
    /// dataset is rendered once so hosts show it before any run starts.
    pub fn generate(&self, size: usize) {
        let _control = self.control.lock().unwrap();
        let frame = {
            let mut shared = self.inner.shared.lock().unwrap();
            if shared.state == RunState::Running {
                debug!(requested = size, "generate rejected: a run is already in flight");
                return;
            }
            let len = self.inner.config.clamp_size(size);
            let (min, max) = (self.inner.config.min_value, self.inner.config.max_value);
            let values = draw_values(&mut shared.rng, len, min, max);
            shared.sequence = values;
            shared.stats = Stats::new();
            shared.state = RunState::Idle;
            shared.algorithm = None;
            Frame::dataset(shared.sequence.clone(), shared.stats)
        };
        self.inner.highlighter.clear();
        self.inner.frames.render_frame(&frame);
        debug!(requested = size, len = frame.sequence.len(), "dataset generated");
    }

    /// Update the pacing delay; the very next suspension observes it.
    ///
    /// Permitted in any state. `Duration::ZERO` means unpaced.
    pub fn set_speed(&self, delay: Duration) {
        self.inner.speed.set(delay);
        debug!(delay_ms = delay.as_millis() as u64, "speed updated");
    }

    /// Current pacing delay.
    #[must_use]
    pub fn speed(&self) -> Duration {
        self.inner.speed.get()
    }

    /// Current run state.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.inner.shared.lock().unwrap().state
    }

    /// Counters of the current (or last) run, step-granular while running.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.inner.shared.lock().unwrap().stats
    }

    /// Copy of the current sequence, step-granular while running.
    #[must_use]
    pub fn sequence(&self) -> Vec<i32> {
        self.inner.shared.lock().unwrap().sequence.clone()
    }

    /// The algorithm of the current (or last) run, if any.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.inner.shared.lock().unwrap().algorithm
    }

    /// Block until the state leaves [`RunState::Running`].
    ///
    /// Returns `true` when settled, `false` on timeout. Returns
    /// immediately when no run is in flight.
    #[must_use]
    pub fn wait_until_settled(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut shared = self.inner.shared.lock().unwrap();
        while shared.state == RunState::Running {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = self
                .inner
                .settled
                .wait_timeout(shared, deadline - now)
                .unwrap();
            shared = guard;
        }
        true
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.lock().unwrap().take() {
            cancel.cancel();
        }
        // Don't join in drop to avoid blocking.
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.inner.shared.lock().unwrap();
        f.debug_struct("Engine")
            .field("state", &shared.state)
            .field("algorithm", &shared.algorithm)
            .field("len", &shared.sequence.len())
            .field("stats", &shared.stats)
            .field("speed", &self.inner.speed.get())
            .field("frames", &"dyn FrameSink")
            .field("highlighter", &"dyn Highlighter")
            .finish()
    }
}

/// Body of the run worker thread: drive, then settle.
fn run_worker(
    inner: Arc<Inner>,
    algorithm: Algorithm,
    values: Vec<i32>,
    pacer: Pacer,
    run_id: u64,
) {
    let _span = info_span!("stepsort.run", algorithm = %algorithm, run_id).entered();
    crate::debug_trace!("run {run_id} started: algorithm={algorithm} n={}", values.len());

    let mut seq = SequenceModel::new(values);
    let publish = {
        let inner = inner.clone();
        Box::new(move |seq: &SequenceModel| {
            let mut shared = inner.shared.lock().unwrap();
            shared.sequence = seq.snapshot();
            shared.stats = seq.stats();
        })
    };
    let mut sync = StepSynchronizer::new(
        algorithm,
        pacer,
        inner.frames.clone(),
        inner.highlighter.clone(),
        publish,
    );

    match driver_for(algorithm).drive(&mut seq, &mut sync) {
        Ok(()) => {
            let stats = seq.stats();
            // Final frame first, then the Completed transition, so a host
            // that observes Completed has already been shown the result.
            inner
                .frames
                .render_frame(&Frame::completed(seq.snapshot(), stats));
            {
                let mut shared = inner.shared.lock().unwrap();
                shared.sequence = seq.snapshot();
                shared.stats = stats;
                shared.state = RunState::Completed;
                inner.settled.notify_all();
            }
            debug!(
                %algorithm,
                run_id,
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                "run completed"
            );
            crate::debug_trace!("run {run_id} completed");
        }
        Err(Interrupted) => {
            // reset() owns the state transition; the worker just leaves.
            debug!(%algorithm, run_id, "run interrupted");
            crate::debug_trace!("run {run_id} interrupted");
        }
    }
}
