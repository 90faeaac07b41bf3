//! Cross-driver integration tests over the public API.
//!
//! These exercise the drivers the way the runtime does: through
//! `driver_for` and a `StepSink`, checking that the emitted event stream is
//! a faithful narration of the mutations actually applied to the model.

use stepsort_core::{
    Algorithm, Interrupted, SequenceModel, StepAction, StepEvent, StepSink, driver_for,
};

/// Sink that records full events, the way a host-facing observer would.
struct EventLog {
    algorithm: Algorithm,
    events: Vec<StepEvent>,
}

impl EventLog {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            events: Vec::new(),
        }
    }
}

impl StepSink for EventLog {
    fn emit(&mut self, action: StepAction, seq: &SequenceModel) -> Result<(), Interrupted> {
        self.events.push(StepEvent {
            algorithm: self.algorithm,
            action,
            sequence: seq.snapshot(),
        });
        Ok(())
    }
}

/// Sink that allows a fixed number of steps, then interrupts.
struct FailAfter {
    remaining: usize,
}

impl StepSink for FailAfter {
    fn emit(&mut self, _action: StepAction, _seq: &SequenceModel) -> Result<(), Interrupted> {
        if self.remaining == 0 {
            return Err(Interrupted);
        }
        self.remaining -= 1;
        Ok(())
    }
}

fn drive(algorithm: Algorithm, values: &[i32]) -> (SequenceModel, Vec<StepEvent>) {
    let mut seq = SequenceModel::new(values.to_vec());
    let mut log = EventLog::new(algorithm);
    driver_for(algorithm)
        .drive(&mut seq, &mut log)
        .expect("logging sink never interrupts");
    (seq, log.events)
}

fn inputs() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![5, 3, 8, 1],
        vec![4, 2, 5, 1],
        vec![3, 6, 1, 8, 2],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![2, 2, 2],
        vec![-3, 0, -3, 7, 1],
    ]
}

#[test]
fn every_driver_sorts_every_input() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let (seq, _) = drive(algorithm, &input);
            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(
                seq.values(),
                expected.as_slice(),
                "{algorithm} failed on {input:?}"
            );
        }
    }
}

#[test]
fn stats_agree_with_emitted_events() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let (seq, events) = drive(algorithm, &input);
            let mut compares = 0u64;
            let mut swaps = 0u64;
            let mut shifts = 0u64;
            for event in &events {
                match event.action {
                    StepAction::Compare { .. } => compares += 1,
                    StepAction::Swap { .. } => swaps += 1,
                    StepAction::Shift { .. } => shifts += 1,
                    StepAction::PivotSelect { .. } => {}
                }
            }
            let stats = seq.stats();
            assert_eq!(stats.comparisons, compares, "{algorithm} on {input:?}");
            assert_eq!(stats.swaps, swaps + shifts, "{algorithm} on {input:?}");
            assert_eq!(stats.shifts, shifts, "{algorithm} on {input:?}");
        }
    }
}

#[test]
fn exchange_driver_snapshots_replay_from_the_input() {
    // Bubble, selection, and quick mutate only through counted swaps, so
    // replaying the event stream over the input must reproduce every
    // snapshot. Insertion is excluded: its final key placement is an
    // uncounted assign that no event narrates.
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Quick] {
        for input in inputs() {
            let (_, events) = drive(algorithm, &input);
            let mut scratch = input.clone();
            for event in &events {
                match event.action {
                    StepAction::Swap { i, j } => scratch.swap(i, j),
                    StepAction::Shift { from, to } => scratch[to] = scratch[from],
                    StepAction::Compare { .. } | StepAction::PivotSelect { .. } => {}
                }
                assert_eq!(
                    event.sequence, scratch,
                    "{algorithm} snapshot diverged on {input:?}"
                );
            }
        }
    }
}

#[test]
fn shift_snapshots_show_the_duplicated_slot() {
    let (_, events) = drive(Algorithm::Insertion, &[5, 3, 8, 1]);
    let mut seen_shift = false;
    for event in &events {
        if let StepAction::Shift { from, to } = event.action {
            seen_shift = true;
            assert_eq!(event.sequence[from], event.sequence[to]);
        }
    }
    assert!(seen_shift);
}

#[test]
fn events_carry_their_producing_algorithm() {
    for algorithm in Algorithm::ALL {
        let (_, events) = drive(algorithm, &[3, 1, 2]);
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| e.algorithm == algorithm));
    }
}

#[test]
fn empty_and_single_inputs_produce_no_events() {
    for algorithm in Algorithm::ALL {
        for input in [vec![], vec![42]] {
            let (seq, events) = drive(algorithm, &input);
            assert!(events.is_empty(), "{algorithm} emitted on {input:?}");
            assert_eq!(seq.stats().comparisons, 0);
            assert_eq!(seq.stats().swaps, 0);
        }
    }
}

#[test]
fn an_interrupting_sink_halts_every_driver() {
    for algorithm in Algorithm::ALL {
        let mut seq = SequenceModel::new(vec![9, 7, 5, 3, 1]);
        let mut sink = FailAfter { remaining: 4 };
        let outcome = driver_for(algorithm).drive(&mut seq, &mut sink);
        assert_eq!(outcome, Err(Interrupted), "{algorithm} ignored interrupt");
        assert_eq!(sink.remaining, 0);
    }
}
