#![forbid(unsafe_code)]

//! Insertion sort driver.

use crate::algorithm::Algorithm;
use crate::driver::{Interrupted, SortDriver, StepSink};
use crate::event::StepAction;
use crate::model::SequenceModel;

/// Shift-based insertion sort.
///
/// Each round lifts `seq[i]` out as the key, then walks left over the sorted
/// prefix: every probe that finds a larger element emits a `Compare` followed
/// by a `Shift` that copies that element one slot right. The probe that ends
/// the walk emits only its `Compare`. The key lands in the hole afterwards
/// with an uncounted assign.
///
/// Shifts count as swap-equivalents so the totals line up with the exchange
/// algorithms, and into the dedicated `shifts` counter besides.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortDriver for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn drive(&self, seq: &mut SequenceModel, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
        let n = seq.len();
        for i in 1..n {
            let key = seq.value(i);
            let mut hole = i;
            while hole > 0 {
                let above = seq.compare_with(hole - 1, key);
                sink.emit(
                    StepAction::Compare {
                        i: hole - 1,
                        j: hole,
                    },
                    seq,
                )?;
                if !above {
                    break;
                }
                seq.shift(hole - 1, hole);
                sink.emit(
                    StepAction::Shift {
                        from: hole - 1,
                        to: hole,
                    },
                    seq,
                )?;
                hole -= 1;
            }
            seq.assign(hole, key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::RecordingSink;

    fn run(values: Vec<i32>) -> (SequenceModel, Vec<StepAction>) {
        let mut seq = SequenceModel::new(values);
        let mut sink = RecordingSink::new();
        InsertionSort
            .drive(&mut seq, &mut sink)
            .expect("recording sink never interrupts");
        (seq, sink.actions)
    }

    #[test]
    fn sorts_the_reference_input() {
        let (seq, _) = run(vec![5, 3, 8, 1]);
        assert_eq!(seq.values(), &[1, 3, 5, 8]);
        assert_eq!(seq.stats().comparisons, 5);
        assert_eq!(seq.stats().swaps, 4);
        assert_eq!(seq.stats().shifts, 4);
    }

    #[test]
    fn full_event_trace_for_reference_input() {
        use StepAction::{Compare, Shift};
        let (_, actions) = run(vec![5, 3, 8, 1]);
        assert_eq!(
            actions,
            vec![
                Compare { i: 0, j: 1 },
                Shift { from: 0, to: 1 },
                Compare { i: 1, j: 2 },
                Compare { i: 2, j: 3 },
                Shift { from: 2, to: 3 },
                Compare { i: 1, j: 2 },
                Shift { from: 1, to: 2 },
                Compare { i: 0, j: 1 },
                Shift { from: 0, to: 1 },
            ]
        );
    }

    #[test]
    fn sorted_input_never_shifts() {
        let (seq, actions) = run(vec![1, 2, 3, 4]);
        // One failed walk probe per round.
        assert_eq!(seq.stats().comparisons, 3);
        assert_eq!(seq.stats().shifts, 0);
        assert!(actions.iter().all(|a| matches!(a, StepAction::Compare { .. })));
    }

    #[test]
    fn reverse_input_shifts_everything() {
        let (seq, _) = run(vec![4, 3, 2, 1]);
        assert_eq!(seq.values(), &[1, 2, 3, 4]);
        // Every walk runs to the front: no failed probes exist.
        assert_eq!(seq.stats().comparisons, 6);
        assert_eq!(seq.stats().shifts, 6);
        assert_eq!(seq.stats().swaps, 6);
    }

    #[test]
    fn equal_keys_stop_the_walk() {
        // Strict greater-than means an equal neighbor ends the walk, which
        // keeps equal elements in their original order.
        let (seq, actions) = run(vec![2, 2, 1]);
        assert_eq!(seq.values(), &[1, 2, 2]);
        let shifts = actions
            .iter()
            .filter(|a| matches!(a, StepAction::Shift { .. }))
            .count();
        assert_eq!(shifts, 2);
    }

    #[test]
    fn trivial_lengths_emit_nothing() {
        for values in [vec![], vec![3]] {
            let (seq, actions) = run(values);
            assert!(actions.is_empty());
            assert_eq!(seq.stats().comparisons, 0);
        }
    }
}
