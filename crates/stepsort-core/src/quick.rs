#![forbid(unsafe_code)]

//! Quick sort driver.

use crate::algorithm::Algorithm;
use crate::driver::{Interrupted, SortDriver, StepSink};
use crate::event::StepAction;
use crate::model::SequenceModel;

/// Quick sort with Lomuto partitioning, last element as pivot.
///
/// Each partition announces its pivot with a `PivotSelect`, compares every
/// element of the range against it, swaps below-pivot elements behind a
/// moving boundary (self-swaps included, so the counters reflect the
/// algorithm as written), and finishes with the swap that places the pivot.
///
/// Subranges are worked off an explicit stack rather than recursion, so
/// reverse-sorted input cannot exhaust the call stack. The right range is
/// pushed first and popped last, which keeps events in recursion order:
/// a left subrange completes before its right sibling starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortDriver for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn drive(&self, seq: &mut SequenceModel, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
        let n = seq.len();
        if n < 2 {
            return Ok(());
        }
        let mut ranges = vec![(0, n - 1)];
        while let Some((low, high)) = ranges.pop() {
            let p = partition(seq, sink, low, high)?;
            if p + 1 < high {
                ranges.push((p + 1, high));
            }
            if p > low + 1 {
                ranges.push((low, p - 1));
            }
        }
        Ok(())
    }
}

/// Partition `[low, high]` around `seq[high]`; returns the pivot's final
/// position. Requires `low < high`.
fn partition(
    seq: &mut SequenceModel,
    sink: &mut dyn StepSink,
    low: usize,
    high: usize,
) -> Result<usize, Interrupted> {
    sink.emit(StepAction::PivotSelect { index: high }, seq)?;
    // Next slot for a below-pivot element. The pivot never moves during the
    // scan, so comparing against position `high` reads the live pivot.
    let mut boundary = low;
    for j in low..high {
        let below = seq.compare(high, j);
        sink.emit(StepAction::Compare { i: j, j: high }, seq)?;
        if below {
            seq.swap(boundary, j);
            sink.emit(StepAction::Swap { i: boundary, j }, seq)?;
            boundary += 1;
        }
    }
    seq.swap(boundary, high);
    sink.emit(
        StepAction::Swap {
            i: boundary,
            j: high,
        },
        seq,
    )?;
    Ok(boundary)
}
