#![forbid(unsafe_code)]

//! Selection sort driver.

use crate::algorithm::Algorithm;
use crate::driver::{Interrupted, SortDriver, StepSink};
use crate::event::StepAction;
use crate::model::SequenceModel;

/// Minimum-selection sort.
///
/// Each pass scans the unsorted tail for its minimum, comparing the scan
/// cursor against the tracked minimum position, then swaps the minimum into
/// place. No swap is issued when the minimum is already in place, so a
/// sorted input produces zero swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortDriver for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn drive(&self, seq: &mut SequenceModel, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
        let n = seq.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                // Compare events carry the minimum tracked *before* this
                // probe, then the tracked position advances.
                let lower = seq.compare(min, j);
                sink.emit(StepAction::Compare { i: min, j }, seq)?;
                if lower {
                    min = j;
                }
            }
            if min != i {
                seq.swap(i, min);
                sink.emit(StepAction::Swap { i, j: min }, seq)?;
            }
        }
        Ok(())
    }
}
