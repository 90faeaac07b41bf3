#![forbid(unsafe_code)]

//! Bubble sort driver.

use crate::algorithm::Algorithm;
use crate::driver::{Interrupted, SortDriver, StepSink};
use crate::event::StepAction;
use crate::model::SequenceModel;

/// Adjacent-exchange bubble sort.
///
/// Every pass runs in full: there is no early exit on a clean pass, so the
/// comparison count is `n * (n - 1) / 2` for every input of length `n`.
/// Step counts stay deterministic, which matters more here than saved work.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortDriver for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn drive(&self, seq: &mut SequenceModel, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
        let n = seq.len();
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - pass {
                let out_of_order = seq.compare(j, j + 1);
                sink.emit(StepAction::Compare { i: j, j: j + 1 }, seq)?;
                if out_of_order {
                    seq.swap(j, j + 1);
                    sink.emit(StepAction::Swap { i: j, j: j + 1 }, seq)?;
                }
            }
        }
        Ok(())
    }
}
