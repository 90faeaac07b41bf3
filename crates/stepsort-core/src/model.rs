#![forbid(unsafe_code)]

//! Instrumented sequence model.
//!
//! [`SequenceModel`] owns the integers being sorted and the running
//! [`Stats`]. Every primitive a driver may use to inspect or mutate the
//! sequence lives here, so counting is a property of the model rather than
//! of driver discipline.
//!
//! # Design Notes
//!
//! - Length is fixed for the lifetime of the model: elements reorder, never
//!   appear or disappear.
//! - Out-of-range indices are contract violations. All indices are generated
//!   by the drivers, so a bad index is a driver bug; plain slice indexing
//!   panics and that is the intended behavior.
//! - Shifts count into `swaps` as well as `shifts`: insertion sort's shift
//!   is the swap-equivalent unit that keeps its statistics comparable with
//!   the other algorithms.

/// Running counters for one run.
///
/// Counters reset at run start and only grow while a run is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Instrumented comparisons, including failed loop-guard checks.
    pub comparisons: u64,
    /// Swap-equivalents: real exchanges plus shifts.
    pub swaps: u64,
    /// Shifts alone (subset of `swaps`).
    pub shifts: u64,
}

impl Stats {
    /// Fresh zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            shifts: 0,
        }
    }
}

/// The mutable sequence a driver sorts, with counting primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceModel {
    values: Vec<i32>,
    stats: Stats,
}

impl SequenceModel {
    /// Wrap a sequence with zeroed counters.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            stats: Stats::new(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Uncounted read of one element.
    #[must_use]
    pub fn value(&self, i: usize) -> i32 {
        self.values[i]
    }

    /// Borrow the current contents.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Owned copy of the current contents, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Zero the counters (run start).
    pub fn reset_stats(&mut self) {
        self.stats = Stats::new();
    }

    /// Counted comparison: `values[i] > values[j]`.
    ///
    /// Drivers pick the operand order that expresses their comparator
    /// direction; quick sort calls `compare(pivot_idx, j)` to ask
    /// "is `values[j]` below the pivot".
    pub fn compare(&mut self, i: usize, j: usize) -> bool {
        self.stats.comparisons += 1;
        self.values[i] > self.values[j]
    }

    /// Counted comparison against a held key: `values[i] > key`.
    ///
    /// Insertion sort's walk compares against the key it lifted out of the
    /// sequence, which no longer lives at any index mid-walk.
    pub fn compare_with(&mut self, i: usize, key: i32) -> bool {
        self.stats.comparisons += 1;
        self.values[i] > key
    }

    /// Counted exchange of positions `i` and `j`. Self-swaps count too.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.values.swap(i, j);
    }

    /// Uncounted overwrite of position `i`.
    pub fn assign(&mut self, i: usize, value: i32) {
        self.values[i] = value;
    }

    /// Counted shift: copy `values[from]` into `to`.
    ///
    /// Increments both `swaps` (parity with the other algorithms) and the
    /// dedicated `shifts` counter.
    pub fn shift(&mut self, from: usize, to: usize) {
        self.stats.swaps += 1;
        self.stats.shifts += 1;
        self.values[to] = self.values[from];
    }

    /// True when the sequence is non-decreasing.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_counts_and_reports_order() {
        let mut seq = SequenceModel::new(vec![3, 1]);
        assert!(seq.compare(0, 1));
        assert!(!seq.compare(1, 0));
        assert_eq!(seq.stats().comparisons, 2);
        assert_eq!(seq.stats().swaps, 0);
        assert_eq!(seq.values(), &[3, 1]);
    }

    #[test]
    fn compare_with_counts_against_key() {
        let mut seq = SequenceModel::new(vec![5, 2]);
        assert!(seq.compare_with(0, 4));
        assert!(!seq.compare_with(1, 4));
        assert_eq!(seq.stats().comparisons, 2);
    }

    #[test]
    fn swap_exchanges_and_counts() {
        let mut seq = SequenceModel::new(vec![9, 4, 7]);
        seq.swap(0, 2);
        assert_eq!(seq.values(), &[7, 4, 9]);
        assert_eq!(seq.stats().swaps, 1);
        assert_eq!(seq.stats().shifts, 0);
    }

    #[test]
    fn self_swap_still_counts() {
        let mut seq = SequenceModel::new(vec![1, 2]);
        seq.swap(1, 1);
        assert_eq!(seq.values(), &[1, 2]);
        assert_eq!(seq.stats().swaps, 1);
    }

    #[test]
    fn shift_counts_into_both_counters() {
        let mut seq = SequenceModel::new(vec![8, 3]);
        seq.shift(0, 1);
        assert_eq!(seq.values(), &[8, 8]);
        assert_eq!(seq.stats().swaps, 1);
        assert_eq!(seq.stats().shifts, 1);
    }

    #[test]
    fn assign_is_uncounted() {
        let mut seq = SequenceModel::new(vec![8, 3]);
        seq.assign(0, 1);
        assert_eq!(seq.values(), &[1, 3]);
        assert_eq!(seq.stats(), Stats::new());
    }

    #[test]
    fn reset_stats_zeroes_counters() {
        let mut seq = SequenceModel::new(vec![2, 1]);
        seq.compare(0, 1);
        seq.swap(0, 1);
        seq.reset_stats();
        assert_eq!(seq.stats(), Stats::new());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut seq = SequenceModel::new(vec![2, 1]);
        let snap = seq.snapshot();
        seq.swap(0, 1);
        assert_eq!(snap, vec![2, 1]);
        assert_eq!(seq.values(), &[1, 2]);
    }

    #[test]
    fn is_sorted_handles_edges() {
        assert!(SequenceModel::new(vec![]).is_sorted());
        assert!(SequenceModel::new(vec![7]).is_sorted());
        assert!(SequenceModel::new(vec![1, 1, 2]).is_sorted());
        assert!(!SequenceModel::new(vec![2, 1]).is_sorted());
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_is_fatal() {
        let mut seq = SequenceModel::new(vec![1]);
        let _ = seq.compare(0, 1);
    }
}
