#![forbid(unsafe_code)]

//! Symbolic highlight regions.
//!
//! Each step maps to a set of symbolic regions describing which part of the
//! algorithm is active, independent of any concrete source listing. A host
//! that displays pseudocode maps regions to its own line numbers; a host
//! without one ignores them.
//!
//! The mapping is a pure function over `(Algorithm, StepKind)`, fixed at
//! compile time. Adding an algorithm or a step kind extends the `match` and
//! the compiler points at every spot that needs a decision.

use bitflags::bitflags;
use stepsort_core::{Algorithm, StepKind};

bitflags! {
    /// Symbolic regions of an algorithm listing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RegionSet: u8 {
        /// Outer pass/round loop header.
        const OUTER_LOOP     = 0b0000_0001;
        /// Inner scan/walk loop header.
        const INNER_LOOP     = 0b0000_0010;
        /// The comparison condition.
        const COMPARE        = 0b0000_0100;
        /// The exchange statement.
        const SWAP           = 0b0000_1000;
        /// The one-slot copy in insertion sort.
        const SHIFT          = 0b0001_0000;
        /// The pivot choice at the head of a partition.
        const PIVOT_SELECT   = 0b0010_0000;
        /// The partition scan over `[low, high)`.
        const PARTITION_SCAN = 0b0100_0000;
    }
}

/// Regions active while `algorithm` performs a step of `kind`.
///
/// Pairs an algorithm never produces map to the empty set.
#[must_use]
pub fn regions(algorithm: Algorithm, kind: StepKind) -> RegionSet {
    match algorithm {
        Algorithm::Bubble => match kind {
            StepKind::Compare => RegionSet::OUTER_LOOP | RegionSet::INNER_LOOP | RegionSet::COMPARE,
            StepKind::Swap => RegionSet::INNER_LOOP | RegionSet::SWAP,
            StepKind::Shift | StepKind::PivotSelect => RegionSet::empty(),
        },
        Algorithm::Selection => match kind {
            StepKind::Compare => RegionSet::OUTER_LOOP | RegionSet::INNER_LOOP | RegionSet::COMPARE,
            // The selection swap sits in the outer loop, after the scan.
            StepKind::Swap => RegionSet::OUTER_LOOP | RegionSet::SWAP,
            StepKind::Shift | StepKind::PivotSelect => RegionSet::empty(),
        },
        Algorithm::Insertion => match kind {
            StepKind::Compare => RegionSet::OUTER_LOOP | RegionSet::INNER_LOOP | RegionSet::COMPARE,
            StepKind::Shift => RegionSet::INNER_LOOP | RegionSet::SHIFT,
            StepKind::Swap | StepKind::PivotSelect => RegionSet::empty(),
        },
        Algorithm::Quick => match kind {
            StepKind::PivotSelect => RegionSet::PIVOT_SELECT,
            StepKind::Compare => RegionSet::PARTITION_SCAN | RegionSet::COMPARE,
            StepKind::Swap => RegionSet::PARTITION_SCAN | RegionSet::SWAP,
            StepKind::Shift => RegionSet::empty(),
        },
    }
}
