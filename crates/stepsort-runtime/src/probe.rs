#![forbid(unsafe_code)]

//! Recording observers for tests and headless diagnostics.
//!
//! These are real [`FrameSink`]/[`Highlighter`] implementations backed by a
//! mutex-guarded log. Hand them to an engine behind an `Arc`, run to
//! completion, then inspect what the engine reported. Useful wherever a
//! terminal is unavailable: unit tests, CI, scripted analysis of step
//! streams.

use std::sync::Mutex;

use crate::highlight::RegionSet;
use crate::observer::{Frame, FrameSink, Highlighter};

/// Frame sink that keeps every frame it receives.
#[derive(Debug, Default)]
pub struct RecordingFrames {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingFrames {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of everything recorded, in arrival order.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    /// The most recent frame, if any.
    #[must_use]
    pub fn last(&self) -> Option<Frame> {
        self.frames.lock().unwrap().last().cloned()
    }

    /// Forget everything recorded so far.
    pub fn forget(&self) {
        self.frames.lock().unwrap().clear();
    }
}

impl FrameSink for RecordingFrames {
    fn render_frame(&self, frame: &Frame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}

/// One observed highlighter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightCall {
    /// `highlight(regions)` with this set.
    Regions(RegionSet),
    /// `clear()`.
    Clear,
}

/// Highlighter that keeps every call it receives.
#[derive(Debug, Default)]
pub struct RecordingHighlights {
    calls: Mutex<Vec<HighlightCall>>,
}

impl RecordingHighlights {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every call, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<HighlightCall> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `clear` was called.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, HighlightCall::Clear))
            .count()
    }

    /// The most recent `highlight` region set, ignoring clears.
    #[must_use]
    pub fn last_regions(&self) -> Option<RegionSet> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|c| match c {
                HighlightCall::Regions(r) => Some(*r),
                HighlightCall::Clear => None,
            })
    }
}

impl Highlighter for RecordingHighlights {
    fn highlight(&self, regions: RegionSet) {
        self.calls.lock().unwrap().push(HighlightCall::Regions(regions));
    }

    fn clear(&self) {
        self.calls.lock().unwrap().push(HighlightCall::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepsort_core::Stats;

    #[test]
    fn frames_record_in_order() {
        let probe = RecordingFrames::new();
        assert!(probe.is_empty());
        probe.render_frame(&Frame::dataset(vec![2, 1], Stats::new()));
        probe.render_frame(&Frame::completed(vec![1, 2], Stats::new()));
        assert_eq!(probe.len(), 2);
        assert_eq!(probe.last().unwrap().sorted, vec![0, 1]);
        probe.forget();
        assert!(probe.is_empty());
    }

    #[test]
    fn highlights_record_calls_and_clears() {
        let probe = RecordingHighlights::new();
        probe.highlight(RegionSet::COMPARE);
        probe.clear();
        probe.highlight(RegionSet::SWAP | RegionSet::INNER_LOOP);
        assert_eq!(probe.calls().len(), 3);
        assert_eq!(probe.clear_count(), 1);
        assert_eq!(
            probe.last_regions(),
            Some(RegionSet::SWAP | RegionSet::INNER_LOOP)
        );
    }

    #[test]
    fn last_regions_skips_trailing_clears() {
        let probe = RecordingHighlights::new();
        probe.highlight(RegionSet::PIVOT_SELECT);
        probe.clear();
        assert_eq!(probe.last_regions(), Some(RegionSet::PIVOT_SELECT));
    }
}
