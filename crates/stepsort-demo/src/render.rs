#![forbid(unsafe_code)]

//! Terminal presentation of engine frames.
//!
//! One [`TerminalView`] implements both collaborator traits: frames become a
//! horizontal bar chart with per-step color markers, highlight regions
//! become a marked-up pseudocode panel underneath. Redraws repaint in place
//! with cursor moves rather than scrolling the terminal.

use std::io::{Write, stdout};
use std::sync::Mutex;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use stepsort_core::Algorithm;
use stepsort_runtime::{Frame, FrameSink, Highlighter, RegionSet};

/// Widest a bar may grow, in cells.
const BAR_BUDGET: usize = 50;

/// Tag for structural listing lines that no step lights up.
const NONE: RegionSet = RegionSet::empty();

/// Pseudocode listing for `algorithm`: one line per row, tagged with the
/// regions that light it up. Untagged rows are structural and never light.
pub fn listing(algorithm: Algorithm) -> &'static [(RegionSet, &'static str)] {
    match algorithm {
        Algorithm::Bubble => &[
            (RegionSet::OUTER_LOOP, "for i in 0..n-1"),
            (RegionSet::INNER_LOOP, "  for j in 0..n-1-i"),
            (RegionSet::COMPARE, "    if a[j] > a[j+1]"),
            (RegionSet::SWAP, "      swap(a, j, j+1)"),
        ],
        Algorithm::Selection => &[
            (RegionSet::OUTER_LOOP, "for i in 0..n-1"),
            (RegionSet::INNER_LOOP, "  for j in i+1..n"),
            (RegionSet::COMPARE, "    if a[min] > a[j] { min = j }"),
            (RegionSet::SWAP, "  swap(a, i, min)"),
        ],
        Algorithm::Insertion => &[
            (RegionSet::OUTER_LOOP, "for i in 1..n { key = a[i] }"),
            (RegionSet::INNER_LOOP, "  while hole > 0"),
            (RegionSet::COMPARE, "    if a[hole-1] > key"),
            (RegionSet::SHIFT, "      a[hole] = a[hole-1]"),
            (NONE, "  a[hole] = key"),
        ],
        Algorithm::Quick => &[
            (RegionSet::PIVOT_SELECT, "pivot = a[high]"),
            (RegionSet::PARTITION_SCAN, "for j in low..high"),
            (RegionSet::COMPARE, "  if a[j] < pivot"),
            (RegionSet::SWAP, "    swap(a, slot, j)"),
            (NONE, "swap(a, slot, high)"),
        ],
    }
}

/// Cells of bar for `value`, scaled so `max` fills the budget.
pub fn bar_width(value: i32, max: i32, budget: usize) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    let scaled = (value as usize * budget) / max as usize;
    scaled.max(1)
}

/// The marker color for position `i` of `frame`, if any.
fn marker(frame: &Frame, i: usize) -> Option<Color> {
    if frame.sorted.contains(&i) {
        Some(Color::Green)
    } else if frame.swapping.contains(&i) {
        Some(Color::Red)
    } else if frame.comparing.contains(&i) {
        Some(Color::Yellow)
    } else if frame.pivot == Some(i) {
        Some(Color::Magenta)
    } else {
        None
    }
}

struct ViewState {
    regions: RegionSet,
}

/// Renderer and highlighter in one: bars on top, pseudocode underneath.
pub struct TerminalView {
    algorithm: Algorithm,
    state: Mutex<ViewState>,
}

impl TerminalView {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: Mutex::new(ViewState {
                regions: RegionSet::empty(),
            }),
        }
    }

    fn draw(&self, frame: &Frame) -> std::io::Result<()> {
        let regions = self.state.lock().unwrap().regions;
        let max = frame.sequence.iter().copied().max().unwrap_or(0);
        let mut out = stdout().lock();

        execute!(out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;

        for (i, &value) in frame.sequence.iter().enumerate() {
            let width = bar_width(value, max, BAR_BUDGET);
            let color = marker(frame, i).unwrap_or(Color::Blue);
            queue!(out, SetForegroundColor(color))?;
            writeln!(out, "{i:>3} {value:>4} {}", "█".repeat(width))?;
            queue!(out, ResetColor)?;
        }

        writeln!(
            out,
            "\n{}  comparisons: {}  swaps: {}  shifts: {}",
            self.algorithm,
            frame.stats.comparisons,
            frame.stats.swaps,
            frame.stats.shifts
        )?;

        writeln!(out)?;
        for &(line_regions, text) in listing(self.algorithm) {
            if !line_regions.is_empty() && regions.intersects(line_regions) {
                queue!(out, SetForegroundColor(Color::Cyan))?;
                writeln!(out, "> {text}")?;
                queue!(out, ResetColor)?;
            } else {
                writeln!(out, "  {text}")?;
            }
        }

        out.flush()
    }
}

impl FrameSink for TerminalView {
    fn render_frame(&self, frame: &Frame) {
        let _ = self.draw(frame);
    }
}

impl Highlighter for TerminalView {
    fn highlight(&self, regions: RegionSet) {
        self.state.lock().unwrap().regions = regions;
    }

    fn clear(&self) {
        self.state.lock().unwrap().regions = RegionSet::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepsort_core::StepKind;
    use stepsort_runtime::regions;

    #[test]
    fn bar_width_scales_and_clamps() {
        assert_eq!(bar_width(0, 100, 50), 0);
        assert_eq!(bar_width(100, 100, 50), 50);
        assert_eq!(bar_width(50, 100, 50), 25);
        // Small positive values still show one cell.
        assert_eq!(bar_width(1, 1000, 50), 1);
        // Degenerate inputs draw nothing.
        assert_eq!(bar_width(5, 0, 50), 0);
        assert_eq!(bar_width(-3, 100, 50), 0);
    }

    #[test]
    fn every_engine_region_lights_a_listing_line() {
        let kinds = [
            StepKind::Compare,
            StepKind::Swap,
            StepKind::Shift,
            StepKind::PivotSelect,
        ];
        for algorithm in Algorithm::ALL {
            for kind in kinds {
                let active = regions(algorithm, kind);
                if active.is_empty() {
                    continue;
                }
                assert!(
                    listing(algorithm)
                        .iter()
                        .any(|(line, _)| active.intersects(*line)),
                    "{algorithm}/{kind:?} lights no pseudocode line"
                );
            }
        }
    }

    #[test]
    fn structural_listing_lines_are_present_and_never_light() {
        // Insertion's key placement and quick's pivot placement are shown
        // for shape but carry no region, so no step may light them.
        for algorithm in [Algorithm::Insertion, Algorithm::Quick] {
            let structural: Vec<_> = listing(algorithm)
                .iter()
                .filter(|(line, _)| line.is_empty())
                .collect();
            assert_eq!(structural.len(), 1, "{algorithm} listing shape changed");
            assert!(!structural[0].1.is_empty());
        }
        for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
            assert!(listing(algorithm).iter().all(|(line, _)| !line.is_empty()));
        }
    }

    #[test]
    fn markers_rank_sorted_over_swap_over_compare() {
        let frame = Frame {
            sequence: vec![3, 1, 2],
            comparing: vec![0, 1],
            swapping: vec![1],
            sorted: vec![2],
            pivot: Some(0),
            stats: stepsort_core::Stats::new(),
        };
        assert_eq!(marker(&frame, 2), Some(Color::Green));
        assert_eq!(marker(&frame, 1), Some(Color::Red));
        assert_eq!(marker(&frame, 0), Some(Color::Yellow));
    }

    #[test]
    fn pivot_marker_applies_when_nothing_else_does() {
        let frame = Frame {
            sequence: vec![3, 1],
            comparing: vec![],
            swapping: vec![],
            sorted: vec![],
            pivot: Some(1),
            stats: stepsort_core::Stats::new(),
        };
        assert_eq!(marker(&frame, 1), Some(Color::Magenta));
        assert_eq!(marker(&frame, 0), None);
    }
}
