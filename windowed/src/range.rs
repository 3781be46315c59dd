use crate::ItemBounds;

/// Inclusive index range to render, already inflated by overscan and clamped
/// to `[0, count - 1]`.
///
/// An empty viewport or collection has no range at all; those cases are
/// `Option::None` at the query sites rather than a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    /// Inclusive.
    pub stop: usize,
}

impl VisibleRange {
    /// Number of indices in the range (at least 1).
    pub fn count(&self) -> usize {
        self.stop - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.stop
    }

    /// Iterator over the contained indices.
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.stop
    }

    /// Inflates by `overscan` on both sides, clamped to `[0, count - 1]`.
    ///
    /// Overscan keeps keyboard-focus traversal off unrendered placeholders one
    /// step outside the window and removes the one-frame flash of empty space
    /// at the edges during fast scrolls.
    pub(crate) fn with_overscan(self, overscan: usize, count: usize) -> Self {
        Self {
            start: self.start.saturating_sub(overscan),
            stop: (self.stop + overscan).min(count - 1),
        }
    }
}

/// Walks forward from `start`, accumulating item sizes until the viewport's
/// trailing edge (`scroll_end`) is covered or the collection is exhausted.
///
/// If the collection is shorter than the viewport this simply lands on
/// `count - 1`; no synthetic padding items are introduced.
pub(crate) fn stop_index_for_start(
    start: usize,
    start_bounds: ItemBounds,
    scroll_end: f64,
    count: usize,
    bounds: &mut dyn FnMut(usize) -> ItemBounds,
) -> usize {
    let mut stop = start;
    let mut trailing_edge = start_bounds.end();
    while stop < count - 1 && trailing_edge < scroll_end {
        stop += 1;
        trailing_edge += bounds(stop).size;
    }
    stop
}
