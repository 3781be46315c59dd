use alloc::vec::Vec;

use crate::ItemBounds;

/// Lazily built table of cumulative offsets for a variable-size axis.
///
/// Entries exist only up to the highest index that has been requested so far
/// (the watermark). Extension is strictly sequential: visiting index `i`
/// resolves and records sizes for every index up to `i`, so cached lookups are
/// O(1) and a fresh lookup is amortized O(1) per newly visited index.
#[derive(Clone, Debug, Default)]
pub(crate) struct OffsetCache {
    entries: Vec<ItemBounds>,
}

impl OffsetCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries (watermark + 1).
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cumulative extent of everything cached so far.
    pub(crate) fn known_extent(&self) -> f64 {
        self.entries.last().map_or(0.0, ItemBounds::end)
    }

    /// `(measured_count, measured_total)` for extent estimation.
    pub(crate) fn measured_stats(&self) -> (usize, f64) {
        (self.entries.len(), self.known_extent())
    }

    /// Bounds of `index`, extending the table as needed.
    ///
    /// The caller guarantees `index < count`; `resolve` supplies authoritative
    /// sizes for newly visited indices.
    pub(crate) fn bounds(
        &mut self,
        index: usize,
        resolve: &mut dyn FnMut(usize) -> f64,
    ) -> ItemBounds {
        self.extend_through(index, resolve);
        self.entries[index]
    }

    /// Index of the item whose span contains `offset`.
    ///
    /// Cached lookups binary-search the cumulative offsets; an offset past the
    /// watermark extends the table forward until it is covered or `count` is
    /// exhausted, then clamps to the last item.
    pub(crate) fn index_at_offset(
        &mut self,
        offset: f64,
        count: usize,
        resolve: &mut dyn FnMut(usize) -> f64,
    ) -> usize {
        debug_assert!(count > 0, "index_at_offset on an empty axis");
        while self.entries.len() < count && self.known_extent() <= offset {
            self.push_next(resolve);
        }
        if offset >= self.known_extent() {
            return count - 1;
        }
        // Last entry whose leading edge is at or before `offset`. Zero-size
        // items share a leading edge; the last of them wins, matching the
        // sequential walk a caller would do by hand.
        let after = self.entries.partition_point(|b| b.offset <= offset);
        after.saturating_sub(1).min(count - 1)
    }

    /// Drops every entry at or after `index`, forcing lazy recomputation.
    pub(crate) fn invalidate_from(&mut self, index: usize) {
        self.entries.truncate(index);
    }

    fn extend_through(&mut self, index: usize, resolve: &mut dyn FnMut(usize) -> f64) {
        while self.entries.len() <= index {
            self.push_next(resolve);
        }
    }

    fn push_next(&mut self, resolve: &mut dyn FnMut(usize) -> f64) {
        let index = self.entries.len();
        let offset = self.known_extent();
        let size = resolve(index);
        self.entries.push(ItemBounds { offset, size });
    }
}

/// Per-axis layout strategy, chosen once at construction.
///
/// Fixed axes (constant or percentage specs) bypass the offset cache entirely;
/// that O(1) arithmetic path is the common case and must stay allocation-free.
#[derive(Clone, Debug)]
pub(crate) enum Layout {
    Fixed { item_size: f64 },
    Variable { cache: OffsetCache },
}

impl Layout {
    pub(crate) fn bounds(
        &mut self,
        index: usize,
        resolve: &mut dyn FnMut(usize) -> f64,
    ) -> ItemBounds {
        match self {
            Self::Fixed { item_size } => ItemBounds {
                offset: index as f64 * *item_size,
                size: *item_size,
            },
            Self::Variable { cache } => cache.bounds(index, resolve),
        }
    }

    pub(crate) fn index_at_offset(
        &mut self,
        offset: f64,
        count: usize,
        resolve: &mut dyn FnMut(usize) -> f64,
    ) -> usize {
        match self {
            Self::Fixed { item_size } => {
                if *item_size <= 0.0 {
                    return 0;
                }
                ((offset / *item_size) as usize).min(count - 1)
            }
            Self::Variable { cache } => cache.index_at_offset(offset, count, resolve),
        }
    }

    /// `(measured_count, measured_total)` feeding the extent estimator.
    ///
    /// Fixed axes report everything as measured: their total is exact.
    pub(crate) fn measured_stats(&self, count: usize) -> (usize, f64) {
        match self {
            Self::Fixed { item_size } => (count, count as f64 * *item_size),
            Self::Variable { cache } => {
                let (measured, total) = cache.measured_stats();
                (measured.min(count), total)
            }
        }
    }

    pub(crate) fn invalidate_from(&mut self, index: usize) {
        if let Self::Variable { cache } = self {
            cache.invalidate_from(index);
        }
    }

    /// Truncates cached state that refers to indices past a shrunken count.
    pub(crate) fn clamp_to_count(&mut self, count: usize) {
        if let Self::Variable { cache } = self {
            if cache.len() > count {
                cache.invalidate_from(count);
            }
        }
    }
}
