use alloc::sync::Arc;
use core::cell::{Cell, RefCell};

use crate::cache::{Layout, OffsetCache};
use crate::estimate::estimate_total_extent;
use crate::range::stop_index_for_start;
use crate::scroll::offset_for_align;
use crate::size::SizeResolver;
use crate::{
    Align, AxisDirection, AxisOptions, FrameState, ItemBounds, ItemSizeSpec, ScrollDirection,
    ScrollState, ViewportState, VisibleRange,
};

/// A headless virtualization engine for one scrolling axis.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects and manages no real render tree nodes.
/// - The host drives it by supplying viewport sizes and scroll offsets.
/// - What to render for an index is the caller's business; the engine only
///   says *which* indices and *where* they go.
///
/// A two-axis grid is two independent instances of this type; see the
/// `windowed-grid` crate, which also provides smooth-scrolling helpers.
#[derive(Clone, Debug)]
pub struct AxisVirtualizer {
    options: AxisOptions,
    resolver: SizeResolver,
    layout: RefCell<Layout>,
    viewport_size: f64,
    /// Logical offset: 0 at the logical start regardless of RTL convention.
    scroll_offset: f64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl AxisVirtualizer {
    /// Creates a new axis engine from options.
    ///
    /// Whether the axis runs fixed (O(1) arithmetic) or variable (lazy offset
    /// cache) is decided here from the size specification and never revisited
    /// until the specification itself changes.
    pub fn new(options: AxisOptions) -> Self {
        let viewport_size = options.initial_viewport_size.unwrap_or(0.0).max(0.0);
        let scroll_offset = options.initial_offset.resolve().max(0.0);
        let resolver = SizeResolver::new(options.item_size.clone());
        let layout = RefCell::new(build_layout(&resolver, viewport_size));
        wdebug!(
            count = options.count,
            overscan = options.overscan,
            variable = resolver.is_variable(),
            "AxisVirtualizer::new"
        );
        Self {
            options,
            resolver,
            layout,
            viewport_size,
            scroll_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: AxisOptions) {
        let prev_count = self.options.count;
        let spec_unchanged = spec_equivalent(&self.options.item_size, &options.item_size);
        self.options = options;
        wtrace!(
            count = self.options.count,
            overscan = self.options.overscan,
            "AxisVirtualizer::set_options"
        );

        if !spec_unchanged {
            self.resolver = SizeResolver::new(self.options.item_size.clone());
            self.layout = RefCell::new(build_layout(&self.resolver, self.viewport_size));
        } else if self.options.count != prev_count {
            self.layout.get_mut().clamp_to_count(self.options.count);
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`set_options`](Self::set_options).
    pub fn update_options(&mut self, f: impl FnOnce(&mut AxisOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Self, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.layout.get_mut().clamp_to_count(count);
        self.notify();
    }

    pub fn direction(&self) -> AxisDirection {
        self.options.direction
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: f64) {
        let prev = self.viewport_size;
        self.on_resize(size, prev);
    }

    /// Applies a viewport size change reported by the host.
    ///
    /// Percentage-derived item sizes are recomputed against the new size; the
    /// scroll offset is deliberately left alone (re-justifying a previously
    /// centered item is the caller's decision, not the engine's).
    pub fn on_resize(&mut self, new_size: f64, prev_size: f64) {
        let new_size = new_size.max(0.0);
        if new_size == self.viewport_size {
            return;
        }
        wtrace!(new_size, prev_size, "on_resize");
        self.viewport_size = new_size;
        if !self.resolver.is_variable() {
            *self.layout.get_mut() = build_layout(&self.resolver, new_size);
        }
        self.notify();
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = if offset > prev {
            Some(ScrollDirection::Forward)
        } else if offset < prev {
            Some(ScrollDirection::Backward)
        } else {
            self.scroll_direction
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from the host (e.g. wheel/drag), and
    /// marks the axis as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: f64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|v| {
            v.set_scroll_offset(offset);
            v.notify_scroll_event(now_ms);
        });
    }

    /// Same as [`apply_scroll_offset_event`](Self::apply_scroll_offset_event),
    /// but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: f64, now_ms: u64) {
        self.batch_update(|v| {
            v.set_scroll_offset_clamped(offset);
            v.notify_scroll_event(now_ms);
        });
    }

    /// The committed offset in the host's physical coordinates.
    ///
    /// On a horizontal axis with an RTL offset behavior configured, this is
    /// the value the host should write to its scrollable surface; everywhere
    /// else it equals [`scroll_offset`](Self::scroll_offset).
    pub fn host_scroll_offset(&self) -> f64 {
        match self.rtl_behavior() {
            Some(behavior) => behavior.to_physical(self.scroll_offset, self.max_scroll_offset()),
            None => self.scroll_offset,
        }
    }

    /// Applies a raw scroll offset as reported by the host, undoing RTL
    /// inversion before committing.
    pub fn apply_host_scroll_offset(&mut self, physical: f64, now_ms: u64) {
        let logical = match self.rtl_behavior() {
            Some(behavior) => behavior.to_logical(physical, self.max_scroll_offset()),
            None => physical,
        };
        self.apply_scroll_offset_event_clamped(logical, now_ms);
    }

    fn rtl_behavior(&self) -> Option<crate::RtlOffsetBehavior> {
        // The vertical axis is never affected by RTL layout.
        match self.options.direction {
            AxisDirection::Horizontal => self.options.rtl_offset_behavior,
            AxisDirection::Vertical => None,
        }
    }

    /// Best-known total scrollable extent of the axis.
    ///
    /// Exact for fixed axes and for fully visited variable axes; otherwise
    /// unvisited trailing items are extrapolated from the running average of
    /// visited sizes (see [`estimate_total_extent`]).
    pub fn estimated_extent(&self) -> f64 {
        let (measured, total) = self.layout.borrow().measured_stats(self.options.count);
        estimate_total_extent(
            measured,
            total,
            self.options.count,
            self.options.estimated_item_size,
        )
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.estimated_extent() - self.viewport_size).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Pixel bounds of `index`.
    ///
    /// Out-of-range indices clamp to the nearest valid index; `None` only when
    /// the axis has no items at all.
    pub fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        Some(self.bounds_unchecked(index.min(count - 1)))
    }

    /// Index of the item whose span contains `offset` (clamped to valid
    /// bounds). `None` only when the axis has no items.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let offset = offset.max(0.0);
        let resolver = &self.resolver;
        Some(
            self.layout
                .borrow_mut()
                .index_at_offset(offset, count, &mut |i| resolver.resolve(i)),
        )
    }

    /// The strictly visible index range for the committed offset and viewport,
    /// without overscan. `None` when nothing can be visible.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.visible_range_for(self.scroll_offset, self.viewport_size)
    }

    pub fn visible_range_for(&self, scroll_offset: f64, viewport_size: f64) -> Option<VisibleRange> {
        let count = self.options.count;
        if count == 0 || viewport_size <= 0.0 {
            return None;
        }

        let max_scroll = (self.estimated_extent() - viewport_size).max(0.0);
        let scroll_offset = scroll_offset.clamp(0.0, max_scroll);
        let scroll_end = scroll_offset + viewport_size;

        let start = self
            .index_at_offset(scroll_offset)
            .unwrap_or(0)
            .min(count - 1);
        let start_bounds = self.bounds_unchecked(start);
        let stop = stop_index_for_start(start, start_bounds, scroll_end, count, &mut |i| {
            self.bounds_unchecked(i)
        });
        Some(VisibleRange { start, stop })
    }

    /// The range callers should actually render: the visible range inflated by
    /// overscan and clamped to valid bounds.
    pub fn render_range(&self) -> Option<VisibleRange> {
        self.render_range_for(self.scroll_offset, self.viewport_size)
    }

    pub fn render_range_for(&self, scroll_offset: f64, viewport_size: f64) -> Option<VisibleRange> {
        let visible = self.visible_range_for(scroll_offset, viewport_size)?;
        Some(visible.with_overscan(self.options.overscan, self.options.count))
    }

    /// Iterates the rendered items with their bounds, without allocating.
    pub fn for_each_rendered_item(&self, f: impl FnMut(usize, ItemBounds)) {
        self.for_each_rendered_item_for(self.scroll_offset, self.viewport_size, f);
    }

    pub fn for_each_rendered_item_for(
        &self,
        scroll_offset: f64,
        viewport_size: f64,
        mut f: impl FnMut(usize, ItemBounds),
    ) {
        let Some(range) = self.render_range_for(scroll_offset, viewport_size) else {
            return;
        };
        for index in range.indices() {
            f(index, self.bounds_unchecked(index));
        }
    }

    /// Programmatically scrolls to an index.
    ///
    /// Commits the computed (clamped) offset synchronously and returns it. A
    /// no-op for out-of-range indices: a stale request targeting an index that
    /// no longer exists is a routine transient, not an error. Does **not**
    /// mark the axis as "scrolling"; smooth animation, if any, is the host's
    /// to drive (see `windowed-grid`).
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> f64 {
        if index >= self.options.count {
            return self.scroll_offset;
        }
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Computes the offset [`scroll_to_index`](Self::scroll_to_index) would
    /// commit, without committing it.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        self.scroll_to_index_offset_from(index, align, self.scroll_offset)
    }

    /// Same, but resolving `Auto`/`Smart` against a caller-supplied current
    /// offset instead of the committed one.
    pub fn scroll_to_index_offset_from(
        &self,
        index: usize,
        align: Align,
        current_offset: f64,
    ) -> f64 {
        if index >= self.options.count {
            return self.clamp_scroll_offset(current_offset);
        }
        let bounds = self.bounds_unchecked(index);
        offset_for_align(
            align,
            bounds,
            self.viewport_size,
            current_offset,
            self.max_scroll_offset(),
        )
    }

    /// Programmatically scrolls to an absolute offset (clamped).
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        self.set_scroll_offset_clamped(offset);
        self.scroll_offset
    }

    /// Invalidates cached bounds for `index` and everything after it.
    ///
    /// Must be called whenever an item's authoritative size changes after it
    /// was resolved once (e.g. a dynamically measured row): the engine cannot
    /// observe rendered content itself. Recomputation is lazy but the stale
    /// values are gone before this returns; no staleness window is visible to
    /// callers. No-op for out-of-range indices and on fixed axes.
    pub fn reset_after_index(&mut self, index: usize) {
        if index >= self.options.count {
            return;
        }
        wtrace!(index, "reset_after_index");
        self.layout.get_mut().invalidate_from(index);
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Debounced `is_scrolling` reset; call once per frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if self.options.use_scrollend_event || !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            size: self.viewport_size,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport + scroll state from a previously captured snapshot.
    ///
    /// When `frame.scroll.is_scrolling` is `true`, the internal scrolling
    /// timers are updated as if a scroll event happened at `now_ms`.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.batch_update(|v| {
            v.set_viewport_size(frame.viewport.size);
            v.set_scroll_offset_clamped(frame.scroll.offset);
            if frame.scroll.is_scrolling {
                v.notify_scroll_event(now_ms);
            } else {
                v.set_is_scrolling(false);
            }
        });
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for hosts: a typical frame updates viewport size, scroll
    /// offset, and scrolling state together, and the callback may drive
    /// expensive rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn bounds_unchecked(&self, index: usize) -> ItemBounds {
        let resolver = &self.resolver;
        self.layout
            .borrow_mut()
            .bounds(index, &mut |i| resolver.resolve(i))
    }
}

fn build_layout(resolver: &SizeResolver, viewport_size: f64) -> Layout {
    match resolver.uniform_size(viewport_size) {
        Some(item_size) => Layout::Fixed { item_size },
        None => Layout::Variable {
            cache: OffsetCache::new(),
        },
    }
}

fn spec_equivalent(a: &ItemSizeSpec, b: &ItemSizeSpec) -> bool {
    match (a, b) {
        (ItemSizeSpec::Fixed(x), ItemSizeSpec::Fixed(y)) => x == y,
        (ItemSizeSpec::Percent(x), ItemSizeSpec::Percent(y)) => x == y,
        (ItemSizeSpec::PerItem(x), ItemSizeSpec::PerItem(y)) => Arc::ptr_eq(x, y),
        _ => false,
    }
}
