use windowed::{Align, AxisVirtualizer, ScrollBehavior};

use crate::{Easing, Grid, GridCommand, ScrollRequest, Tween};

/// A framework-neutral controller that wraps a [`Grid`] and drives imperative
/// scrolling, including tween-based smooth scrolls.
///
/// This type holds no UI objects. Hosts drive it by calling:
/// - [`on_viewport`](Self::on_viewport) / [`on_scroll`](Self::on_scroll) when
///   UI events occur
/// - [`submit`](Self::submit) for imperative scroll requests
/// - [`tick`](Self::tick) each frame/timer tick (for tween scrolling and
///   `is_scrolling` debouncing)
///
/// For real scroll containers, use the offsets returned from `tick()` to set
/// the physical scroll position while the grid state stays in sync.
#[derive(Clone, Debug)]
pub struct GridController {
    grid: Grid,
    tween_x: Option<Tween>,
    tween_y: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
}

impl GridController {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            tween_x: None,
            tween_y: None,
            smooth_duration_ms: 300,
            easing: Easing::SmoothStep,
        }
    }

    pub fn with_smooth_duration_ms(mut self, duration_ms: u64) -> Self {
        self.smooth_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn is_animating(&self) -> bool {
        self.tween_x.is_some() || self.tween_y.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween_x = None;
        self.tween_y = None;
    }

    pub fn on_viewport(&mut self, size: crate::ViewportSize) {
        self.grid.set_viewport(size);
    }

    /// Call this when the host reports a user-driven scroll (wheel/drag).
    ///
    /// User input wins: any active tween is cancelled.
    pub fn on_scroll(&mut self, x: f64, y: f64, now_ms: u64) {
        self.cancel_animation();
        self.grid.apply_host_scroll(x, y, now_ms);
    }

    /// Consumes a one-shot scroll request.
    ///
    /// Unset `align`/`behavior` fields resolve against the target axis'
    /// configured defaults. Out-of-range targets are no-ops on that axis.
    pub fn submit(&mut self, request: ScrollRequest, now_ms: u64) {
        match request.command {
            GridCommand::ToRow { row, align } => {
                self.submit_row(row, align, request.behavior, now_ms);
            }
            GridCommand::ToColumn { column, align } => {
                self.submit_column(column, align, request.behavior, now_ms);
            }
            GridCommand::ToCell { row, column, align } => {
                self.submit_column(column, align, request.behavior, now_ms);
                self.submit_row(row, align, request.behavior, now_ms);
            }
            GridCommand::ToOffset { x, y } => {
                if let Some(x) = x {
                    let target = self.grid.columns().clamp_scroll_offset(x);
                    let behavior = resolve_behavior(request.behavior, self.grid.columns());
                    self.drive_x(target, behavior, now_ms);
                }
                if let Some(y) = y {
                    let target = self.grid.rows().clamp_scroll_offset(y);
                    let behavior = resolve_behavior(request.behavior, self.grid.rows());
                    self.drive_y(target, behavior, now_ms);
                }
            }
        }
    }

    /// Advances the controller.
    ///
    /// While a tween is active, commits the sampled offsets and returns the
    /// current `(x, y)`. Otherwise runs the `is_scrolling` debounce and
    /// returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<(f64, f64)> {
        if !self.is_animating() {
            self.grid.update_scrolling(now_ms);
            return None;
        }

        if let Some(tween) = self.tween_x {
            let columns = self.grid.columns_mut();
            columns.apply_scroll_offset_event_clamped(tween.sample(now_ms), now_ms);
            if tween.is_done(now_ms) {
                self.tween_x = None;
                self.grid.columns_mut().set_is_scrolling(false);
            }
        }
        if let Some(tween) = self.tween_y {
            let rows = self.grid.rows_mut();
            rows.apply_scroll_offset_event_clamped(tween.sample(now_ms), now_ms);
            if tween.is_done(now_ms) {
                self.tween_y = None;
                self.grid.rows_mut().set_is_scrolling(false);
            }
        }

        Some((
            self.grid.columns().scroll_offset(),
            self.grid.rows().scroll_offset(),
        ))
    }

    fn submit_row(
        &mut self,
        row: usize,
        align: Option<Align>,
        behavior: Option<ScrollBehavior>,
        now_ms: u64,
    ) {
        let rows = self.grid.rows();
        if row >= rows.count() {
            return;
        }
        let align = align.unwrap_or(rows.options().default_align);
        let target = rows.scroll_to_index_offset(row, align);
        let behavior = resolve_behavior(behavior, rows);
        self.drive_y(target, behavior, now_ms);
    }

    fn submit_column(
        &mut self,
        column: usize,
        align: Option<Align>,
        behavior: Option<ScrollBehavior>,
        now_ms: u64,
    ) {
        let columns = self.grid.columns();
        if column >= columns.count() {
            return;
        }
        let align = align.unwrap_or(columns.options().default_align);
        let target = columns.scroll_to_index_offset(column, align);
        let behavior = resolve_behavior(behavior, columns);
        self.drive_x(target, behavior, now_ms);
    }

    fn drive_x(&mut self, target: f64, behavior: ScrollBehavior, now_ms: u64) {
        match behavior {
            ScrollBehavior::Smooth => {
                let from = self.grid.columns().scroll_offset();
                start_or_retarget(
                    &mut self.tween_x,
                    from,
                    target,
                    now_ms,
                    self.smooth_duration_ms,
                    self.easing,
                );
            }
            ScrollBehavior::Auto | ScrollBehavior::Instant => {
                self.tween_x = None;
                self.grid
                    .columns_mut()
                    .apply_scroll_offset_event_clamped(target, now_ms);
            }
        }
    }

    fn drive_y(&mut self, target: f64, behavior: ScrollBehavior, now_ms: u64) {
        match behavior {
            ScrollBehavior::Smooth => {
                let from = self.grid.rows().scroll_offset();
                start_or_retarget(
                    &mut self.tween_y,
                    from,
                    target,
                    now_ms,
                    self.smooth_duration_ms,
                    self.easing,
                );
            }
            ScrollBehavior::Auto | ScrollBehavior::Instant => {
                self.tween_y = None;
                self.grid
                    .rows_mut()
                    .apply_scroll_offset_event_clamped(target, now_ms);
            }
        }
    }
}

fn resolve_behavior(requested: Option<ScrollBehavior>, axis: &AxisVirtualizer) -> ScrollBehavior {
    requested.unwrap_or(axis.options().default_behavior)
}

fn start_or_retarget(
    slot: &mut Option<Tween>,
    from: f64,
    to: f64,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
) {
    match slot {
        Some(tween) => tween.retarget(now_ms, to, duration_ms),
        None => *slot = Some(Tween::new(from, to, now_ms, duration_ms, easing)),
    }
}
