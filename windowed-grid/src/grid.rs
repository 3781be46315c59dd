use windowed::{Align, AxisDirection, AxisOptions, AxisVirtualizer, ItemBounds, VisibleRange};

use crate::ViewportSize;

/// Pixel bounds of one grid cell, composed from the two axis lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellBounds {
    fn from_axes(column: ItemBounds, row: ItemBounds) -> Self {
        Self {
            x: column.offset,
            y: row.offset,
            width: column.size,
            height: row.size,
        }
    }
}

/// A two-dimensional grid: two fully independent one-axis engines.
///
/// Rows own the vertical dimension and columns the horizontal one; neither
/// axis ever reads the other's state. Every 1D capability (per-axis sizing,
/// extent estimation, overscan, RTL correction on the column axis) composes
/// without any grid-specific math beyond pairing the two results.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: AxisVirtualizer,
    columns: AxisVirtualizer,
}

impl Grid {
    /// Builds a grid from per-axis options.
    ///
    /// Axis directions are forced here (rows vertical, columns horizontal) so
    /// RTL correction can never be misapplied to the row axis.
    pub fn new(mut row_options: AxisOptions, mut column_options: AxisOptions) -> Self {
        row_options.direction = AxisDirection::Vertical;
        column_options.direction = AxisDirection::Horizontal;
        Self {
            rows: AxisVirtualizer::new(row_options),
            columns: AxisVirtualizer::new(column_options),
        }
    }

    pub fn rows(&self) -> &AxisVirtualizer {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut AxisVirtualizer {
        &mut self.rows
    }

    pub fn columns(&self) -> &AxisVirtualizer {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut AxisVirtualizer {
        &mut self.columns
    }

    /// Applies a host viewport measurement to both axes.
    ///
    /// Unknown dimensions resolve to zero, which keeps the affected axis empty
    /// until a real measurement arrives.
    pub fn set_viewport(&mut self, size: ViewportSize) {
        self.columns.set_viewport_size(size.width_or_zero());
        self.rows.set_viewport_size(size.height_or_zero());
    }

    /// Strictly visible `(rows, columns)` ranges; `None` when either axis has
    /// nothing visible.
    pub fn visible_cells(&self) -> Option<(VisibleRange, VisibleRange)> {
        Some((self.rows.visible_range()?, self.columns.visible_range()?))
    }

    /// The `(rows, columns)` ranges to actually render, overscan included.
    pub fn render_cells(&self) -> Option<(VisibleRange, VisibleRange)> {
        Some((self.rows.render_range()?, self.columns.render_range()?))
    }

    /// Iterates rendered cells in row-major order with their pixel bounds.
    pub fn for_each_rendered_cell(&self, mut f: impl FnMut(usize, usize, CellBounds)) {
        let Some((row_range, column_range)) = self.render_cells() else {
            return;
        };
        for row in row_range.indices() {
            let Some(row_bounds) = self.rows.item_bounds(row) else {
                return;
            };
            for column in column_range.indices() {
                let Some(column_bounds) = self.columns.item_bounds(column) else {
                    return;
                };
                f(row, column, CellBounds::from_axes(column_bounds, row_bounds));
            }
        }
    }

    /// Pixel bounds of one cell. Out-of-range indices clamp per axis; `None`
    /// only when the grid has no rows or no columns at all.
    pub fn cell_bounds(&self, row: usize, column: usize) -> Option<CellBounds> {
        let row_bounds = self.rows.item_bounds(row)?;
        let column_bounds = self.columns.item_bounds(column)?;
        Some(CellBounds::from_axes(column_bounds, row_bounds))
    }

    /// Best-known `(width, height)` of the full scrollable content.
    pub fn total_extent(&self) -> (f64, f64) {
        (
            self.columns.estimated_extent(),
            self.rows.estimated_extent(),
        )
    }

    /// Scrolls the row axis to `row`; the column axis is untouched.
    pub fn scroll_to_row(&mut self, row: usize, align: Align) -> f64 {
        self.rows.scroll_to_index(row, align)
    }

    /// Scrolls the column axis to `column`; the row axis is untouched.
    pub fn scroll_to_column(&mut self, column: usize, align: Align) -> f64 {
        self.columns.scroll_to_index(column, align)
    }

    /// Scrolls both axes so the cell satisfies `align` on each.
    ///
    /// Returns the committed `(x, y)` offsets.
    pub fn scroll_to_cell(&mut self, row: usize, column: usize, align: Align) -> (f64, f64) {
        let x = self.columns.scroll_to_index(column, align);
        let y = self.rows.scroll_to_index(row, align);
        (x, y)
    }

    /// Scrolls to absolute offsets (clamped per axis); `None` leaves that axis
    /// where it is.
    pub fn scroll_to_offset(&mut self, x: Option<f64>, y: Option<f64>) -> (f64, f64) {
        if let Some(x) = x {
            self.columns.scroll_to_offset(x);
        }
        if let Some(y) = y {
            self.rows.scroll_to_offset(y);
        }
        (self.columns.scroll_offset(), self.rows.scroll_offset())
    }

    /// Applies raw host scroll offsets (physical coordinates, RTL correction
    /// included on the column axis) and marks both axes as scrolling.
    pub fn apply_host_scroll(&mut self, x: f64, y: f64, now_ms: u64) {
        self.columns.apply_host_scroll_offset(x, now_ms);
        self.rows.apply_host_scroll_offset(y, now_ms);
    }

    /// Runs the per-axis `is_scrolling` debounce; call once per frame tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        self.columns.update_scrolling(now_ms);
        self.rows.update_scrolling(now_ms);
    }
}
