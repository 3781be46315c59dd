use windowed::{Align, ScrollBehavior};

/// One imperative scroll target on the grid.
///
/// `align: None` defers to the target axis' configured default alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridCommand {
    ToRow { row: usize, align: Option<Align> },
    ToColumn { column: usize, align: Option<Align> },
    ToCell {
        row: usize,
        column: usize,
        align: Option<Align>,
    },
    /// Absolute offsets in pixels; `None` leaves that axis where it is.
    ToOffset { x: Option<f64>, y: Option<f64> },
}

/// A one-shot scroll request, consumed by
/// [`GridController::submit`](crate::GridController::submit).
///
/// `behavior: None` defers to the target axis' configured default behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub command: GridCommand,
    pub behavior: Option<ScrollBehavior>,
}

impl ScrollRequest {
    pub fn to_row(row: usize) -> Self {
        Self {
            command: GridCommand::ToRow { row, align: None },
            behavior: None,
        }
    }

    pub fn to_column(column: usize) -> Self {
        Self {
            command: GridCommand::ToColumn {
                column,
                align: None,
            },
            behavior: None,
        }
    }

    pub fn to_cell(row: usize, column: usize) -> Self {
        Self {
            command: GridCommand::ToCell {
                row,
                column,
                align: None,
            },
            behavior: None,
        }
    }

    pub fn to_offset(x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            command: GridCommand::ToOffset { x, y },
            behavior: None,
        }
    }

    /// Overrides the axis' default alignment. Ignored by `ToOffset`.
    pub fn with_align(mut self, align: Align) -> Self {
        match &mut self.command {
            GridCommand::ToRow { align: slot, .. }
            | GridCommand::ToColumn { align: slot, .. }
            | GridCommand::ToCell { align: slot, .. } => *slot = Some(align),
            GridCommand::ToOffset { .. } => {}
        }
        self
    }

    /// Overrides the axis' default scroll behavior.
    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }
}
