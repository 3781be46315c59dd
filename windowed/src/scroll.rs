use crate::{Align, ItemBounds};

/// How the host environment reports horizontal scroll positions under
/// right-to-left layout.
///
/// Three conventions exist in the wild. The host detects which one is in
/// effect (once per environment) and injects it via
/// [`crate::AxisOptions::rtl_offset_behavior`]; the engine then converts
/// between its logical offsets (0 at the logical start, growing toward the
/// logical end) and the host's physical offsets. Only the horizontal axis is
/// ever affected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RtlOffsetBehavior {
    /// Physical offsets run from `-(extent - viewport)` at the logical end to
    /// `0` at the logical start.
    Negative,
    /// Physical offsets run from `extent - viewport` at the logical start
    /// down to `0` at the logical end.
    PositiveDescending,
    /// Physical offsets match logical offsets.
    PositiveAscending,
}

impl RtlOffsetBehavior {
    /// Converts a logical offset into the host's physical offset.
    ///
    /// `max_offset` is `extent - viewport`, clamped to zero. The conversion is
    /// an involution: applying it twice returns the original value.
    pub fn to_physical(self, logical: f64, max_offset: f64) -> f64 {
        match self {
            Self::Negative => -logical,
            Self::PositiveDescending => max_offset - logical,
            Self::PositiveAscending => logical,
        }
    }

    /// Converts a physical offset reported by the host back into logical
    /// coordinates.
    pub fn to_logical(self, physical: f64, max_offset: f64) -> f64 {
        // Each convention is its own inverse.
        self.to_physical(physical, max_offset)
    }
}

/// Resolves an alignment policy into a target scroll offset.
///
/// `max_offset` is the furthest reachable offset (`extent - viewport`, never
/// negative); the result is always inside `[0, max_offset]`.
pub(crate) fn offset_for_align(
    align: Align,
    bounds: ItemBounds,
    viewport_size: f64,
    current_offset: f64,
    max_offset: f64,
) -> f64 {
    // Offset that puts the item's leading edge at the viewport's leading edge,
    // and the one that puts its trailing edge at the viewport's trailing edge.
    let start_offset = bounds.offset.clamp(0.0, max_offset);
    let end_offset = (bounds.end() - viewport_size).clamp(0.0, max_offset);

    match align {
        Align::Start => start_offset,
        Align::End => end_offset,
        Align::Center => {
            (bounds.offset + bounds.size / 2.0 - viewport_size / 2.0).clamp(0.0, max_offset)
        }
        Align::Auto => auto_offset(current_offset, start_offset, end_offset),
        Align::Smart => {
            // Near targets (within one viewport of being visible) scroll the
            // minimum distance; far targets center to give context after the
            // jump.
            let near = current_offset >= end_offset - viewport_size
                && current_offset <= start_offset + viewport_size;
            if near {
                auto_offset(current_offset, start_offset, end_offset)
            } else {
                offset_for_align(Align::Center, bounds, viewport_size, current_offset, max_offset)
            }
        }
    }
}

fn auto_offset(current_offset: f64, start_offset: f64, end_offset: f64) -> f64 {
    if end_offset > start_offset {
        // Item is larger than the viewport; showing its leading edge wins.
        return start_offset;
    }
    if current_offset >= end_offset && current_offset <= start_offset {
        // Already fully visible.
        current_offset
    } else if current_offset < end_offset {
        end_offset
    } else {
        start_offset
    }
}
