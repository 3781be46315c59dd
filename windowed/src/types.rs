/// Alignment policy used when bringing an item into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Scroll the minimum distance needed; no change if the item is already fully visible.
    #[default]
    Auto,
    /// Align the item's leading edge with the viewport's leading edge.
    Start,
    /// Center the item in the viewport.
    Center,
    /// Align the item's trailing edge with the viewport's trailing edge.
    End,
    /// Like `Auto` for nearby targets (within one viewport), `Center` for far jumps.
    Smart,
}

/// How a programmatic scroll should be performed by the host.
///
/// The engine commits offsets synchronously and owns no animation state; `Smooth`
/// is a hint that adapters (see the `windowed-grid` crate) may honor with tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The scrolling dimension an axis engine virtualizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Pixel bounds of a single item along the virtualized axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds {
    /// Cumulative distance from the start of the axis to the item's leading edge.
    pub offset: f64,
    pub size: f64,
}

impl ItemBounds {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}
