/// A lightweight, serializable snapshot of the viewport along one axis.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub size: f64,
}

/// A lightweight, serializable snapshot of the scroll state along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Logical offset (RTL inversion already undone).
    pub offset: f64,
    pub is_scrolling: bool,
}

/// A combined snapshot of viewport + scroll state.
///
/// Useful for restoring UI state across frames or sessions without coupling
/// the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub scroll: ScrollState,
}
