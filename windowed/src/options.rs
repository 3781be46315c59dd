use alloc::sync::Arc;

use crate::axis::AxisVirtualizer;
use crate::{Align, AxisDirection, ItemSizeSpec, RtlOffsetBehavior, ScrollBehavior};

/// A callback fired when an axis state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&AxisVirtualizer, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(f64),
    /// A lazily evaluated provider (called by `AxisVirtualizer::new`), e.g. to
    /// restore a persisted scroll position.
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for one [`AxisVirtualizer`].
///
/// Cheap to clone: heavy fields live in `Arc`s so adapters can tweak a field
/// and call `set_options` without reallocating closures.
pub struct AxisOptions {
    pub count: usize,
    pub item_size: ItemSizeSpec,

    /// Assumed size of items that have not been resolved yet; feeds the extent
    /// estimate before any item on a variable axis has been visited.
    pub estimated_item_size: f64,

    /// Extra items rendered outside the strictly visible window, on each side.
    pub overscan: usize,

    pub direction: AxisDirection,

    /// Host-detected RTL offset convention. Only consulted on horizontal axes;
    /// `None` means left-to-right (logical == physical).
    pub rtl_offset_behavior: Option<RtlOffsetBehavior>,

    /// Alignment used when a scroll request leaves it unspecified.
    pub default_align: Align,

    /// Behavior hint used when a scroll request leaves it unspecified.
    pub default_behavior: ScrollBehavior,

    /// Fallback viewport size before the host delivers a real measurement.
    /// `None` means "nothing visible yet" (empty ranges, no error).
    pub initial_viewport_size: Option<f64>,

    pub initial_offset: InitialOffset,

    /// Optional callback fired when the axis state changes.
    pub on_change: Option<OnChangeCallback>,

    /// When true, the host delivers an explicit scroll-end event and the
    /// debounced `update_scrolling` fallback is skipped.
    pub use_scrollend_event: bool,

    /// Debounce window for resetting `is_scrolling` when no scroll-end event
    /// is available.
    pub is_scrolling_reset_delay_ms: u64,
}

impl AxisOptions {
    pub fn new(count: usize, item_size: ItemSizeSpec) -> Self {
        Self {
            count,
            item_size,
            estimated_item_size: 50.0,
            overscan: 2,
            direction: AxisDirection::Vertical,
            rtl_offset_behavior: None,
            default_align: Align::Auto,
            default_behavior: ScrollBehavior::Auto,
            initial_viewport_size: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
            use_scrollend_event: false,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_direction(mut self, direction: AxisDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_rtl_offset_behavior(mut self, behavior: Option<RtlOffsetBehavior>) -> Self {
        self.rtl_offset_behavior = behavior;
        self
    }

    pub fn with_default_align(mut self, align: Align) -> Self {
        self.default_align = align;
        self
    }

    pub fn with_default_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.default_behavior = behavior;
        self
    }

    pub fn with_initial_viewport_size(mut self, size: Option<f64>) -> Self {
        self.initial_viewport_size = size;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: f64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&AxisVirtualizer, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl Clone for AxisOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_size: self.item_size.clone(),
            estimated_item_size: self.estimated_item_size,
            overscan: self.overscan,
            direction: self.direction,
            rtl_offset_behavior: self.rtl_offset_behavior,
            default_align: self.default_align,
            default_behavior: self.default_behavior,
            initial_viewport_size: self.initial_viewport_size,
            initial_offset: self.initial_offset.clone(),
            on_change: self.on_change.clone(),
            use_scrollend_event: self.use_scrollend_event,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
        }
    }
}

impl core::fmt::Debug for AxisOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisOptions")
            .field("count", &self.count)
            .field("item_size", &self.item_size)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("overscan", &self.overscan)
            .field("direction", &self.direction)
            .field("rtl_offset_behavior", &self.rtl_offset_behavior)
            .field("default_align", &self.default_align)
            .field("default_behavior", &self.default_behavior)
            .field("initial_viewport_size", &self.initial_viewport_size)
            .field("initial_offset", &self.initial_offset)
            .field("use_scrollend_event", &self.use_scrollend_event)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
