use alloc::sync::Arc;

/// How items along an axis are sized.
///
/// The three accepted specifications normalize into a single "size at index"
/// contract (see [`SizeResolver`]):
///
/// - [`Fixed`](Self::Fixed): every item has the same constant pixel size.
/// - [`PerItem`](Self::PerItem): a function from index to pixel size. Shared
///   context (the equivalent of "extra props" in UI frameworks) is captured by
///   the closure. The result is authoritative for that index until
///   [`crate::AxisVirtualizer::reset_after_index`] invalidates it.
/// - [`Percent`](Self::Percent): a fixed proportion of the live viewport size,
///   re-resolved on every viewport resize (the proportion is cached, the pixel
///   value never is).
///
/// # Invalid sizes
///
/// Every specification must resolve to a finite, non-negative pixel size for
/// any index in `[0, count)`. A constant or percentage that violates this is
/// rejected at construction; a per-item function that returns a negative or
/// non-finite value panics at the offending call. Continuing with a corrupt
/// offset table would produce wrong scrolling far from the root cause, so this
/// is surfaced immediately rather than clamped.
pub enum ItemSizeSpec {
    Fixed(f64),
    PerItem(Arc<dyn Fn(usize) -> f64 + Send + Sync>),
    /// Fraction of the viewport size: `0.25` renders as 25% of the container.
    Percent(f64),
}

impl ItemSizeSpec {
    /// Constant size in pixels. Panics if `size` is negative or non-finite.
    pub fn fixed(size: f64) -> Self {
        assert!(
            size.is_finite() && size >= 0.0,
            "fixed item size must be finite and non-negative (got {size})"
        );
        Self::Fixed(size)
    }

    pub fn per_item(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::PerItem(Arc::new(f))
    }

    /// Proportion of the viewport, as a fraction (`0.25` == 25%).
    ///
    /// Panics if `fraction` is negative or non-finite.
    pub fn percent(fraction: f64) -> Self {
        assert!(
            fraction.is_finite() && fraction >= 0.0,
            "percentage item size must be finite and non-negative (got {fraction})"
        );
        Self::Percent(fraction)
    }

    /// Parses a `"25%"`-style string into a [`Percent`](Self::Percent) spec.
    ///
    /// Returns `None` when the string is not a valid non-negative percentage.
    pub fn parse_percent(s: &str) -> Option<Self> {
        let number = s.trim().strip_suffix('%')?;
        let value: f64 = number.trim().parse().ok()?;
        (value.is_finite() && value >= 0.0).then(|| Self::Percent(value / 100.0))
    }
}

impl Clone for ItemSizeSpec {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(size) => Self::Fixed(*size),
            Self::PerItem(f) => Self::PerItem(Arc::clone(f)),
            Self::Percent(fraction) => Self::Percent(*fraction),
        }
    }
}

impl core::fmt::Debug for ItemSizeSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
            Self::Percent(fraction) => f.debug_tuple("Percent").field(fraction).finish(),
        }
    }
}

/// Normalizes an [`ItemSizeSpec`] into the uniform size-at-index contract.
///
/// Whether the axis is fixed (no offset cache) or variable (lazy offset cache)
/// is decided here, once, at construction.
#[derive(Clone, Debug)]
pub(crate) struct SizeResolver {
    spec: ItemSizeSpec,
}

impl SizeResolver {
    pub(crate) fn new(spec: ItemSizeSpec) -> Self {
        Self { spec }
    }

    pub(crate) fn spec(&self) -> &ItemSizeSpec {
        &self.spec
    }

    /// Variable axes need per-index resolution and the offset cache.
    pub(crate) fn is_variable(&self) -> bool {
        matches!(self.spec, ItemSizeSpec::PerItem(_))
    }

    /// The uniform pixel size for fixed axes, given the live viewport size.
    ///
    /// Returns `None` for per-item specs.
    pub(crate) fn uniform_size(&self, viewport_size: f64) -> Option<f64> {
        match &self.spec {
            ItemSizeSpec::Fixed(size) => Some(*size),
            ItemSizeSpec::Percent(fraction) => Some(fraction * viewport_size.max(0.0)),
            ItemSizeSpec::PerItem(_) => None,
        }
    }

    /// Resolves the authoritative size of `index` on a variable axis.
    ///
    /// Panics if the per-item function returns an invalid size; see
    /// [`ItemSizeSpec`].
    pub(crate) fn resolve(&self, index: usize) -> f64 {
        match &self.spec {
            ItemSizeSpec::Fixed(size) => *size,
            ItemSizeSpec::Percent(_) => {
                debug_assert!(false, "percentage axes resolve through uniform_size");
                0.0
            }
            ItemSizeSpec::PerItem(f) => {
                let size = f(index);
                assert!(
                    size.is_finite() && size >= 0.0,
                    "item size function returned an invalid size for index {index}: {size}"
                );
                size
            }
        }
    }
}
