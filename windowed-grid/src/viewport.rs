/// Host-reported viewport dimensions.
///
/// Real hosts often cannot measure their container before the first layout
/// pass, so each dimension is optional. An unknown or non-positive dimension
/// means nothing can be visible along that axis yet; that is a normal state,
/// not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ViewportSize {
    /// Both dimensions unknown (pre-layout).
    pub const UNKNOWN: Self = Self {
        width: None,
        height: None,
    };

    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// A fully measured viewport.
    pub fn known(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Fills unknown dimensions from `fallback` (e.g. a configured initial
    /// size used until the host delivers a real measurement).
    pub fn or_fallback(self, fallback: ViewportSize) -> Self {
        Self {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
        }
    }

    pub(crate) fn width_or_zero(self) -> f64 {
        self.width.unwrap_or(0.0).max(0.0)
    }

    pub(crate) fn height_or_zero(self) -> f64 {
        self.height.unwrap_or(0.0).max(0.0)
    }
}
