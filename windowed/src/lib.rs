//! A headless viewport virtualization engine.
//!
//! This crate renders extremely large collections inside a fixed viewport by
//! only materializing the items currently visible (plus a small overscan
//! margin). It focuses on the core math: a lazily built offset table over item
//! sizes, offset → index lookup, overscanned visible ranges, extent estimation
//! for partially measured collections, and scroll-to-index alignment with RTL
//! offset correction.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (width/height), or a fallback before first measurement
//! - scroll offsets from user input
//! - size-change notifications for dynamically measured items
//!   (via [`AxisVirtualizer::reset_after_index`])
//!
//! One [`AxisVirtualizer`] virtualizes one scrolling dimension; a grid is two
//! independent instances. For the 2D composition and host-facing helpers
//! (imperative commands, smooth scrolling), see the `windowed-grid` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod cache;
mod estimate;
mod options;
mod range;
mod scroll;
mod size;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use axis::AxisVirtualizer;
pub use estimate::estimate_total_extent;
pub use options::{AxisOptions, InitialOffset, OnChangeCallback};
pub use range::VisibleRange;
pub use scroll::RtlOffsetBehavior;
pub use size::ItemSizeSpec;
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{Align, AxisDirection, ItemBounds, ScrollBehavior, ScrollDirection};
