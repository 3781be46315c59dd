//! Grid composition and host adapter utilities for the `windowed` crate.
//!
//! The `windowed` crate virtualizes exactly one scrolling axis and stays
//! UI-agnostic. This crate provides the pieces hosts commonly need on top:
//!
//! - [`Grid`]: a two-dimensional surface built from two independent axis
//!   engines (rows and columns), with cell-level queries
//! - [`ViewportSize`]: host viewport measurements with unknown dimensions
//! - [`ScrollRequest`]/[`GridCommand`]: one-shot imperative scroll requests
//! - [`GridController`]: tween-based smooth scrolling driven by host ticks
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod command;
mod controller;
mod grid;
mod tween;
mod viewport;


pub use command::{GridCommand, ScrollRequest};
pub use controller::GridController;
pub use grid::{CellBounds, Grid};
pub use tween::{Easing, Tween};
pub use viewport::ViewportSize;
