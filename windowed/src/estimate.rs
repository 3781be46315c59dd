/// Best-known total scrollable extent of an axis.
///
/// Measured items contribute their exact cumulative extent; unmeasured trailing
/// items are extrapolated from the running average of measured sizes, falling
/// back to `estimated_item_size` before anything has been measured (this keeps
/// the scrollable region non-degenerate on first render and avoids a division
/// by zero).
///
/// Scrollbar proportions and scroll-to-index math depend on the estimate not
/// oscillating: it never drops below the measured extent, and once every item
/// has been measured it is the exact cumulative sum.
pub fn estimate_total_extent(
    measured_count: usize,
    measured_total: f64,
    count: usize,
    estimated_item_size: f64,
) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if measured_count >= count {
        return measured_total;
    }
    let average = if measured_count == 0 {
        estimated_item_size
    } else {
        measured_total / measured_count as f64
    };
    measured_total + (count - measured_count) as f64 * average.max(0.0)
}
