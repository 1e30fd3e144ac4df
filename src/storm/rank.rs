use super::Storm;

/// Sorts by total, heaviest first, and keeps the first `top`.
///
/// The sort is stable so equal totals keep the order they were found in.
pub fn rank(mut storms: Vec<Storm>, top: usize) -> Vec<Storm> {
    storms.sort_by(|a, b| b.total_mm.total_cmp(&a.total_mm));
    storms.truncate(top);

    storms
}
