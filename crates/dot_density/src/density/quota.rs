//! Converting a population into a number of dots.

/// Number of dots for `population` at `dots_per_unit` people per dot.
///
/// Rounds down. Absent populations and non-positive or non-finite `dots_per_unit`
/// give zero dots.
///
/// Saturates at `usize::MAX`; use [`checked_dot_quota`] to detect quotas that do
/// not fit.
pub fn dot_quota(population: Option<u64>, dots_per_unit: f64) -> usize {
    checked_dot_quota(population, dots_per_unit).unwrap_or(usize::MAX)
}

/// Like [`dot_quota`], but `None` when the quotient is too large for a `usize`.
pub fn checked_dot_quota(population: Option<u64>, dots_per_unit: f64) -> Option<usize> {
    match population {
        Some(people) if dots_per_unit.is_finite() && dots_per_unit > 0.0 => {
            let quota = (people as f64 / dots_per_unit).floor();
            // `usize::MAX as f64` may round up, so `<` keeps the cast in range.
            (quota < usize::MAX as f64).then_some(quota as usize)
        }
        _ => Some(0),
    }
}
