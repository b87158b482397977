//! Downsampling of legend ticks so labels do not collide on a
//! colorbar.

use tracing::debug;

/// A colorbar holds about 10 labels at most.
pub const DEFAULT_MAX_LABELS: usize = 10;

/// Keep at most about `max_labels` of `values`, blanking the others.
///
/// When there are fewer than `max_labels` values, all are kept.
/// Otherwise the value at index `i` is kept iff `i ≠ 0` and `i` is a
/// multiple of `values.len() / max_labels` (a real division).  The
/// first tick is always blank, even though it is the lower bound of
/// the domain; renderers rely on that.  The result has the same
/// length as `values`, `None` being a blank tick.  A `max_labels` of
/// 0 blanks every tick.
///
/// # Example
///
/// ```
/// use carto_brewery::scale_legend;
/// assert_eq!(scale_legend(&[1, 2, 3], 10), vec![Some(1), Some(2), Some(3)]);
/// let ticks = scale_legend(&[0, 10, 20, 30, 40], 2);
/// assert_eq!(ticks, vec![None, None, None, None, None]);
/// let ticks = scale_legend(&[0, 10, 20, 30], 2);
/// assert_eq!(ticks, vec![None, None, Some(20), None]);
/// ```
pub fn scale_legend<T: Clone>(values: &[T], max_labels: usize)
                              -> Vec<Option<T>> {
    if values.len() < max_labels {
        return values.iter().cloned().map(Some).collect()
    }
    let divisor = values.len() as f64 / max_labels as f64;
    let ticks: Vec<_> = values.iter().enumerate().map(|(i, v)| {
        if i != 0 && (i as f64) % divisor == 0. { Some(v.clone()) }
        else { None }
    }).collect();
    debug!(values = values.len(), max_labels,
           kept = ticks.iter().filter(|t| t.is_some()).count(),
           "Scaled legend ticks");
    ticks
}

/// Render ticks as labels, blanks becoming empty strings.
pub fn tick_labels<T: ToString>(ticks: &[Option<T>]) -> Vec<String> {
    ticks.iter()
        .map(|t| t.as_ref().map(T::to_string).unwrap_or_default())
        .collect()
}
