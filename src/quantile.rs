//! Legend domains from the quantiles of a numeric series.

use tracing::debug;
use crate::error::{BreweryError, Result};

/// Percentile ranks of the domain, in percent.
pub const QUANTILE_RANKS: [f64; 5] = [0., 50., 75., 85., 90.];

/// Five rounded breakpoints, one per rank of [`QUANTILE_RANKS`].
pub type QuantileDomain = [f64; 5];

/// A provider of percentiles.
pub trait Percentile {
    /// Return the `q`-th percentile (`q` ∈ \[0, 100\]) of `sorted`,
    /// a non-empty list of numbers sorted in increasing order.
    fn percentile(&self, sorted: &[f64], q: f64) -> f64;
}

/// Percentiles interpolated linearly between the two closest ranks
/// (numpy's default method).
#[cfg(feature = "stats")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearPercentile;

#[cfg(feature = "stats")]
impl Percentile for LinearPercentile {
    fn percentile(&self, sorted: &[f64], q: f64) -> f64 {
        let h = (sorted.len() - 1) as f64 * q.clamp(0., 100.) / 100.;
        let lo = h.floor() as usize;
        let hi = h.ceil() as usize;
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// The percentile provider compiled in, if any.
pub fn default_provider() -> Option<&'static dyn Percentile> {
    #[cfg(feature = "stats")]
    { Some(&LinearPercentile) }
    #[cfg(not(feature = "stats"))]
    { None }
}

/// Round `x` to one significant digit: 2100 gives 2000, 2790 gives
/// 3000.  Ties go to the even digit; non-positive values give 0.
///
/// # Example
///
/// ```
/// use carto_brewery::round_to_magnitude;
/// assert_eq!(round_to_magnitude(2100.), 2000.);
/// assert_eq!(round_to_magnitude(2790.), 3000.);
/// assert_eq!(round_to_magnitude(0.), 0.);
/// ```
pub fn round_to_magnitude(x: f64) -> f64 {
    if x > 0. {
        let base = 10f64.powi(x.log10().floor() as i32);
        (x / base).round_ties_even() * base
    } else {
        0.
    }
}

/// Domain from 0 to the 90% quantile of `series`, each breakpoint
/// rounded with [`round_to_magnitude`].
///
/// Uses the [`default_provider`]; fails with a dependency error when
/// the crate is built without the `stats` feature.
pub fn quantile_domain(series: &[f64]) -> Result<QuantileDomain> {
    quantile_domain_with(default_provider(), series)
}

/// Same as [`quantile_domain`] with an explicit percentile provider.
/// NaN values are ignored.
pub fn quantile_domain_with(stats: Option<&dyn Percentile>, series: &[f64])
                            -> Result<QuantileDomain> {
    let stats = stats.ok_or(BreweryError::Dependency {
        capability: "a percentile provider" })?;
    let mut sorted: Vec<f64> = series.iter().copied()
        .filter(|x| !x.is_nan()).collect();
    if sorted.is_empty() {
        return Err(BreweryError::EmptySeries)
    }
    sorted.sort_by(f64::total_cmp);
    let domain = QUANTILE_RANKS
        .map(|q| round_to_magnitude(stats.percentile(&sorted, q)));
    debug!(values = sorted.len(), ?domain, "Computed quantile domain");
    Ok(domain)
}
