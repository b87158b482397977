//! Settings shared by the scheme catalog, the gradient generator and
//! the legend scaler.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::error::{BreweryError, Result};
use crate::gradient::{LinearGradient, OVERSAMPLING};
use crate::legend::{self, DEFAULT_MAX_LABELS};
use crate::schemes::{self, ColorScheme, INTERPOLATION_THRESHOLD, MAX_COLORS};

/// Tunable limits.  Missing fields take their default value.
///
/// # Example
///
/// ```
/// use carto_brewery::BrewerConfig;
/// let config = BrewerConfig::from_json(r#"{"max_labels": 5}"#).unwrap();
/// assert_eq!(config.max_labels, 5);
/// assert_eq!(config.max_colors, 253);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewerConfig {
    /// Largest palette size that may be requested.
    pub max_colors: usize,
    /// Palette sizes up to this value return the base palette as is.
    pub interpolation_threshold: usize,
    /// Samples per gradient segment.
    pub oversampling: usize,
    /// Maximum number of labels on a legend colorbar.
    pub max_labels: usize,
}

impl Default for BrewerConfig {
    fn default() -> Self {
        Self {
            max_colors: MAX_COLORS,
            interpolation_threshold: INTERPOLATION_THRESHOLD,
            oversampling: OVERSAMPLING,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

impl BrewerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Color scheme and legend helpers bound to a [`BrewerConfig`].
#[derive(Clone, Debug, Default)]
pub struct Brewer {
    config: BrewerConfig,
}

impl Brewer {
    pub fn new(config: BrewerConfig) -> Self { Self { config } }

    pub fn config(&self) -> &BrewerConfig { &self.config }

    /// The gradient generator using the configured oversampling.
    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::new().oversampling(self.config.oversampling)
    }

    /// Return the scheme `name` with `n` colors.
    /// See [`color_brewer`][crate::color_brewer] for the rules.
    pub fn scheme(&self, name: &str, n: usize) -> Result<Option<ColorScheme>> {
        if n > self.config.max_colors {
            return Err(BreweryError::Range { what: "palette size",
                                             requested: n,
                                             max: self.config.max_colors })
        }
        let Some(scheme) = schemes::lookup(name) else {
            debug!(name, "Unknown color scheme");
            return Ok(None)
        };
        if n > self.config.interpolation_threshold {
            return scheme.interpolate(n, &self.gradient()).map(Some)
        }
        let colors = scheme.base_colors()?;
        if colors.len() != n {
            warn!(scheme = name, requested = n, returned = colors.len(),
                  "Returning the base palette, its size differs from \
                   the requested one");
        }
        Ok(Some(ColorScheme { scheme, requested: n, colors }))
    }

    /// Downsample legend values to the configured number of labels.
    /// See [`scale_legend`][crate::scale_legend].
    pub fn scale_legend<T: Clone>(&self, values: &[T]) -> Vec<Option<T>> {
        legend::scale_legend(values, self.config.max_labels)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = BrewerConfig::default();
        assert_eq!((c.max_colors, c.interpolation_threshold, c.oversampling,
                    c.max_labels), (253, 6, 765, 10));
        assert_eq!(BrewerConfig::from_json("{}").unwrap(), c);
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(BrewerConfig::from_json("{\"max_colors\": -1}"),
                         Err(BreweryError::Json(_))));
    }

    #[test]
    fn custom_limits() {
        let brewer = Brewer::new(BrewerConfig { max_colors: 20,
                                                ..Default::default() });
        assert!(matches!(brewer.scheme("PuRd", 21),
                         Err(BreweryError::Range { requested: 21, max: 20, .. })));
        assert_eq!(brewer.scheme("PuRd", 20).unwrap().unwrap().len(), 20);
    }

    #[test]
    fn range_checked_before_name() {
        assert!(Brewer::default().scheme("NotAScheme", 254).is_err());
        assert!(Brewer::default().scheme("NotAScheme", 7).unwrap().is_none());
    }

    #[test]
    fn custom_threshold_and_labels() {
        let brewer = Brewer::new(BrewerConfig { interpolation_threshold: 2,
                                                max_labels: 2,
                                                ..Default::default() });
        let s = brewer.scheme("GnBu", 3).unwrap().unwrap();
        assert_eq!(s.colors(), ["#F0F9E8", "#7BCCC4", "#08589E"]);
        assert_eq!(brewer.scale_legend(&[1, 2, 3, 4]),
                   vec![None, None, Some(3), None]);
    }
}
