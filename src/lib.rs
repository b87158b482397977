//! Color schemes, gradients and legend helpers for map
//! visualizations.
//!
//! - [`encode`] / [`decode`]: RGB colors to and from `#RRGGBB`
//!   ([`HexColor`]).
//! - [`LinearGradient`]: colors interpolated along control points.
//! - [`color_brewer`]: the sequential [Brewer
//!   schemes](https://colorbrewer2.org/) of the [`Scheme`] catalog,
//!   interpolated to any size up to [`MAX_COLORS`].
//! - [`scale_legend`]: thin out colorbar labels.
//! - [`quantile_domain`]: legend breakpoints from a series.
//! - [`transform_data`]: tabular data to JSON.
//!
//! Limits are gathered in [`BrewerConfig`] and applied by a
//! [`Brewer`]; the free functions use the defaults.

use rgb::{RGB, RGB8};

mod codec;
mod config;
mod error;
mod gradient;
mod legend;
mod quantile;
mod schemes;
mod transform;

pub use codec::{decode, encode, HexColor};
pub use config::{Brewer, BrewerConfig};
pub use error::{BreweryError, Result};
pub use gradient::{linear_gradient, LinearGradient, OVERSAMPLING};
pub use legend::{scale_legend, tick_labels, DEFAULT_MAX_LABELS};
pub use quantile::{default_provider, quantile_domain, quantile_domain_with,
                   round_to_magnitude, Percentile, QuantileDomain,
                   QUANTILE_RANKS};
#[cfg(feature = "stats")]
pub use quantile::LinearPercentile;
pub use schemes::{color_brewer, lookup, ColorScheme, Scheme, BASE_LEN,
                  INTERPOLATION_THRESHOLD, MAX_COLORS};
pub use transform::{transform_data, Cell, Frame, Series, Tabular};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\], possibly fractional).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 255\]).
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// The color as `#RRGGBB`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use carto_brewery::RGBColor;
    /// assert_eq!(RGB8::new(0, 88, 36).to_hex().as_str(), "#005824");
    /// ```
    #[inline]
    fn to_hex(&self) -> HexColor { encode(self) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB { r, g, b } = Self::to_rgb(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: c.r as u8, g: c.g as u8, b: c.b as u8 }
    }
}

impl RGBColor for [u8; 3] {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self[0] as f64, g: self[1] as f64, b: self[2] as f64 }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { [c.r as u8, c.g as u8, c.b as u8] }
}
