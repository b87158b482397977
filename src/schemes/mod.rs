//! Catalog of sequential Brewer color schemes.
//!
//! See <https://colorbrewer2.org/> for live examples.

use std::collections::HashMap;
use lazy_static::lazy_static;
use tracing::debug;
use crate::codec::{self, HexColor};
use crate::config::Brewer;
use crate::error::Result;
use crate::gradient::LinearGradient;

pub(crate) mod ty;
pub use ty::{ColorScheme, Scheme};

/// Number of colors of every base palette.
pub const BASE_LEN: usize = 7;

/// Largest palette size that can be requested.
pub const MAX_COLORS: usize = 253;

/// Sizes up to this one return the base palette unchanged; larger
/// sizes are interpolated.
pub const INTERPOLATION_THRESHOLD: usize = 6;

// Indexed by `Scheme as usize`.
static BASE_PALETTES: [[&str; BASE_LEN]; 12] = [
    // BuGn (the repeated #CCECE6 is part of the published table)
    ["#EDF8FB", "#CCECE6", "#CCECE6", "#66C2A4", "#41AE76", "#238B45",
     "#005824"],
    // BuPu
    ["#EDF8FB", "#BFD3E6", "#9EBCDA", "#8C96C6", "#8C6BB1", "#88419D",
     "#6E016B"],
    // GnBu
    ["#F0F9E8", "#CCEBC5", "#A8DDB5", "#7BCCC4", "#4EB3D3", "#2B8CBE",
     "#08589E"],
    // OrRd
    ["#FEF0D9", "#FDD49E", "#FDBB84", "#FC8D59", "#EF6548", "#D7301F",
     "#990000"],
    // PuBu
    ["#F1EEF6", "#D0D1E6", "#A6BDDB", "#74A9CF", "#3690C0", "#0570B0",
     "#034E7B"],
    // PuBuGn
    ["#F6EFF7", "#D0D1E6", "#A6BDDB", "#67A9CF", "#3690C0", "#02818A",
     "#016450"],
    // PuRd
    ["#F1EEF6", "#D4B9DA", "#C994C7", "#DF65B0", "#E7298A", "#CE1256",
     "#91003F"],
    // RdPu
    ["#FEEBE2", "#FCC5C0", "#FA9FB5", "#F768A1", "#DD3497", "#AE017E",
     "#7A0177"],
    // YlGn
    ["#FFFFCC", "#D9F0A3", "#ADDD8E", "#78C679", "#41AB5D", "#238443",
     "#005A32"],
    // YlGnBu
    ["#FFFFCC", "#C7E9B4", "#7FCDBB", "#41B6C4", "#1D91C0", "#225EA8",
     "#0C2C84"],
    // YlOrBr
    ["#FFFFD4", "#FEE391", "#FEC44F", "#FE9929", "#EC7014", "#CC4C02",
     "#8C2D04"],
    // YlOrRd
    ["#FFFFB2", "#FED976", "#FEB24C", "#FD8D3C", "#FC4E2A", "#E31A1C",
     "#B10026"],
];

lazy_static! {
    static ref CATALOG: HashMap<&'static str, Scheme> =
        Scheme::ALL.iter().map(|&s| (s.name(), s)).collect();
}

/// Find a scheme by its exact name.
pub fn lookup(name: &str) -> Option<Scheme> { CATALOG.get(name).copied() }

impl Scheme {
    /// The base palette as [`HexColor`]s.
    pub fn base_colors(self) -> Result<Vec<HexColor>> {
        self.base().iter().map(|h| h.parse()).collect()
    }

    /// Interpolate `n` colors along the base palette.
    pub fn interpolate(self, n: usize, gradient: &LinearGradient)
                       -> Result<ColorScheme> {
        let rgb = self.base().iter().map(|h| codec::decode(h))
            .collect::<Result<Vec<_>>>()?;
        let colors: Vec<HexColor> = gradient.generate(&rgb, n)?.iter()
            .map(codec::encode).collect();
        debug!(scheme = self.name(), n, "Interpolated color scheme");
        Ok(ColorScheme { scheme: self, requested: n, colors })
    }
}

/// Return the scheme `name` with `n` colors.
///
/// - `n` above [`MAX_COLORS`] is an error;
/// - an unknown `name` gives `Ok(None)`;
/// - `n` up to [`INTERPOLATION_THRESHOLD`] returns the whole base
///   palette (7 colors, whatever `n` is);
/// - larger `n` interpolates the base palette linearly.
///
/// Uses the default [`Brewer`] settings.
///
/// # Example
///
/// ```
/// use carto_brewery::color_brewer;
/// let s = color_brewer("YlGnBu", 9).unwrap().unwrap();
/// assert_eq!(s.len(), 9);
/// assert_eq!(s.colors()[0].as_str(), "#FFFFCC");
/// assert!(color_brewer("NotAScheme", 6).unwrap().is_none());
/// assert!(color_brewer("YlGnBu", 254).is_err());
/// ```
pub fn color_brewer(name: &str, n: usize) -> Result<Option<ColorScheme>> {
    Brewer::default().scheme(name, n)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(CATALOG.len(), 12);
        for s in Scheme::ALL {
            assert_eq!(lookup(s.name()), Some(s));
            assert_eq!(s.name().parse::<Scheme>().unwrap(), s);
            assert_eq!(s.base_colors().unwrap().len(), BASE_LEN);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("bugn"), None);
        assert!("ylorrd".parse::<Scheme>().is_err());
    }

    #[test]
    fn base_palettes_are_canonical() {
        // Stored literals must already be in `HexColor` form.
        for s in Scheme::ALL {
            for (h, c) in s.base().iter().zip(s.base_colors().unwrap()) {
                assert_eq!(c.as_str(), *h);
            }
        }
    }

    #[test]
    fn interpolate_seven_hits_the_base() {
        let g = LinearGradient::default();
        for s in Scheme::ALL {
            let c = s.interpolate(BASE_LEN, &g).unwrap();
            assert_eq!(c.colors(), &s.base_colors().unwrap()[..]);
        }
    }

    #[test]
    fn interpolate_ends() {
        let c = Scheme::OrRd.interpolate(100, &LinearGradient::default())
            .unwrap();
        assert_eq!(c.len(), 100);
        assert_eq!(c.requested(), 100);
        assert_eq!(c.colors()[0], "#FEF0D9");
        assert_eq!(c.colors()[99], "#990000");
    }
}
