use std::fmt;
use std::str::FromStr;
use rgb::RGB8;
use serde::{Serialize, Serializer};
use crate::codec::HexColor;
use crate::error::BreweryError;

/// Sequential Brewer schemes known to the catalog.
///
/// They progress from light colors for low values to dark colors for
/// high values and are colorblind-conscious.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// Light blue to dark green.
    BuGn,
    /// Light blue to dark purple.
    BuPu,
    /// Light green to dark blue.
    GnBu,
    /// Light orange to dark red.
    OrRd,
    /// Light purple to dark blue.
    PuBu,
    /// Light purple to blue to dark green.
    PuBuGn,
    /// Light purple to dark red.
    PuRd,
    /// Light red to dark purple.
    RdPu,
    /// Light yellow to dark green.
    YlGn,
    /// Light yellow to green to dark blue.
    YlGnBu,
    /// Light yellow to orange to dark brown.
    YlOrBr,
    /// Light yellow to orange to dark red.
    YlOrRd,
}

impl Scheme {
    /// All schemes, in alphabetical order of their names.
    pub const ALL: [Scheme; 12] = {
        use Scheme::*;
        [BuGn, BuPu, GnBu, OrRd, PuBu, PuBuGn, PuRd, RdPu, YlGn, YlGnBu,
         YlOrBr, YlOrRd]
    };

    /// The name under which the scheme is looked up.
    pub fn name(self) -> &'static str {
        use Scheme::*;
        match self {
            BuGn => "BuGn", BuPu => "BuPu", GnBu => "GnBu", OrRd => "OrRd",
            PuBu => "PuBu", PuBuGn => "PuBuGn", PuRd => "PuRd",
            RdPu => "RdPu", YlGn => "YlGn", YlGnBu => "YlGnBu",
            YlOrBr => "YlOrBr", YlOrRd => "YlOrRd",
        }
    }

    /// The base palette of the scheme.
    pub fn base(self) -> &'static [&'static str; super::BASE_LEN] {
        &super::BASE_PALETTES[self as usize]
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = BreweryError;

    /// Exact, case-sensitive lookup of a scheme name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::lookup(s).ok_or_else(|| BreweryError::UnknownScheme {
            name: s.to_string() })
    }
}

/// A named list of colors generated for a requested size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub(crate) scheme: Scheme,
    pub(crate) requested: usize,
    pub(crate) colors: Vec<HexColor>,
}

impl ColorScheme {
    /// The scheme the colors come from.
    pub fn scheme(&self) -> Scheme { self.scheme }

    /// The size that was asked for.  Small sizes return the whole
    /// base palette, so it may differ from [`ColorScheme::len`].
    pub fn requested(&self) -> usize { self.requested }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn colors(&self) -> &[HexColor] { &self.colors }

    /// The colors decoded to RGB.
    pub fn rgb(&self) -> Vec<RGB8> {
        self.colors.iter().map(HexColor::to_rgb).collect()
    }
}

impl IntoIterator for ColorScheme {
    type Item = HexColor;
    type IntoIter = std::vec::IntoIter<HexColor>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

/// Serialized as the plain list of hex strings.
impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.colors.serialize(s)
    }
}
