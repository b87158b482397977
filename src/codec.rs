//! Conversion between RGB triples and `#RRGGBB` strings.

use std::fmt;
use std::str::FromStr;
use rgb::{RGB, RGB8};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;
use crate::RGBColor;
use crate::error::{BreweryError, Result};

/// A color written as `#` followed by 6 uppercase hexadecimal digits.
///
/// Parsing accepts lowercase digits and an absent `#`; the stored
/// form is always canonical so that two `HexColor`s are equal iff
/// they denote the same [`RGB8`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor(String);

impl HexColor {
    /// The canonical `#RRGGBB` string.
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Decode the color.  Cannot fail: a `HexColor` is always valid.
    pub fn to_rgb(&self) -> RGB8 {
        let b = self.0.as_bytes();
        RGB8 { r: hex_byte(b[1], b[2]), g: hex_byte(b[3], b[4]),
               b: hex_byte(b[5], b[6]) }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str { &self.0 }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

impl FromStr for HexColor {
    type Err = BreweryError;

    fn from_str(s: &str) -> Result<Self> { Ok(encode(&decode(s)?)) }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Channel value as written in the hex string: clamped to \[0, 255\]
/// then truncated (NaN gives 0).
fn channel(x: f64) -> u8 {
    if x.is_nan() { 0 } else { x.clamp(0., 255.) as u8 }
}

fn in_range(x: f64) -> bool { (0. ..=255.).contains(&x) }

/// Encode a color as `#RRGGBB`.
///
/// Fractional channels are truncated; channels outside \[0, 255\] are
/// clamped.
///
/// # Example
///
/// ```
/// use rgb::RGB;
/// use carto_brewery::encode;
/// assert_eq!(encode(&RGB::new(237., 248.9, 251.)).as_str(), "#EDF8FB");
/// ```
pub fn encode<C: RGBColor>(color: &C) -> HexColor {
    let RGB { r, g, b } = color.to_rgb();
    if !(in_range(r) && in_range(g) && in_range(b)) {
        warn!(r, g, b, "Color channel outside [0, 255], clamping");
    }
    HexColor(format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b)))
}

/// Decode `#RRGGBB` (the `#` is optional, digits are case-insensitive).
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use carto_brewery::decode;
/// assert_eq!(decode("#66c2a4").unwrap(), RGB8::new(102, 194, 164));
/// assert!(decode("#66c2a").is_err());
/// ```
pub fn decode(hex: &str) -> Result<RGB8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(BreweryError::Format { input: hex.to_string() })
    }
    Ok(RGB8 { r: hex_byte(digits[0], digits[1]),
              g: hex_byte(digits[2], digits[3]),
              b: hex_byte(digits[4], digits[5]) })
}

/// Value of a single hex digit, which must already be validated.
#[inline]
fn nibble(c: u8) -> u8 {
    match c {
        b'0' ..= b'9' => c - b'0',
        b'a' ..= b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

#[inline]
fn hex_byte(hi: u8, lo: u8) -> u8 { nibble(hi) << 4 | nibble(lo) }


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_round_trip() {
        for v in (0 ..= 255).step_by(5) {
            let c = RGB8::new(v, 255 - v, v / 2);
            assert_eq!(decode(encode(&c).as_str()).unwrap(), c);
        }
    }

    #[test]
    fn hex_round_trip_uppercases() {
        for h in ["#edf8fb", "#CCECE6", "005824", "#aBcDeF"] {
            let upper = format!("#{}",
                                h.trim_start_matches('#').to_uppercase());
            assert_eq!(encode(&decode(h).unwrap()).as_str(), upper);
        }
    }

    #[test]
    fn encode_truncates_fractions() {
        assert_eq!(encode(&RGB::new(15.99, 16.0, 255.0)).as_str(), "#0F10FF");
    }

    #[test]
    fn encode_clamps_out_of_range() {
        assert_eq!(encode(&RGB::new(-3., 300., f64::NAN)).as_str(), "#00FF00");
    }

    #[test]
    fn decode_rejects_malformed() {
        for h in ["", "#", "#12345", "#1234567", "#GG0000", "##123456",
                  "12 456"] {
            assert!(matches!(decode(h), Err(BreweryError::Format { .. })),
                    "{h:?} accepted");
        }
    }

    #[test]
    fn parse_hex_color() {
        let h: HexColor = "41ae76".parse().unwrap();
        assert_eq!(h, "#41AE76");
        assert_eq!(h.to_rgb(), RGB8::new(0x41, 0xAE, 0x76));
        assert!("#41ae7".parse::<HexColor>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let h: HexColor = "#238b45".parse().unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "\"#238B45\"");
        let back: HexColor = serde_json::from_str("\"#238b45\"").unwrap();
        assert_eq!(back, h);
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
