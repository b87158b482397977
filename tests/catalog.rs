use carto_brewery::{color_brewer, decode, encode, linear_gradient,
                    BreweryError, Scheme, MAX_COLORS};
use rgb::RGB8;

#[test]
fn size_above_maximum_is_rejected() {
    for s in Scheme::ALL {
        assert!(matches!(color_brewer(s.name(), MAX_COLORS + 1),
                         Err(BreweryError::Range { .. })));
    }
    assert!(color_brewer("BuGn", MAX_COLORS).is_ok());
}

#[test]
fn small_sizes_return_the_base_palette() {
    let expected = ["#EDF8FB", "#CCECE6", "#CCECE6", "#66C2A4", "#41AE76",
                    "#238B45", "#005824"];
    for n in [0, 1, 3, 6] {
        let s = color_brewer("BuGn", n).unwrap().unwrap();
        assert_eq!(s.colors(), expected);
        assert_eq!(s.requested(), n);
    }
}

#[test]
fn unknown_names_are_not_errors() {
    assert!(color_brewer("NotAScheme", 6).unwrap().is_none());
    assert!(color_brewer("NotAScheme", 12).unwrap().is_none());
}

#[test]
fn interpolated_schemes() {
    for s in Scheme::ALL {
        for n in [7, 8, 20, 128, MAX_COLORS] {
            let c = color_brewer(s.name(), n).unwrap().unwrap();
            assert_eq!(c.len(), n);
            assert_eq!(c.scheme(), s);
            assert_eq!(c.colors()[0], s.base()[0]);
            assert_eq!(c.colors()[n - 1], s.base()[6]);
        }
    }
}

#[test]
fn scheme_serializes_as_hex_list() {
    let s = color_brewer("YlOrRd", 7).unwrap().unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.starts_with("[\"#FFFFB2\",\"#FED976\""));
    assert!(json.ends_with("\"#B10026\"]"));
}

#[test]
fn gradient_through_decoded_hex() {
    let points: Vec<RGB8> = ["#000000", "#ff0000", "#ffff00"].iter()
        .map(|h| decode(h).unwrap()).collect();
    let g = linear_gradient(&points, 5).unwrap();
    let hex: Vec<String> = g.iter().map(|c| encode(c).to_string()).collect();
    assert_eq!(hex.first().map(String::as_str), Some("#000000"));
    assert_eq!(hex.last().map(String::as_str), Some("#FFFF00"));
    assert_eq!(hex[2], "#FF0000");
}
