//! Colors from text: hex notation and a small set of names.

use std::collections::HashMap;
use lazy_static::lazy_static;
use rgb::{RGB, RGB8};
use crate::{Error, normalize_rgb8, clamp_rgb};

lazy_static! {
    static ref NAMED: HashMap<&'static str, RGB8> = {
        let mut m = HashMap::new();
        m.insert("white", RGB8::new(255, 255, 255));
        m.insert("black", RGB8::new(0, 0, 0));
        m.insert("red", RGB8::new(255, 0, 0));
        m.insert("green", RGB8::new(0, 255, 0));
        m.insert("blue", RGB8::new(0, 0, 255));
        m.insert("yellow", RGB8::new(255, 255, 0));
        m.insert("cyan", RGB8::new(0, 255, 255));
        m.insert("magenta", RGB8::new(255, 0, 255));
        m.insert("gray", RGB8::new(128, 128, 128));
        m.insert("grey", RGB8::new(128, 128, 128));
        m.insert("orange", RGB8::new(255, 165, 0));
        m.insert("pink", RGB8::new(255, 192, 203));
        m.insert("purple", RGB8::new(128, 0, 128));
        m.insert("brown", RGB8::new(165, 42, 42));
        m.insert("navy", RGB8::new(0, 0, 128));
        m.insert("teal", RGB8::new(0, 128, 128));
        m.insert("indigo", RGB8::new(75, 0, 130));
        m
    };
}

/// Returns the color with the given name (case-insensitive), if known.
///
/// # Example
///
/// ```
/// use color_contrast::named;
/// let orange = named("Orange").unwrap();
/// assert_eq!(orange.r, 1.);
/// assert!(named("octarine").is_none());
/// ```
pub fn named(name: &str) -> Option<RGB<f64>> {
    NAMED.get(name.to_ascii_lowercase().as_str()).map(|&c| normalize_rgb8(c))
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

fn parse_hex(hex: &str) -> Option<RGB8> {
    let d: Option<Vec<u8>> = hex.bytes().map(hex_digit).collect();
    match d?.as_slice() {
        &[r, g, b] => Some(RGB8::new(17 * r, 17 * g, 17 * b)),
        &[r1, r0, g1, g0, b1, b0] =>
            Some(RGB8::new(16 * r1 + r0, 16 * g1 + g0, 16 * b1 + b0)),
        _ => None,
    }
}

/// Parse a color given as `#rgb`, `#rrggbb` or by name.
///
/// # Example
///
/// ```
/// use color_contrast::{parse_color, Contrast};
/// assert!(parse_color("#000080").unwrap().is_dark());
/// assert!(!parse_color(" #FFF ").unwrap().is_dark());
/// assert!(!parse_color("white").unwrap().is_dark());
/// assert!(parse_color("#12345").is_err());
/// ```
pub fn parse_color(s: &str) -> Result<RGB<f64>, Error> {
    let s = s.trim();
    let c = match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex).map(normalize_rgb8),
        None => named(s),
    };
    c.ok_or_else(|| Error::Parse(s.to_string()))
}

/// Format the color as `#rrggbb`.  Channels are clamped to \[0, 1\]
/// first.
pub fn css_string(c: RGB<f64>) -> String {
    let RGB { r, g, b } = clamp_rgb(c);
    let to8 = |x: f64| (255. * x).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to8(r), to8(g), to8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(parse_hex("fff"), Some(RGB8::new(255, 255, 255)));
        assert_eq!(parse_hex("1a2B3c"), Some(RGB8::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("ggg"), None);
        assert_eq!(parse_hex("ffff"), None);
    }

    #[test]
    fn parse() {
        assert_eq!(parse_color("#ff0000"), Ok(RGB { r: 1., g: 0., b: 0. }));
        assert_eq!(parse_color("Black"), Ok(RGB { r: 0., g: 0., b: 0. }));
        assert_eq!(parse_color("rgb(1,2,3)"),
                   Err(Error::Parse("rgb(1,2,3)".to_string())));
        assert_eq!(parse_color("  nope "),
                   Err(Error::Parse("nope".to_string())));
    }

    #[test]
    fn css() {
        assert_eq!(css_string(RGB { r: 1., g: 0., b: 0.5 }), "#ff0080");
        assert_eq!(css_string(RGB { r: 2., g: -1., b: f64::NAN }), "#ff0000");
        for name in ["navy", "teal", "pink", "brown"] {
            let c = named(name).unwrap();
            assert_eq!(parse_color(&css_string(c)), Ok(c));
        }
    }
}
