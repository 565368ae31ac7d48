//! Colour normalization: 8-bit sRGB channels with a float alpha.

use palette::Srgb;
use regex::Regex;
use std::sync::LazyLock;

use crate::scene::Color;

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9.eE+-]+)\s*\)$")
        .expect("valid rgba regex")
});

/// A colour after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl From<&Color> for Rgba8 {
    fn from(color: &Color) -> Self {
        let rgb: Srgb<u8> = Srgb::new(color.r, color.g, color.b).into_format();
        Self {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
            a: color.a.clamp(0.0, 1.0),
        }
    }
}

/// `rgba(r, g, b, a)` with channels rounded to 0-255.
pub fn to_rgba(color: &Color) -> String {
    let c = Rgba8::from(color);
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a)
}

pub fn to_hex(color: &Color) -> String {
    let c = Rgba8::from(color);
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Inverse of [`to_rgba`].
pub fn parse_rgba(value: &str) -> Option<Rgba8> {
    let caps = RGBA_RE.captures(value.trim())?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Rgba8 {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        a: caps.get(4)?.as_str().parse::<f64>().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn color(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    #[test]
    fn formats_rounded_channels_and_float_alpha() {
        assert_eq!(to_rgba(&color(1.0, 0.0, 0.2, 0.5)), "rgba(255, 0, 51, 0.5)");
        assert_eq!(to_rgba(&color(0.0, 0.0, 0.0, 1.0)), "rgba(0, 0, 0, 1)");
        assert_eq!(to_hex(&color(1.0, 0.0, 0.2, 0.5)), "#ff0033");
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let c = Rgba8::from(&color(1.5, -0.2, 0.0, 2.0));
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 1.0));
    }

    #[test]
    fn parse_rejects_other_notations() {
        assert!(parse_rgba("#ff0000").is_none());
        assert!(parse_rgba("rgb(1, 2, 3)").is_none());
        assert!(parse_rgba("rgba(300, 0, 0, 1)").is_none());
    }

    proptest! {
        #[test]
        fn rgba_round_trip(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0, a in 0.0f64..=1.0) {
            let source = color(r, g, b, a);
            let parsed = parse_rgba(&to_rgba(&source)).expect("parse");

            prop_assert_eq!(parsed.r, (r * 255.0).round() as u8);
            prop_assert_eq!(parsed.g, (g * 255.0).round() as u8);
            prop_assert_eq!(parsed.b, (b * 255.0).round() as u8);
            prop_assert!((parsed.a - a).abs() < 1e-12);
        }
    }
}
