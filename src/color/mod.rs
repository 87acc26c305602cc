use std::fmt;
use std::str::FromStr;

use palette::white_point::D65;
use palette::{FromColor, Hsl, Lch, Srgb};
use serde::Serialize;

use crate::error::ParseError;

/// CIE LCh (D65) in double precision, the space all perceptual edits use.
pub type LchColor = Lch<D65, f64>;

/// HSL over the sRGB encoding.
pub type HslColor = Hsl<palette::encoding::Srgb, f64>;

/// Bisection steps used to pull an out-of-gamut chroma back inside sRGB.
const GAMUT_STEPS: u32 = 24;
const GAMUT_EPSILON: f64 = 1e-6;

/// Core color type used throughout the crate.
/// Wraps sRGB u8 components and provides conversions to perceptual color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xrrggbb` value.
    pub const fn from_packed(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a strict 6-digit hex color like `#ff8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::new(hex, "expected 6 hex digits"));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|e| ParseError::new(hex, e.to_string()))
    }

    /// Parse any CSS color string: hex, `rgb()`, `hsl()`, `hwb()`, `lab()`,
    /// `lch()`, `oklab()`, `oklch()` or a named color. Alpha is dropped.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let css = input
            .parse::<csscolorparser::Color>()
            .map_err(|e| ParseError::new(input, e.to_string()))?;
        if ![css.r, css.g, css.b].iter().all(|v| v.is_finite()) {
            return Err(ParseError::new(input, "non-finite channel"));
        }
        let [r, g, b, _alpha] = css.to_rgba8();
        Ok(Self::new(r, g, b))
    }

    /// Parse a CSS color, falling back to black on bad input.
    ///
    /// Prefer [`Color::parse`] wherever the caller can report the failure.
    pub fn parse_or_black(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            log::warn!("{err}; using #000000");
            Self::BLACK
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{}", self.to_bare_hex())
    }

    /// Lowercase `rrggbb` without the leading `#`.
    pub fn to_bare_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    fn to_srgb_f64(self) -> Srgb<f64> {
        self.to_srgb_u8().into_format()
    }

    /// Convert to CIE LCh.
    pub fn to_lch(self) -> LchColor {
        LchColor::from_color(self.to_srgb_f64())
    }

    /// Create from CIE LCh.
    ///
    /// Out-of-gamut colors keep their lightness and hue and give up chroma
    /// until they fit sRGB. Lightness outside [0, 100] is then clipped.
    pub fn from_lch(lch: LchColor) -> Self {
        let srgb: Srgb<f64> = Srgb::from_color(lch);
        if lch.chroma <= 0.0 || in_gamut(srgb) {
            return Self::from_srgb_f64_clamped(srgb);
        }

        let (mut lo, mut hi) = (0.0, lch.chroma);
        for _ in 0..GAMUT_STEPS {
            let mid = (lo + hi) / 2.0;
            if in_gamut(Srgb::from_color(LchColor::new(lch.l, mid, lch.hue))) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Self::from_srgb_f64_clamped(Srgb::from_color(LchColor::new(lch.l, lo, lch.hue)))
    }

    pub fn to_hsl(self) -> HslColor {
        HslColor::from_color(self.to_srgb_f64())
    }

    /// LCh hue in degrees, in `[0, 360)`.
    pub fn hue(self) -> f64 {
        self.to_lch().hue.into_positive_degrees()
    }

    /// Clamp an Srgb<f64> to [0, 1] and convert to Color.
    fn from_srgb_f64_clamped(srgb: Srgb<f64>) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(srgb.red),
            g: channel(srgb.green),
            b: channel(srgb.blue),
        }
    }

    /// WCAG 2.x relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn readable_text(self) -> Color {
        if Self::contrast_ratio(&self, &Self::BLACK) >= Self::contrast_ratio(&self, &Self::WHITE) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Every textual representation the UI shows for a color.
    pub fn formats(self) -> ColorFormats {
        let hsl = self.to_hsl();
        let lch = self.to_lch();
        let degrees = |d: f64| (d.round() as u32) % 360;
        ColorFormats {
            hex: self.to_hex(),
            rgb: format!("rgb({}, {}, {})", self.r, self.g, self.b),
            hsl: format!(
                "hsl({}, {}%, {}%)",
                degrees(hsl.hue.into_positive_degrees()),
                (hsl.saturation * 100.0).round() as i64,
                (hsl.lightness * 100.0).round() as i64
            ),
            lch: format!(
                "lch({}, {}, {})",
                lch.l.round() as i64,
                lch.chroma.round() as i64,
                degrees(lch.hue.into_positive_degrees())
            ),
        }
    }
}

fn in_gamut(srgb: Srgb<f64>) -> bool {
    [srgb.red, srgb.green, srgb.blue]
        .iter()
        .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
}

/// A color rendered in each supported notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub lch: String,
}

impl From<[u8; 3]> for Color {
    fn from(p: [u8; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
