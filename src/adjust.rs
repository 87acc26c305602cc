use crate::color::{Color, LchColor};
use crate::harmony::wrap_hue;

/// Slider values applied to a color in LCh space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    /// Added to lightness; the result is clamped to [0, 100].
    pub brightness: f64,
    /// Multiplies chroma; the result is floored at 0.
    pub saturation: f64,
    /// Added to hue in degrees; the result wraps mod 360.
    pub warmth: f64,
}

impl Adjustments {
    pub const IDENTITY: Adjustments = Adjustments {
        brightness: 0.0,
        saturation: 1.0,
        warmth: 0.0,
    };

    pub fn new(brightness: f64, saturation: f64, warmth: f64) -> Self {
        Self {
            brightness,
            saturation,
            warmth,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Apply `adjustments` to `color`, returning a new color.
pub fn adjust(color: Color, adjustments: Adjustments) -> Color {
    let lch = color.to_lch();
    let l = (lch.l + adjustments.brightness).clamp(0.0, 100.0);
    let chroma = (lch.chroma * adjustments.saturation).max(0.0);
    let hue = wrap_hue(lch.hue.into_positive_degrees() + adjustments.warmth);
    Color::from_lch(LchColor::new(l, chroma, hue))
}
