use serde::Serialize;

use crate::color::Color;

/// WCAG AA threshold for normal text.
pub const AA_NORMAL: f64 = 4.5;
/// WCAG AAA threshold for normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// WCAG AA threshold for large text (18pt, or 14pt bold).
pub const AA_LARGE: f64 = 3.0;

/// Result of checking a foreground/background pair against WCAG 2.x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    pub aa: bool,
    pub aaa: bool,
    pub aa_large: bool,
}

/// Check `foreground` text on `background`.
///
/// Pass/fail is decided on the exact ratio; only the reported value is rounded,
/// so a pair at 4.496 reports `4.5` yet fails AA.
pub fn contrast(foreground: Color, background: Color) -> ContrastReport {
    let ratio = Color::contrast_ratio(&foreground, &background);
    ContrastReport {
        ratio: (ratio * 100.0).round() / 100.0,
        aa: ratio >= AA_NORMAL,
        aaa: ratio >= AAA_NORMAL,
        aa_large: ratio >= AA_LARGE,
    }
}
