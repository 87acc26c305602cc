use std::fmt;

use crate::color::{Color, LchColor};

/// Hue offsets, relative to the base color, for the rotational harmonies.
const ANALOGOUS: [f64; 2] = [-30.0, 30.0];
const TRIADIC: [f64; 2] = [120.0, 240.0];
const COMPLEMENTARY: [f64; 1] = [180.0];

/// Lightness factors for the shade ramp, darkest last.
const SHADES: [f64; 3] = [0.8, 0.6, 0.4];
/// Chroma factors for the tone ramp, greyest last.
const TONES: [f64; 3] = [0.7, 0.4, 0.1];

/// A rule for deriving related colors from a base color in LCh space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HarmonyKind {
    Analogous,
    Triadic,
    Complementary,
    Shades,
    Tones,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::Complementary,
        HarmonyKind::Shades,
        HarmonyKind::Tones,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Shades => "shades",
            HarmonyKind::Tones => "tones",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive the colors of `kind` from `base`. The base itself is not included.
pub fn harmony(kind: HarmonyKind, base: Color) -> Vec<Color> {
    let lch = base.to_lch();
    let hue = lch.hue.into_positive_degrees();
    let with_hue = |offset: &f64| LchColor::new(lch.l, lch.chroma, wrap_hue(hue + offset));

    let derived: Vec<LchColor> = match kind {
        HarmonyKind::Analogous => ANALOGOUS.iter().map(with_hue).collect(),
        HarmonyKind::Triadic => TRIADIC.iter().map(with_hue).collect(),
        HarmonyKind::Complementary => COMPLEMENTARY.iter().map(with_hue).collect(),
        HarmonyKind::Shades => SHADES
            .iter()
            .map(|f| LchColor::new(lch.l * f, lch.chroma, hue))
            .collect(),
        HarmonyKind::Tones => TONES
            .iter()
            .map(|f| LchColor::new(lch.l, lch.chroma * f, hue))
            .collect(),
    };

    derived.into_iter().map(Color::from_lch).collect()
}

/// Wrap any angle into `[0, 360)`.
pub(crate) fn wrap_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn counts_per_kind() {
        let base = Color::new(200, 80, 60);
        assert_eq!(harmony(HarmonyKind::Analogous, base).len(), 2);
        assert_eq!(harmony(HarmonyKind::Triadic, base).len(), 2);
        assert_eq!(harmony(HarmonyKind::Complementary, base).len(), 1);
        assert_eq!(harmony(HarmonyKind::Shades, base).len(), 3);
        assert_eq!(harmony(HarmonyKind::Tones, base).len(), 3);
    }

    #[test]
    fn wrap_hue_stays_in_range() {
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }

    #[test]
    fn complementary_of_vivid_color_keeps_opposite_hue() {
        // pure red's opposite lies far outside sRGB at the same lightness
        let base = Color::new(255, 0, 0);
        let once = harmony(HarmonyKind::Complementary, base)[0];
        let d = hue_distance(base.hue(), once.hue());
        assert!((d - 180.0).abs() < 3.0, "complement is {d:.2}° away");

        let twice = harmony(HarmonyKind::Complementary, once)[0];
        let d = hue_distance(base.hue(), twice.hue());
        assert!(d < 3.0, "hue drifted by {d:.2}°");
    }

    #[test]
    fn analogous_neighbours_are_thirty_degrees_away() {
        let base = Color::new(170, 110, 90);
        let base_hue = base.hue();
        for c in harmony(HarmonyKind::Analogous, base) {
            let d = hue_distance(base_hue, c.hue());
            assert!((d - 30.0).abs() < 3.0, "expected ~30°, got {d:.2}°");
        }
    }

    #[test]
    fn shades_get_progressively_darker() {
        let base = Color::new(90, 160, 220);
        let shades = harmony(HarmonyKind::Shades, base);
        let mut previous = base.to_lch().l;
        for shade in shades {
            let l = shade.to_lch().l;
            assert!(l < previous, "shade not darker: {l} >= {previous}");
            previous = l;
        }
    }

    #[test]
    fn tones_get_progressively_greyer() {
        let base = Color::new(220, 60, 60);
        let tones = harmony(HarmonyKind::Tones, base);
        let mut previous = base.to_lch().chroma;
        for tone in tones {
            let c = tone.to_lch().chroma;
            assert!(c < previous, "tone not greyer: {c} >= {previous}");
            previous = c;
        }
    }

    #[test]
    fn gray_shades_stay_gray() {
        for shade in harmony(HarmonyKind::Shades, Color::new(200, 200, 200)) {
            assert!(shade.r.abs_diff(shade.g) <= 1 && shade.g.abs_diff(shade.b) <= 1);
        }
    }

    #[test]
    fn kind_names() {
        let names: Vec<String> = HarmonyKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["analogous", "triadic", "complementary", "shades", "tones"]
        );
    }
}
