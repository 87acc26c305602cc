//! The palette value type and its shareable comma-hex encoding.
//!
//! A share reference is the bare hex of each color joined by commas, in
//! palette order: `264653,2a9d8f,e9c46a,f4a261,e76f51`.

use serde::Serialize;

use crate::color::Color;
use crate::error::ValidationError;

/// Number of colors a palette normally holds.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Shown before any image has been processed, and whenever a shared
/// reference fails to restore.
pub const DEFAULT_COLORS: [Color; DEFAULT_PALETTE_SIZE] = [
    Color::from_packed(0x264653),
    Color::from_packed(0x2a9d8f),
    Color::from_packed(0xe9c46a),
    Color::from_packed(0xf4a261),
    Color::from_packed(0xe76f51),
];

/// An ordered list of colors. Order is extraction rank or the user's edit order;
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    pub fn last(&self) -> Option<Color> {
        self.colors.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// A copy with the color at `index` replaced. Out-of-range indices leave it unchanged.
    pub fn with_color(&self, index: usize, color: Color) -> Self {
        let mut colors = self.colors.clone();
        if let Some(slot) = colors.get_mut(index) {
            *slot = color;
        }
        Self { colors }
    }

    /// A copy with the color at `from` moved to position `to`.
    pub fn with_moved(&self, from: usize, to: usize) -> Self {
        let mut colors = self.colors.clone();
        if from < colors.len() && to < colors.len() {
            let color = colors.remove(from);
            colors.insert(to, color);
        }
        Self { colors }
    }

    /// Encode as a share reference.
    pub fn to_share_string(&self) -> String {
        self.colors
            .iter()
            .map(|c| c.to_bare_hex())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Decode a share reference holding exactly `expected_len` colors.
    ///
    /// Whitespace around segments and a leading `#` on a segment are tolerated.
    pub fn from_share_string(s: &str, expected_len: usize) -> Result<Self, ValidationError> {
        let segments: Vec<&str> = if s.trim().is_empty() {
            Vec::new()
        } else {
            s.split(',').map(str::trim).collect()
        };
        if segments.len() != expected_len {
            return Err(ValidationError::WrongLength {
                expected: expected_len,
                actual: segments.len(),
            });
        }

        let colors = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                Color::from_hex(segment).map_err(|_| ValidationError::BadSegment {
                    index,
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Restore a shared palette, or fall back to the default on any problem.
    pub fn restore_or_default(s: &str) -> Self {
        Self::from_share_string(s, DEFAULT_PALETTE_SIZE).unwrap_or_else(|err| {
            log::warn!("ignoring shared palette {s:?}: {err}");
            Self::default()
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.to_vec())
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
