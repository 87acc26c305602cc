use anyhow::Result;

use super::Exporter;
use crate::scheme::Palette;

/// Custom property names for the first five colors, in palette order.
const ROLE_NAMES: [&str; 5] = ["primary", "secondary", "accent", "neutral", "highlight"];

/// A `:root` block of CSS custom properties plus a two-stop gradient
/// running from the first color to the last.
pub struct CssExporter;

impl CssExporter {
    pub fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::from(":root {\n");
        for (i, color) in palette.iter().enumerate() {
            out.push_str(&format!("  --color-{}: {};\n", property_name(i), color.to_hex()));
        }
        if let (Some(first), Some(last)) = (palette.first(), palette.last()) {
            out.push_str(&format!(
                "  --gradient: linear-gradient(135deg, {}, {});\n",
                first.to_hex(),
                last.to_hex()
            ));
        }
        out.push_str("}\n");
        out
    }
}

fn property_name(index: usize) -> String {
    ROLE_NAMES
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

impl Exporter for CssExporter {
    fn name(&self) -> &str {
        "CSS"
    }

    fn extension(&self) -> &str {
        "css"
    }

    fn encode(&self, palette: &Palette) -> Result<Vec<u8>> {
        Ok(self.serialize(palette).into_bytes())
    }
}
