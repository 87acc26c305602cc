use anyhow::Result;

use super::Exporter;
use crate::scheme::Palette;

/// A vector swatch sheet with the same layout as the PNG export.
#[derive(Debug, Clone, Copy)]
pub struct SvgExporter {
    pub swatch_width: u32,
    pub height: u32,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            swatch_width: 160,
            height: 200,
        }
    }
}

impl SvgExporter {
    pub fn serialize(&self, palette: &Palette) -> String {
        let width = self.swatch_width * palette.len() as u32;
        let label_y = self.height - self.height / 10;
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{h}\" viewBox=\"0 0 {width} {h}\">\n",
            h = self.height
        );
        for (i, color) in palette.iter().enumerate() {
            let x = i as u32 * self.swatch_width;
            let hex = color.to_hex();
            out.push_str(&format!(
                "  <rect x=\"{x}\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{hex}\"/>\n",
                self.swatch_width, self.height
            ));
            out.push_str(&format!(
                "  <text x=\"{}\" y=\"{label_y}\" fill=\"{}\" font-family=\"monospace\" font-size=\"16\" text-anchor=\"middle\">{hex}</text>\n",
                x + self.swatch_width / 2,
                color.readable_text().to_hex()
            ));
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Exporter for SvgExporter {
    fn name(&self) -> &str {
        "SVG"
    }

    fn extension(&self) -> &str {
        "svg"
    }

    fn encode(&self, palette: &Palette) -> Result<Vec<u8>> {
        Ok(self.serialize(palette).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn one_rect_and_label_per_color() {
        let svg = SvgExporter::default().serialize(&Palette::default());
        assert_eq!(svg.matches("<rect ").count(), 5);
        assert_eq!(svg.matches("<text ").count(), 5);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn colors_appear_in_palette_order() {
        let palette = Palette::default();
        let svg = SvgExporter::default().serialize(&palette);
        let positions: Vec<usize> = palette
            .iter()
            .map(|c| svg.find(&format!("fill=\"{}\"", c.to_hex())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn label_contrasts_with_swatch() {
        let svg = SvgExporter::default().serialize(&Palette::new(vec![Color::new(10, 10, 40)]));
        assert!(svg.contains("fill=\"#ffffff\" font-family"));
        assert!(svg.contains(">#0a0a28</text>"));
    }
}
