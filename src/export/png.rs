use std::io::Cursor;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, Rgb, RgbImage};

use super::font::{self, GLYPH_HEIGHT};
use super::Exporter;
use crate::scheme::Palette;

/// A raster swatch sheet: one full-height column per color with its hex
/// label near the bottom, drawn in whichever of black or white reads better.
#[derive(Debug, Clone, Copy)]
pub struct PngExporter {
    pub swatch_width: u32,
    pub height: u32,
    /// Pixel size of one font dot.
    pub label_scale: u32,
}

impl Default for PngExporter {
    fn default() -> Self {
        Self {
            swatch_width: 160,
            height: 200,
            label_scale: 2,
        }
    }
}

impl PngExporter {
    pub fn draw(&self, palette: &Palette) -> Result<RgbImage> {
        if palette.is_empty() {
            bail!("cannot render an empty palette");
        }
        let width = self.swatch_width * palette.len() as u32;
        let mut img = RgbImage::new(width, self.height);

        let label_height = GLYPH_HEIGHT * self.label_scale;
        let label_y = self.height.saturating_sub(label_height + self.height / 10);

        for (i, color) in palette.iter().enumerate() {
            let x0 = i as u32 * self.swatch_width;
            let fill = Rgb([color.r, color.g, color.b]);
            for x in x0..x0 + self.swatch_width {
                for y in 0..self.height {
                    img.put_pixel(x, y, fill);
                }
            }

            let label = color.to_hex();
            let text = color.readable_text();
            let label_x = x0 + self.swatch_width.saturating_sub(font::text_width(&label, self.label_scale)) / 2;
            font::draw_text(
                &mut img,
                label_x,
                label_y,
                &label,
                self.label_scale,
                Rgb([text.r, text.g, text.b]),
            );
        }
        Ok(img)
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &str {
        "PNG"
    }

    fn extension(&self) -> &str {
        "png"
    }

    fn encode(&self, palette: &Palette) -> Result<Vec<u8>> {
        let img = self.draw(palette)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .context("failed to encode PNG")?;
        Ok(out.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn one_column_per_color() {
        let img = PngExporter::default().draw(&Palette::default()).unwrap();
        assert_eq!(img.dimensions(), (800, 200));
    }

    #[test]
    fn swatch_corners_hold_palette_colors() {
        let palette = Palette::default();
        let img = PngExporter::default().draw(&palette).unwrap();
        for (i, color) in palette.iter().enumerate() {
            let px = img.get_pixel(i as u32 * 160 + 2, 2);
            assert_eq!(px.0, [color.r, color.g, color.b]);
        }
    }

    #[test]
    fn label_uses_readable_text_color() {
        let palette = Palette::new(vec![Color::new(250, 250, 250)]);
        let img = PngExporter::default().draw(&palette).unwrap();
        assert!(img.pixels().any(|p| p.0 == [0, 0, 0]), "no black label pixels");
    }

    #[test]
    fn rendered_bytes_decode_as_png() {
        let bytes = PngExporter::default().render(&Palette::default()).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 200));
    }

    #[test]
    fn empty_palette_is_an_error() {
        assert!(PngExporter::default().render(&Palette::new(Vec::new())).is_err());
    }
}
