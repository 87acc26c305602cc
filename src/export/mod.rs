pub mod css;
mod font;
pub mod png;
pub mod svg;

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::scheme::Palette;

pub use css::CssExporter;
pub use png::PngExporter;
pub use svg::SvgExporter;

/// Renders a palette into a downloadable design asset.
pub trait Exporter {
    /// Human-readable format name.
    fn name(&self) -> &str;

    /// File extension, without the dot.
    fn extension(&self) -> &str;

    /// Encode a non-empty palette into the file contents.
    fn encode(&self, palette: &Palette) -> Result<Vec<u8>>;

    /// Encode the palette. Every format rejects an empty palette.
    fn render(&self, palette: &Palette) -> Result<Vec<u8>> {
        if palette.is_empty() {
            bail!("cannot export an empty palette as {}", self.name());
        }
        self.encode(palette)
    }

    /// Render and write to `path`.
    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.render(palette)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {} to {}", self.name(), path.display()))?;
        log::debug!("wrote {} export to {}", self.name(), path.display());
        Ok(())
    }
}

/// Export format selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Css,
    Png,
    Svg,
}

impl ExportFormat {
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Css => Box::new(CssExporter),
            ExportFormat::Png => Box::new(PngExporter::default()),
            ExportFormat::Svg => Box::new(SvgExporter::default()),
        }
    }
}
