//! Palette extraction and perceptual color tooling.
//!
//! Sample an image, bucket its pixels into a handful of dominant colors, then
//! derive formats, harmonies, LCh adjustments, WCAG contrast and exportable
//! design assets from them.

pub mod adjust;
pub mod cli;
pub mod color;
pub mod contrast;
pub mod error;
pub mod export;
pub mod harmony;
pub mod pipeline;
pub mod preview;
pub mod scheme;
pub mod state;

pub use adjust::{adjust, Adjustments};
pub use color::{Color, ColorFormats};
pub use contrast::{contrast, ContrastReport};
pub use error::{DecodeError, ParseError, ValidationError};
pub use harmony::{harmony, HarmonyKind};
pub use pipeline::quantize::quantize;
pub use pipeline::sample::ImageSource;
pub use pipeline::{extract_palette, extract_palette_blocking, ExtractOptions, Pixel};
pub use scheme::Palette;
