use std::num::NonZeroU8;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;
use crate::harmony::HarmonyKind;
use crate::pipeline::quantize::DEFAULT_FACTOR;
use crate::pipeline::sample::DEFAULT_MAX_DIMENSION;
use crate::pipeline::ExtractOptions;
use crate::scheme::DEFAULT_PALETTE_SIZE;

/// Extract color palettes from images and derive harmonies, adjustments,
/// contrast checks and design assets from them.
#[derive(Parser, Debug)]
#[command(name = "hueprint", version, about)]
pub struct Args {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that samples an image.
#[derive(clap::Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Number of colors to extract
    #[arg(short = 'k', long = "colors", default_value_t = DEFAULT_PALETTE_SIZE)]
    pub colors: usize,

    /// Quantization grid spacing per channel (1-255)
    #[arg(long, default_value_t = DEFAULT_FACTOR)]
    pub factor: NonZeroU8,

    /// Longest side of the downscaled sample, in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max_dimension: u32,
}

impl SamplingArgs {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            count: self.colors,
            factor: self.factor,
            max_dimension: self.max_dimension,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the dominant colors of an image
    Extract {
        /// Path to the input image
        image: PathBuf,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Print a colored terminal preview of the palette
        #[arg(long)]
        preview: bool,

        /// Print the shareable palette reference
        #[arg(long)]
        share: bool,

        /// Print the palette as JSON
        #[arg(long, conflicts_with_all = ["preview", "share"])]
        json: bool,
    },

    /// Show a color in hex, rgb, hsl and lch notation
    Formats {
        /// Any CSS color
        color: String,

        #[arg(long)]
        json: bool,
    },

    /// Derive a color harmony
    Harmony {
        #[arg(value_enum)]
        kind: HarmonyKind,

        /// Base color, any CSS color
        color: String,

        #[arg(long)]
        preview: bool,

        #[arg(long, conflicts_with = "preview")]
        json: bool,
    },

    /// Adjust brightness, saturation and warmth in LCh space
    Adjust {
        /// Any CSS color
        color: String,

        /// Added to LCh lightness (0-100 scale)
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        brightness: f64,

        /// Multiplies LCh chroma
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        saturation: f64,

        /// Added to LCh hue, in degrees
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        warmth: f64,
    },

    /// Check WCAG contrast of text on a background
    Contrast {
        /// Text color
        foreground: String,

        /// Background color
        background: String,

        #[arg(long)]
        json: bool,
    },

    /// Export a palette as CSS, PNG or SVG
    Export {
        /// Image to extract the palette from
        #[arg(required_unless_present = "palette")]
        image: Option<PathBuf>,

        /// Shared palette reference to export instead of an image
        #[arg(long, conflicts_with = "image")]
        palette: Option<String>,

        #[arg(short, long, value_enum)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Decode a shared palette reference
    Share {
        /// Comma-separated bare hex colors
        reference: String,

        /// Number of colors the reference must hold
        #[arg(short = 'k', long = "colors", default_value_t = DEFAULT_PALETTE_SIZE)]
        colors: usize,
    },
}
