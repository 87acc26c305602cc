//! Image to palette: sample the image, bucket its pixels, keep the biggest buckets.

pub mod quantize;
pub mod sample;

use std::num::NonZeroU8;

use crate::error::DecodeError;
use crate::scheme::{Palette, DEFAULT_PALETTE_SIZE};

use quantize::{quantize_with_factor, DEFAULT_FACTOR};
use sample::{ImageSource, DEFAULT_MAX_DIMENSION};

/// One sampled pixel, alpha already dropped.
pub type Pixel = [u8; 3];

/// Knobs for a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// How many colors to return at most.
    pub count: usize,
    /// Quantization grid spacing per channel.
    pub factor: NonZeroU8,
    /// Longest side of the sampled buffer.
    pub max_dimension: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PALETTE_SIZE,
            factor: DEFAULT_FACTOR,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Extract the dominant colors of an image.
///
/// File reads go through `tokio::fs`; decoding and bucketing run on the
/// blocking pool. A decode failure is returned as-is and never replaced with
/// a default palette.
pub async fn extract_palette(
    source: ImageSource,
    options: &ExtractOptions,
) -> Result<Palette, DecodeError> {
    let bytes = match source {
        ImageSource::Path(path) => tokio::fs::read(&path)
            .await
            .map_err(|e| sample::io_error(&path, e))?,
        ImageSource::Bytes(bytes) => bytes,
    };

    let options = *options;
    tokio::task::spawn_blocking(move || extract_from_bytes(&bytes, &options))
        .await
        .map_err(|join| {
            log::error!("palette extraction task failed: {join}");
            DecodeError::Interrupted
        })?
}

/// Blocking counterpart of [`extract_palette`].
pub fn extract_palette_blocking(
    source: ImageSource,
    options: &ExtractOptions,
) -> Result<Palette, DecodeError> {
    match source {
        ImageSource::Path(path) => extract_from_bytes(&sample::read_source(&path)?, options),
        ImageSource::Bytes(bytes) => extract_from_bytes(&bytes, options),
    }
}

fn extract_from_bytes(bytes: &[u8], options: &ExtractOptions) -> Result<Palette, DecodeError> {
    let sampled = sample::sample_bytes(bytes, options.max_dimension)?;
    let colors = quantize_with_factor(&sampled.pixels, options.count, options.factor);
    Ok(Palette::new(colors))
}
