use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::DecodeError;
use crate::pipeline::Pixel;

/// Longest side, in pixels, of the buffer handed to the quantizer.
pub const DEFAULT_MAX_DIMENSION: u32 = 200;

/// Where the image comes from: a file on disk, or bytes already in memory
/// (an upload, a drag-drop payload, a clipboard paste).
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// A downscaled, row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

/// Read `path` into memory, mapping a missing file to `NotFound`.
pub fn read_source(path: &Path) -> Result<Vec<u8>, DecodeError> {
    std::fs::read(path).map_err(|source| io_error(path, source))
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> DecodeError {
    if source.kind() == std::io::ErrorKind::NotFound {
        DecodeError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        DecodeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Decode encoded image bytes and sample them down to at most
/// `max_dimension` on the longer side.
pub fn sample_bytes(bytes: &[u8], max_dimension: u32) -> Result<SampledImage, DecodeError> {
    let img = image::load_from_memory(bytes).map_err(|source| DecodeError::Unsupported { source })?;
    sample_image(&img, max_dimension)
}

/// Load an image from disk and sample it.
pub fn sample_path(path: &Path, max_dimension: u32) -> Result<SampledImage, DecodeError> {
    sample_bytes(&read_source(path)?, max_dimension)
}

/// Downscale an already-decoded image, preserving aspect ratio, and drop alpha.
pub fn sample_image(img: &DynamicImage, max_dimension: u32) -> Result<SampledImage, DecodeError> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty);
    }

    let (out_w, out_h) = target_dimensions(width, height, max_dimension);
    let rgb = if (out_w, out_h) == (width, height) {
        img.to_rgb8()
    } else {
        img.resize_exact(out_w, out_h, FilterType::Triangle).to_rgb8()
    };
    log::debug!("sampled {width}x{height} image down to {out_w}x{out_h}");

    let pixels = rgb.pixels().map(|p| p.0).collect();
    Ok(SampledImage {
        width: out_w,
        height: out_h,
        pixels,
    })
}

/// `scale = min(max/W, max/H, 1)`; each side is rounded and kept at least 1.
pub fn target_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = f64::from(max_dimension.max(1));
    let scale = (max / f64::from(width))
        .min(max / f64::from(height))
        .min(1.0);
    let side = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (side(width), side(height))
}
