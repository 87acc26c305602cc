use std::collections::HashMap;
use std::num::NonZeroU8;

use crate::color::Color;
use crate::pipeline::Pixel;

/// Grid spacing used to bucket channel values.
pub const DEFAULT_FACTOR: NonZeroU8 = match NonZeroU8::new(32) {
    Some(f) => f,
    None => unreachable!(),
};

/// A populated quantization bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// The bucket key, already clamped into the u8 range.
    pub color: Color,
    /// How many sampled pixels fell into this bucket.
    pub population: usize,
}

/// The `count` most populous buckets, as colors, using the default factor.
pub fn quantize(pixels: &[Pixel], count: usize) -> Vec<Color> {
    quantize_with_factor(pixels, count, DEFAULT_FACTOR)
}

/// The `count` most populous buckets when channels snap to multiples of `factor`.
///
/// Returns fewer than `count` colors when the image has fewer distinct buckets.
pub fn quantize_with_factor(pixels: &[Pixel], count: usize, factor: NonZeroU8) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    bucket_histogram(pixels, factor)
        .into_iter()
        .take(count)
        .map(|b| b.color)
        .collect()
}

/// Every non-empty bucket, most populous first.
///
/// Ties are broken by the packed key ascending, i.e. lexicographically on
/// (r, g, b), so the order never depends on hash iteration.
pub fn bucket_histogram(pixels: &[Pixel], factor: NonZeroU8) -> Vec<Bucket> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for pixel in pixels {
        let key = bucket_key(*pixel, factor);
        *counts.entry(key.to_packed()).or_insert(0) += 1;
    }

    let mut buckets: Vec<Bucket> = counts
        .into_iter()
        .map(|(packed, population)| Bucket {
            color: Color::from_packed(packed),
            population,
        })
        .collect();
    buckets.sort_unstable_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.color.to_packed().cmp(&b.color.to_packed()))
    });

    log::debug!(
        "{} pixels fell into {} buckets (factor {factor})",
        pixels.len(),
        buckets.len()
    );
    buckets
}

/// Snap each channel to the nearest multiple of `factor`, halves rounding up,
/// then clamp into [0, 255].
pub fn bucket_key(pixel: Pixel, factor: NonZeroU8) -> Color {
    let f = u32::from(factor.get());
    let snap = |c: u8| {
        let snapped = (2 * u32::from(c) + f) / (2 * f) * f;
        snapped.min(255) as u8
    };
    Color::new(snap(pixel[0]), snap(pixel[1]), snap(pixel[2]))
}
