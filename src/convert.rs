//! RGB to grayscale conversion.
//!
//! The conversion is a pure per-pixel transform: each output cell is the
//! luminance-weighted sum of its own input pixel and nothing else. Input
//! validation happens before any arithmetic, so a malformed candidate never
//! yields a partial result.

use instant::Instant;
use rayon::prelude::*;
use tracing::debug;

use crate::config::ConversionConfig;
use crate::error::ImageError;
use crate::raster::{GrayImage, RgbImage, CHANNELS};

/// Perceptual weight of the red channel.
pub const R_WEIGHT: f64 = 0.299;
/// Perceptual weight of the green channel.
pub const G_WEIGHT: f64 = 0.587;
/// Perceptual weight of the blue channel.
pub const B_WEIGHT: f64 = 0.114;

/// Weighted luminance of a single pixel.
///
/// Full `f64` precision, no rounding and no clamping; NaN and infinite
/// channel values propagate through the sum unchanged.
#[inline]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    R_WEIGHT * r + G_WEIGHT * g + B_WEIGHT * b
}

/// Convert a nested rows-of-pixels candidate into a grayscale raster.
///
/// The candidate is validated first: an image with zero rows, a row with
/// zero pixels, rows of differing lengths, or a pixel without exactly three
/// channel values is rejected with the matching [`ImageError`] before any
/// numeric work starts. On success the output has the same `height` and
/// `width` as the input, in the same row/column order.
pub fn convert_to_gray(rows: &[Vec<Vec<f64>>]) -> Result<GrayImage, ImageError> {
    let image = RgbImage::from_rows(rows)?;
    Ok(convert_image(&image))
}

/// Convert a validated RGB raster in a single serial pass.
pub fn convert_image(image: &RgbImage) -> GrayImage {
    let start = Instant::now();

    let data: Vec<f64> = image
        .pixels()
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();
    let gray = GrayImage::from_parts(image.width(), image.height(), data);

    debug!(
        width = image.width(),
        height = image.height(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "converted image to grayscale"
    );
    gray
}

/// Convert with the configured execution strategy.
///
/// Large rasters are processed row-parallel when the configuration allows
/// it. The values produced are bit-identical to [`convert_image`]; only the
/// scheduling differs, since no output cell depends on any other pixel.
pub fn convert_image_with(image: &RgbImage, config: &ConversionConfig) -> GrayImage {
    if config.parallel && image.pixel_count() >= config.parallel_min_pixels {
        convert_image_parallel(image)
    } else {
        convert_image(image)
    }
}

fn convert_image_parallel(image: &RgbImage) -> GrayImage {
    let start = Instant::now();
    let width = image.width();

    let mut data = vec![0.0; image.pixel_count()];
    data.par_chunks_mut(width)
        .zip(image.as_raw().par_chunks(width * CHANNELS))
        .for_each(|(out_row, in_row)| {
            for (out, px) in out_row.iter_mut().zip(in_row.chunks_exact(CHANNELS)) {
                *out = luminance(px[0], px[1], px[2]);
            }
        });
    let gray = GrayImage::from_parts(width, image.height(), data);

    debug!(
        width,
        height = image.height(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "converted image to grayscale (parallel)"
    );
    gray
}
