//! Conversions between the crate's `f64` rasters and common buffer types.
//!
//! These are in-memory interop helpers only; decoding and encoding of image
//! file formats stays with the caller.

use image::{GrayImage as LumaBuffer, RgbImage as RgbBuffer};
use ndarray::{Array2, Array3};

use crate::error::ImageError;
use crate::raster::{GrayImage, RgbImage, CHANNELS};

/// Lift an 8-bit RGB buffer into the `f64` raster representation.
pub fn from_rgb8(buffer: &RgbBuffer) -> Result<RgbImage, ImageError> {
    let (width, height) = buffer.dimensions();
    let data = buffer.as_raw().iter().map(|&v| v as f64).collect();
    RgbImage::from_raw(width as usize, height as usize, data)
}

/// Export a grayscale raster as an 8-bit luma buffer.
///
/// This is a lossy export: values are rounded and clamped to `[0, 255]`,
/// and NaN cells map to 0.
pub fn to_luma8(gray: &GrayImage) -> anyhow::Result<LumaBuffer> {
    let data: Vec<u8> = gray
        .as_raw()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    LumaBuffer::from_raw(gray.width() as u32, gray.height() as u32, data)
        .ok_or_else(|| anyhow::anyhow!("Failed to create luma buffer from raster"))
}

/// View a grayscale raster as a `(height, width)` ndarray.
pub fn to_array2(gray: &GrayImage) -> anyhow::Result<Array2<f64>> {
    let (width, height) = gray.dimensions();
    Ok(Array2::from_shape_vec(
        (height, width),
        gray.as_raw().to_vec(),
    )?)
}

/// Build an RGB raster from a `(height, width, 3)` ndarray.
pub fn from_array3(array: &Array3<f64>) -> Result<RgbImage, ImageError> {
    let (height, width, channels) = array.dim();
    if height == 0 || width == 0 {
        return Err(ImageError::EmptyImage);
    }
    if channels != CHANNELS {
        return Err(ImageError::InvalidChannelCount {
            row: 0,
            col: 0,
            got: channels,
        });
    }

    // Iteration follows logical (row, col, channel) order regardless of the
    // array's memory layout.
    let data: Vec<f64> = array.iter().copied().collect();
    RgbImage::from_raw(width, height, data)
}
