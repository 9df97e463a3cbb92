//! Fixed-shape raster buffers.
//!
//! Images are stored as flat row-major `f64` buffers with explicit `width`
//! and `height` fields, so shape invariants are checked once at construction
//! and hold for the lifetime of the value. The nested rows-of-pixels
//! representation used at the API boundary is validated on the way in.

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Number of channels in an RGB pixel.
pub const CHANNELS: usize = 3;

/// A rectangular RGB raster: `height` rows of `width` pixels, three `f64`
/// channel values per pixel, interleaved row-major.
///
/// Channel values carry no range constraint; values outside `[0, 255]`,
/// NaN and infinities are preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// A rectangular single-channel raster with one `f64` luminance value per
/// cell, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl RgbImage {
    /// Validate a nested rows-of-pixels candidate and pack it into a flat
    /// raster.
    ///
    /// Rejects an image with zero rows, a row with zero pixels, rows of
    /// differing lengths, and any pixel that does not hold exactly three
    /// channel values. Validation completes before the buffer is filled.
    pub fn from_rows(rows: &[Vec<Vec<f64>>]) -> Result<Self, ImageError> {
        let (height, width) = validate_rows(rows)?;

        let mut data = Vec::with_capacity(height * width * CHANNELS);
        for row in rows {
            for pixel in row {
                data.extend_from_slice(pixel);
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster from a flat row-major buffer of `width * height * 3`
    /// channel values.
    pub fn from_raw(width: usize, height: usize, data: Vec<f64>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage);
        }
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` of the raster.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Channel values of the pixel at `(row, col)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> [f64; 3] {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        let offset = (row * self.width + col) * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    /// Iterate over rows as flat slices of `width * 3` channel values.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width * CHANNELS)
    }

    /// Iterate over pixels as 3-value slices, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn as_raw(&self) -> &[f64] {
        &self.data
    }
}

impl GrayImage {
    /// Build a raster from a flat row-major buffer of `width * height`
    /// luminance values.
    pub fn from_raw(width: usize, height: usize, data: Vec<f64>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage);
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for buffers whose shape is already established.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` of the raster.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Luminance value of the cell at `(row, col)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.data[row * self.width + col]
    }

    /// Iterate over rows as slices of `width` luminance values.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width)
    }

    pub fn as_raw(&self) -> &[f64] {
        &self.data
    }

    /// Consume the raster into the nested rows-of-scalars representation.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.width)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Shape-check pass over the nested representation. Returns
/// `(height, width)` on success.
fn validate_rows(rows: &[Vec<Vec<f64>>]) -> Result<(usize, usize), ImageError> {
    if rows.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let width = rows[0].len();
    for (row_idx, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(ImageError::EmptyRow { row: row_idx });
        }
        if row.len() != width {
            return Err(ImageError::RaggedRows {
                row: row_idx,
                expected: width,
                got: row.len(),
            });
        }
        for (col_idx, pixel) in row.iter().enumerate() {
            if pixel.len() != CHANNELS {
                return Err(ImageError::InvalidChannelCount {
                    row: row_idx,
                    col: col_idx,
                    got: pixel.len(),
                });
            }
        }
    }

    Ok((rows.len(), width))
}
