//! Luminance-weighted RGB to grayscale conversion.
//!
//! Converts a rectangular RGB raster into a single-channel grayscale raster
//! with `gray = 0.299*R + 0.587*G + 0.114*B`, applied independently per
//! pixel in full `f64` precision. Candidate images are validated up front:
//! an empty image, an empty or ragged row, or a pixel without exactly three
//! channel values is rejected with an [`ImageError`] before any arithmetic
//! runs.
//!
//! ```
//! use image_grayscale::convert_to_gray;
//!
//! let image = vec![vec![vec![255.0, 0.0, 0.0], vec![0.0, 255.0, 0.0]]];
//! let gray = convert_to_gray(&image).unwrap();
//! assert_eq!(gray.dimensions(), (2, 1));
//! assert!((gray.get(0, 0) - 76.245).abs() < 1e-10);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod raster;
pub mod utils;

pub use convert::{convert_image, convert_image_with, convert_to_gray, luminance};
pub use error::ImageError;
pub use raster::{GrayImage, RgbImage};
