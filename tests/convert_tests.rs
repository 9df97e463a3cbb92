use image_grayscale::config::ConversionConfig;
use image_grayscale::{
    convert_image, convert_image_with, convert_to_gray, luminance, ImageError, RgbImage,
};

const TOLERANCE: f64 = 1e-10;

fn uniform_rows(height: usize, width: usize, pixel: [f64; 3]) -> Vec<Vec<Vec<f64>>> {
    vec![vec![pixel.to_vec(); width]; height]
}

fn gradient_rows(height: usize, width: usize) -> Vec<Vec<Vec<f64>>> {
    (0..height)
        .map(|r| {
            (0..width)
                .map(|c| {
                    let base = (r * width + c) as f64;
                    vec![base, base * 0.5, 255.0 - base]
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_reference_values() {
    let cases = [
        ([255.0, 0.0, 0.0], 76.245),
        ([0.0, 255.0, 0.0], 149.685),
        ([0.0, 0.0, 255.0], 29.07),
        ([255.0, 255.0, 255.0], 255.0),
    ];

    for (pixel, expected) in cases {
        let gray = convert_to_gray(&uniform_rows(1, 1, pixel)).unwrap();
        assert!(
            (gray.get(0, 0) - expected).abs() < TOLERANCE,
            "pixel {:?} produced {}, expected {}",
            pixel,
            gray.get(0, 0),
            expected
        );
    }
}

#[test]
fn test_output_shape_matches_input() {
    for (height, width) in [(1, 1), (3, 7), (16, 4)] {
        let gray = convert_to_gray(&gradient_rows(height, width)).unwrap();
        assert_eq!(gray.dimensions(), (width, height));
        assert_eq!(gray.pixel_count(), width * height);
    }
}

#[test]
fn test_every_cell_matches_formula() {
    let rows = gradient_rows(5, 9);
    let gray = convert_to_gray(&rows).unwrap();

    for (r, row) in rows.iter().enumerate() {
        for (c, pixel) in row.iter().enumerate() {
            let expected = 0.299 * pixel[0] + 0.587 * pixel[1] + 0.114 * pixel[2];
            assert!((gray.get(r, c) - expected).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_empty_image_is_rejected() {
    let rows: Vec<Vec<Vec<f64>>> = vec![];
    assert_eq!(convert_to_gray(&rows), Err(ImageError::EmptyImage));
}

#[test]
fn test_empty_row_is_rejected() {
    let rows: Vec<Vec<Vec<f64>>> = vec![vec![]];
    assert_eq!(convert_to_gray(&rows), Err(ImageError::EmptyRow { row: 0 }));
}

#[test]
fn test_ragged_rows_are_rejected() {
    let rows = vec![
        vec![vec![1.0, 2.0, 3.0]],
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
    ];
    assert_eq!(
        convert_to_gray(&rows),
        Err(ImageError::RaggedRows {
            row: 1,
            expected: 1,
            got: 2,
        })
    );
}

#[test]
fn test_wrong_channel_count_is_rejected() {
    let rows = vec![vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]];
    assert_eq!(
        convert_to_gray(&rows),
        Err(ImageError::InvalidChannelCount {
            row: 0,
            col: 1,
            got: 2,
        })
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let rows = gradient_rows(8, 8);
    let first = convert_to_gray(&rows).unwrap();
    let second = convert_to_gray(&rows).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_mutated() {
    let rows = gradient_rows(4, 4);
    let copy = rows.clone();
    convert_to_gray(&rows).unwrap();
    assert_eq!(rows, copy);
}

#[test]
fn test_linearity_under_channel_scaling() {
    let pixel = [12.0, 34.0, 56.0];
    let k = 2.5;
    let scaled = [pixel[0] * k, pixel[1] * k, pixel[2] * k];

    let base = convert_to_gray(&uniform_rows(1, 1, pixel)).unwrap();
    let lifted = convert_to_gray(&uniform_rows(1, 1, scaled)).unwrap();
    assert!((lifted.get(0, 0) - base.get(0, 0) * k).abs() < TOLERANCE);
}

#[test]
fn test_out_of_range_values_pass_through() {
    let gray = convert_to_gray(&uniform_rows(1, 1, [-100.0, 500.0, 0.25])).unwrap();
    let expected = luminance(-100.0, 500.0, 0.25);
    assert!((gray.get(0, 0) - expected).abs() < TOLERANCE);
}

#[test]
fn test_nan_and_infinity_propagate() {
    let gray = convert_to_gray(&uniform_rows(1, 2, [f64::NAN, 0.0, 0.0])).unwrap();
    assert!(gray.get(0, 0).is_nan());

    let gray = convert_to_gray(&uniform_rows(1, 1, [f64::INFINITY, 1.0, 1.0])).unwrap();
    assert!(gray.get(0, 0).is_infinite());
}

#[test]
fn test_parallel_path_matches_serial_path() {
    let rows = gradient_rows(32, 48);
    let image = RgbImage::from_rows(&rows).unwrap();

    let serial = convert_image(&image);
    let parallel = convert_image_with(
        &image,
        &ConversionConfig {
            parallel: true,
            parallel_min_pixels: 1,
        },
    );
    assert_eq!(serial, parallel);
}

#[test]
fn test_config_threshold_keeps_small_images_serial() {
    let rows = gradient_rows(2, 2);
    let image = RgbImage::from_rows(&rows).unwrap();

    let gray = convert_image_with(&image, &ConversionConfig::default());
    assert_eq!(gray, convert_image(&image));
}

#[test]
fn test_nested_output_representation() {
    let rows = gradient_rows(3, 2);
    let nested = convert_to_gray(&rows).unwrap().into_rows();

    assert_eq!(nested.len(), 3);
    assert!(nested.iter().all(|row| row.len() == 2));
    let expected = 0.299 * rows[2][1][0] + 0.587 * rows[2][1][1] + 0.114 * rows[2][1][2];
    assert!((nested[2][1] - expected).abs() < TOLERANCE);
}
