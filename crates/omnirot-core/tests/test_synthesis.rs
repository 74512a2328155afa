mod common;

use omnirot_core::math::Mat3;
use omnirot_core::rotation::GazeFraming;
use omnirot_core::sampler::fetch_pixel;
use omnirot_core::sphere::Equirect;
use omnirot_core::synthesis::{remap, synthesize_gaze, synthesize_rotated};

use common::{azimuth_pattern, textured_raster, TEST_HEIGHT, TEST_WIDTH};

#[test]
fn test_zero_rotation_is_identity() {
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let out = synthesize_rotated(&img, 0.0);
    assert_eq!(out, img);
}

#[test]
fn test_zero_rotation_is_identity_parallel() {
    let img = textured_raster(720, 360, 3);
    assert_eq!(synthesize_rotated(&img, 0.0), img);
}

#[test]
fn test_identity_remap_keeps_alpha() {
    let img = textured_raster(64, 32, 4);
    let out = remap(&img, &Mat3::identity());
    assert_eq!(out.channels(), 4);
    assert_eq!(out, img);
}

#[test]
fn test_whole_degree_rotation_shifts_columns() {
    // On a 360-wide image a 5 degree turn is a 5 pixel shift.
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let out = synthesize_rotated(&img, 5.0);
    for row in 1..TEST_HEIGHT {
        for col in 0..TEST_WIDTH - 5 {
            assert_eq!(
                out.rgb(col, row),
                img.rgb(col + 5, row),
                "mismatch at ({col}, {row})"
            );
        }
    }
}

#[test]
fn test_rotation_wraps_across_seam() {
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let out = synthesize_rotated(&img, -10.0);
    for row in [30, 90, 150] {
        for col in 11..20 {
            assert_eq!(out.rgb(col, row), img.rgb(col - 10, row));
        }
        // Columns 1..10 come from the far right of the input.
        for col in 1..10 {
            assert_eq!(out.rgb(col, row), img.rgb(TEST_WIDTH + col - 10, row));
        }
    }
}

#[test]
fn test_rotations_compose() {
    let img = azimuth_pattern(TEST_WIDTH, TEST_HEIGHT);
    let twice = synthesize_rotated(&synthesize_rotated(&img, 3.0), 4.0);
    let once = synthesize_rotated(&img, 7.0);
    for row in [45, 90, 135] {
        for col in 0..300 {
            assert_eq!(twice.rgb(col, row), once.rgb(col, row));
        }
    }
}

#[test]
fn test_gaze_image_is_centered_on_gaze_point() {
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let g = Equirect::new(TEST_WIDTH, TEST_HEIGHT);
    let (u_g, v_g) = (100, 70);

    let framing = GazeFraming::SinglePoint {
        gaze: g.pixel_to_world(u_g as f64, v_g as f64),
    };
    let out = synthesize_gaze(&img, &framing);
    assert_eq!(
        out.rgb(TEST_WIDTH / 2, TEST_HEIGHT / 2),
        fetch_pixel(&img, u_g as i64, v_g as i64)
    );
}

#[test]
fn test_two_point_gaze_image_is_centered() {
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let g = Equirect::new(TEST_WIDTH, TEST_HEIGHT);
    let framing = GazeFraming::TwoPoint {
        gaze: g.pixel_to_world(250.0, 100.0),
        auxiliary: g.pixel_to_world(260.0, 100.0),
    };
    let out = synthesize_gaze(&img, &framing);
    assert_eq!(out.rgb(TEST_WIDTH / 2, TEST_HEIGHT / 2), img.rgb(250, 100));
}

#[test]
fn test_forward_gaze_is_identity() {
    let img = textured_raster(TEST_WIDTH, TEST_HEIGHT, 3);
    let g = Equirect::new(TEST_WIDTH, TEST_HEIGHT);
    let framing = GazeFraming::SinglePoint {
        gaze: g.pixel_to_world(180.0, 90.0),
    };
    let out = synthesize_gaze(&img, &framing);
    for row in 10..170 {
        for col in 10..350 {
            assert_eq!(out.rgb(col, row), img.rgb(col, row));
        }
    }
}
