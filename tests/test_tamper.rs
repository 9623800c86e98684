mod common;

use docforensics::TamperAssessment;
use docforensics::analysis::tamper;
use image::{GrayImage, Luma};

#[test]
fn smooth_image_shows_no_alterations() {
    let gray = GrayImage::from_pixel(200, 200, Luma([128]));
    let result = tamper::scan(&gray, 50, 0.1);

    assert_eq!(result, TamperAssessment::absent());
}

#[test]
fn dense_high_frequency_texture_is_flagged() {
    let result = tamper::scan(&common::checkerboard(200, 200), 50, 0.1);

    assert!(result.detected);
    // Nearly every pixel is a sharp edge: ratio * 500 saturates at 100
    assert_eq!(result.confidence, 100);
}

#[test]
fn edge_ratio_threshold_is_configurable() {
    let board = common::checkerboard(200, 200);

    // An unreachable ratio threshold disables detection on the same input
    let result = tamper::scan(&board, 50, 2.0);
    assert_eq!(result, TamperAssessment::absent());
}

#[test]
fn confidence_is_zero_whenever_not_detected() {
    let gray = GrayImage::from_pixel(64, 64, Luma([200]));
    let result = tamper::scan(&gray, 50, 0.1);

    assert!(!result.detected);
    assert_eq!(result.confidence, 0);
}
