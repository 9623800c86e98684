use image::GrayImage;
use imageproc::filter::laplacian_filter;
use tracing::debug;

use crate::models::TamperAssessment;

/// Estimate tampering from the density of sharp second-derivative edges.
///
/// Digital splicing tends to leave more high-frequency edges than a clean
/// photograph of a printed document; this is a coarse global proxy, not a
/// localized forgery detector.
pub fn scan(gray: &GrayImage, sharp_edge_threshold: u8, edge_ratio_threshold: f32) -> TamperAssessment {
    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return TamperAssessment::absent();
    }

    let response = laplacian_filter(gray);

    // Absolute response saturated into the 0-255 intensity range, then
    // masked at the sharp-edge threshold
    let sharp = response
        .pixels()
        .filter(|p| {
            let magnitude = (p[0] as i32).unsigned_abs().min(255);
            magnitude > sharp_edge_threshold as u32
        })
        .count() as u64;

    let edge_ratio = sharp as f32 / total as f32;

    debug!("sharp edge ratio {:.3}", edge_ratio);

    if edge_ratio > edge_ratio_threshold {
        TamperAssessment {
            detected: true,
            confidence: (edge_ratio * 500.0).round().min(100.0) as u8,
        }
    } else {
        TamperAssessment::absent()
    }
}
