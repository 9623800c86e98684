use image::{GrayImage, Rgb, RgbImage};
use imageproc::contours::{BorderType, find_contours};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::geometry::approximate_polygon_dp;
use tracing::debug;

use crate::analysis::preprocessing;
use crate::models::{BoundaryAnalysis, Contour};

const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const VERTEX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const VERTEX_RADIUS: i32 = 10;

/// Locate the document's outer boundary in a grayscale image.
///
/// Absence of a usable contour is a valid outcome; this stage never fails.
pub fn detect(
    gray: &GrayImage,
    canny_low: f32,
    canny_high: f32,
    min_area_ratio: f32,
    poly_epsilon_ratio: f64,
) -> BoundaryAnalysis {
    let edges = preprocessing::detect_edges(gray, canny_low, canny_high);
    let candidates = external_contours(&edges);

    debug!("found {} external contours", candidates.len());

    let Some(largest) = candidates
        .into_iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
    else {
        return BoundaryAnalysis::not_detected();
    };

    let image_area = gray.width() as f64 * gray.height() as f64;
    let area = largest.area();

    // A contour filling less than the configured share of the frame is
    // treated as noise rather than the target document.
    if area < min_area_ratio as f64 * image_area {
        debug!(
            "largest contour covers {:.1}% of frame, below threshold",
            100.0 * area / image_area
        );
        return BoundaryAnalysis::not_detected();
    }

    let epsilon = poly_epsilon_ratio * largest.perimeter();
    let vertices = approximate_polygon_dp(&largest.points, epsilon, true);
    let is_rectangular = vertices.len() == 4;
    let region = largest.bounding_box(gray.width(), gray.height());

    debug!(
        "document boundary accepted: {} vertices, region {}x{} at ({}, {})",
        vertices.len(),
        region.width,
        region.height,
        region.x,
        region.y
    );

    BoundaryAnalysis {
        document_detected: true,
        region: Some(region),
        is_rectangular,
        contour: Some(largest),
        vertices,
    }
}

/// Outer boundaries only, no nested holes
fn external_contours(edges: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| Contour::new(c.points))
        .collect()
}

/// Draw the accepted contour and its approximated vertices onto a copy of
/// the source image. The copy is only ever persisted for debugging.
pub fn annotate(image: &RgbImage, boundary: &BoundaryAnalysis) -> RgbImage {
    let mut canvas = image.clone();

    if let Some(contour) = &boundary.contour {
        for p in &contour.points {
            draw_filled_circle_mut(&mut canvas, (p.x, p.y), 1, CONTOUR_COLOR);
        }
    }

    for v in &boundary.vertices {
        draw_filled_circle_mut(&mut canvas, (v.x, v.y), VERTEX_RADIUS, VERTEX_COLOR);
    }

    canvas
}
