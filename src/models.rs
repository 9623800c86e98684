use image::RgbImage;
use imageproc::geometry::arc_length;
use imageproc::point::Point;
use serde::Serialize;

/// Closed boundary traced in a binary edge image
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Enclosed area via the shoelace formula
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let mut sum: i64 = 0;
        for i in 0..self.points.len() {
            let p = self.points[i];
            let q = self.points[(i + 1) % self.points.len()];
            sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
        }

        sum.abs() as f64 / 2.0
    }

    /// Closed arc length of the boundary
    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points, true)
    }

    /// Axis-aligned bounding box, clamped to the source image bounds
    pub fn bounding_box(&self, image_width: u32, image_height: u32) -> DocumentRegion {
        if self.points.is_empty() || image_width == 0 || image_height == 0 {
            return DocumentRegion { x: 0, y: 0, width: 0, height: 0 };
        }

        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;

        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let min_x = min_x.clamp(0, image_width as i32 - 1) as u32;
        let min_y = min_y.clamp(0, image_height as i32 - 1) as u32;
        let max_x = max_x.clamp(0, image_width as i32 - 1) as u32;
        let max_y = max_y.clamp(0, image_height as i32 - 1) as u32;

        DocumentRegion {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }
}

/// Axis-aligned bounding box of an accepted document contour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DocumentRegion {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Output of the boundary detection stage
#[derive(Debug, Clone)]
pub struct BoundaryAnalysis {
    pub document_detected: bool,
    pub region: Option<DocumentRegion>,
    pub is_rectangular: bool,
    pub contour: Option<Contour>,
    /// Perimeter-proportional polygon approximation of the accepted contour
    pub vertices: Vec<Point<i32>>,
}

impl BoundaryAnalysis {
    /// Absence of a document is a first-class result, not an error
    pub fn not_detected() -> Self {
        Self {
            document_detected: false,
            region: None,
            is_rectangular: false,
            contour: None,
            vertices: Vec::new(),
        }
    }
}

/// Output of the MRZ band classification stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MrzAssessment {
    pub detected: bool,
    pub confidence: u8,
}

impl MrzAssessment {
    pub fn absent() -> Self {
        Self { detected: false, confidence: 0 }
    }
}

/// Output of the tamper detection stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TamperAssessment {
    pub detected: bool,
    pub confidence: u8,
}

impl TamperAssessment {
    pub fn absent() -> Self {
        Self { detected: false, confidence: 0 }
    }
}

/// Aggregate result of one document analysis
///
/// The annotated debug image rides along for the shell's optional
/// persistence but is never serialized into a response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub document_detected: bool,
    pub mrz_detected: bool,
    pub mrz_confidence: u8,
    pub uv_features_detected: bool,
    pub alterations_detected: bool,
    pub alterations_confidence: u8,
    pub overall_authenticity: u8,
    #[serde(skip)]
    pub debug_image: Option<RgbImage>,
}
