pub mod boundary;
pub mod mrz;
pub mod preprocessing;
pub mod scorer;
pub mod tamper;
pub mod uv;

use image::DynamicImage;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisResult, MrzAssessment, TamperAssessment};
use mrz::{TextBandClassifier, WhiteRatioClassifier};
use uv::{SimulatedUvCheck, UvFeatureCheck};

/// Main document analysis orchestrator
///
/// Holds all tunable heuristic thresholds; none of them have a stated
/// calibration basis, so callers may override any of them. The analyzer
/// keeps no per-call state and is safe to share across threads.
pub struct DocumentAnalyzer {
    /// Canny low threshold on the 0-255 intensity scale
    pub canny_low: f32,
    /// Canny high threshold on the 0-255 intensity scale
    pub canny_high: f32,
    /// Minimum contour area as a fraction of the frame area
    pub min_area_ratio: f32,
    /// Polygon approximation tolerance as a fraction of the perimeter
    pub poly_epsilon_ratio: f64,
    /// Height of the MRZ candidate band as a fraction of the document height
    pub band_height_ratio: f32,
    /// Laplacian magnitude above which a pixel counts as a sharp edge
    pub sharp_edge_threshold: u8,
    /// Sharp-edge ratio above which alterations are flagged
    pub tamper_edge_ratio: f32,
    /// Render the annotated debug copy of the input
    pub annotate: bool,

    band_classifier: Box<dyn TextBandClassifier>,
    uv_check: Box<dyn UvFeatureCheck>,
}

impl DocumentAnalyzer {
    pub fn new() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 150.0,
            min_area_ratio: 0.2,
            poly_epsilon_ratio: 0.02,
            band_height_ratio: 0.2,
            sharp_edge_threshold: 50,
            tamper_edge_ratio: 0.1,
            annotate: false,
            band_classifier: Box::new(WhiteRatioClassifier::default()),
            uv_check: Box::new(SimulatedUvCheck),
        }
    }

    pub fn with_annotation(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    pub fn with_band_classifier(mut self, classifier: Box<dyn TextBandClassifier>) -> Self {
        self.band_classifier = classifier;
        self
    }

    pub fn with_uv_check(mut self, uv_check: Box<dyn UvFeatureCheck>) -> Self {
        self.uv_check = uv_check;
        self
    }

    /// Run the full analysis pipeline on one image.
    ///
    /// Each call is a pure function of its input; a missing document is a
    /// legitimate terminal result, not an error.
    pub fn analyze(&self, img: &DynamicImage) -> Result<AnalysisResult> {
        if img.width() == 0 || img.height() == 0 {
            return Err(AnalysisError::EmptyImage);
        }

        let gray = preprocessing::to_grayscale(img);

        let boundary = boundary::detect(
            &gray,
            self.canny_low,
            self.canny_high,
            self.min_area_ratio,
            self.poly_epsilon_ratio,
        );

        // The band heuristic is only meaningful on a rectangular document
        let mrz = match boundary.region {
            Some(region) if boundary.is_rectangular => mrz::locate(
                &gray,
                region,
                self.band_height_ratio,
                self.band_classifier.as_ref(),
            ),
            _ => MrzAssessment::absent(),
        };

        let alterations = if boundary.document_detected {
            tamper::scan(&gray, self.sharp_edge_threshold, self.tamper_edge_ratio)
        } else {
            TamperAssessment::absent()
        };

        let uv_features_detected = self
            .uv_check
            .detect(None, boundary.document_detected);

        let overall_authenticity = scorer::authenticity_score(
            boundary.document_detected,
            mrz.detected,
            mrz.confidence,
            uv_features_detected,
            alterations.detected,
            alterations.confidence,
        );

        debug!(
            "analysis complete: document={} mrz={} uv={} alterations={} score={}",
            boundary.document_detected,
            mrz.detected,
            uv_features_detected,
            alterations.detected,
            overall_authenticity
        );

        let debug_image = if self.annotate {
            Some(boundary::annotate(&img.to_rgb8(), &boundary))
        } else {
            None
        };

        Ok(AnalysisResult {
            document_detected: boundary.document_detected,
            mrz_detected: mrz.detected,
            mrz_confidence: mrz.confidence,
            uv_features_detected,
            alterations_detected: alterations.detected,
            alterations_confidence: alterations.confidence,
            overall_authenticity,
            debug_image,
        })
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
