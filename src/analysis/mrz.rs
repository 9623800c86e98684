use image::GrayImage;
use image::imageops::crop_imm;
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use tracing::debug;

use crate::models::{DocumentRegion, MrzAssessment};

/// Scores how text-like a candidate MRZ band looks.
///
/// The default implementation is a pixel-density heuristic; a real OCR
/// backend can be swapped in without touching the scorer.
pub trait TextBandClassifier: Send + Sync {
    fn classify(&self, band: &GrayImage) -> MrzAssessment;

    fn name(&self) -> &str;
}

/// Binarizes the band with an Otsu threshold and accepts it when the white
/// pixel ratio falls in the range typical of printed machine-readable text.
pub struct WhiteRatioClassifier {
    pub min_white_ratio: f32,
    pub max_white_ratio: f32,
}

impl Default for WhiteRatioClassifier {
    fn default() -> Self {
        Self {
            min_white_ratio: 0.2,
            max_white_ratio: 0.5,
        }
    }
}

impl TextBandClassifier for WhiteRatioClassifier {
    fn classify(&self, band: &GrayImage) -> MrzAssessment {
        let total = band.width() as u64 * band.height() as u64;
        if total == 0 {
            return MrzAssessment::absent();
        }

        let level = otsu_level(band);
        let binary = threshold(band, level, ThresholdType::Binary);

        let white = binary.pixels().filter(|p| p[0] > 0).count() as u64;
        let white_ratio = white as f32 / total as f32;

        debug!("mrz band white ratio {:.3} (otsu level {})", white_ratio, level);

        if white_ratio >= self.min_white_ratio && white_ratio <= self.max_white_ratio {
            MrzAssessment {
                detected: true,
                confidence: (white_ratio * 200.0).round().min(100.0) as u8,
            }
        } else {
            MrzAssessment::absent()
        }
    }

    fn name(&self) -> &str {
        "White Ratio Classifier"
    }
}

/// Crop the lower band of the document region and classify it.
///
/// Only meaningful for rectangular documents; callers skip this stage
/// entirely when the boundary was not rectangular.
pub fn locate(
    gray: &GrayImage,
    region: DocumentRegion,
    band_height_ratio: f32,
    classifier: &dyn TextBandClassifier,
) -> MrzAssessment {
    let band_height = (region.height as f32 * band_height_ratio) as u32;
    if region.is_empty() || band_height == 0 {
        return MrzAssessment::absent();
    }

    // The MRZ sits in the bottom band of the document
    let band_y = region.y + region.height - band_height;
    let band = crop_imm(gray, region.x, band_y, region.width, band_height).to_image();

    classifier.classify(&band)
}
