use serde::Serialize;

use crate::models::AnalysisResult;

/// Pixel dimensions of the analyzed image
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Success envelope returned by the shell
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub message: String,
    pub document_dimensions: Dimensions,
    pub results: AnalysisResult,
}

impl AnalysisResponse {
    pub fn success(width: u32, height: u32, results: AnalysisResult) -> Self {
        Self {
            status: "success",
            message: "Forensic analysis completed".to_string(),
            document_dimensions: Dimensions { width, height },
            results,
        }
    }
}

/// Error envelope returned by the shell
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
