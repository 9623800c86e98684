pub mod analysis;
pub mod codec;
pub mod debug;
pub mod error;
pub mod models;
pub mod response;

pub use analysis::DocumentAnalyzer;
pub use analysis::mrz::{TextBandClassifier, WhiteRatioClassifier};
pub use analysis::uv::{SimulatedUvCheck, UvFeatureCheck};
pub use error::{AnalysisError, Result};
pub use models::{
    AnalysisResult, BoundaryAnalysis, Contour, DocumentRegion, MrzAssessment, TamperAssessment,
};
pub use response::{AnalysisResponse, Dimensions, ErrorResponse};
