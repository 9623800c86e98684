use image::GrayImage;

/// Detects UV security features on a document.
///
/// The pipeline has no UV-spectrum capture, so the check receives an
/// optional UV channel; implementations backed by real sensor input can be
/// injected without altering the scorer's contract.
pub trait UvFeatureCheck: Send + Sync {
    fn detect(&self, uv_channel: Option<&GrayImage>, document_detected: bool) -> bool;

    fn name(&self) -> &str;
}

/// Simulation placeholder: no UV capture exists, so the flag simply mirrors
/// document detection.
pub struct SimulatedUvCheck;

impl UvFeatureCheck for SimulatedUvCheck {
    fn detect(&self, _uv_channel: Option<&GrayImage>, document_detected: bool) -> bool {
        document_detected
    }

    fn name(&self) -> &str {
        "Simulated UV Check"
    }
}
