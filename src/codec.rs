use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::DynamicImage;

use crate::error::{AnalysisError, Result};

/// Decode a base64 image payload into a pixel buffer.
///
/// A data-URI scheme tag (`data:image/png;base64,...`) is stripped at the
/// first comma before decoding; ASCII whitespace in the payload is ignored.
pub fn decode_image_payload(payload: &str) -> Result<DynamicImage> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::invalid_input("empty image payload"));
    }

    let raw = match trimmed.split_once(',') {
        Some((_, data)) => data,
        None => trimmed,
    };
    let cleaned: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| AnalysisError::invalid_input(format!("invalid base64: {e}")))?;

    Ok(image::load_from_memory(&bytes)?)
}
