/// Combine all heuristic signals into a single authenticity score in [0, 100].
///
/// Deterministic and pure. The alteration penalty is applied after the
/// additive bonuses, so a detected document can still score exactly 0; the
/// two zero paths stay distinguishable via `document_detected`.
pub fn authenticity_score(
    document_detected: bool,
    mrz_detected: bool,
    mrz_confidence: u8,
    uv_features_detected: bool,
    alterations_detected: bool,
    alterations_confidence: u8,
) -> u8 {
    if !document_detected {
        return 0;
    }

    let mut score = 50.0f32;

    if mrz_detected {
        // Up to 40 points: 20 for the band plus up to 20 for its confidence
        score += 20.0 + f32::from(mrz_confidence) * 0.2;
    }

    if uv_features_detected {
        score += 15.0;
    }

    if alterations_detected {
        let penalty = (f32::from(alterations_confidence) * 0.5).min(50.0);
        score = (score - penalty).max(0.0);
    }

    score.min(100.0) as u8
}
