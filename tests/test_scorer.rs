use docforensics::analysis::scorer::authenticity_score;

#[test]
fn no_document_scores_zero_regardless_of_other_signals() {
    assert_eq!(authenticity_score(false, false, 0, false, false, 0), 0);
    assert_eq!(authenticity_score(false, true, 100, true, false, 0), 0);
}

#[test]
fn bare_document_scores_the_base_fifty() {
    assert_eq!(authenticity_score(true, false, 0, false, false, 0), 50);
}

#[test]
fn mrz_and_uv_bonuses_add_up() {
    // 50 + (20 + 0.2 * 70) + 15
    assert_eq!(authenticity_score(true, true, 70, true, false, 0), 99);
    // Full MRZ confidence pushes past 100 and clamps
    assert_eq!(authenticity_score(true, true, 100, true, false, 0), 100);
}

#[test]
fn alteration_penalty_is_applied_after_bonuses() {
    // 99 minus the capped 50-point penalty
    assert_eq!(authenticity_score(true, true, 70, true, true, 100), 49);
}

#[test]
fn fully_penalized_document_can_reach_zero_while_detected() {
    // 50 - min(50, 0.5 * 100) = 0, with document_detected still true
    assert_eq!(authenticity_score(true, false, 0, false, true, 100), 0);
}

#[test]
fn score_is_deterministic() {
    for _ in 0..10 {
        assert_eq!(authenticity_score(true, true, 42, true, true, 33), authenticity_score(true, true, 42, true, true, 33));
    }
}

#[test]
fn score_stays_within_bounds_over_the_input_grid() {
    for &doc in &[false, true] {
        for &mrz in &[false, true] {
            for mrz_conf in (0..=100).step_by(10) {
                for &uv in &[false, true] {
                    for &alt in &[false, true] {
                        for alt_conf in (0..=100).step_by(10) {
                            let score = authenticity_score(doc, mrz, mrz_conf, uv, alt, alt_conf);
                            assert!(score <= 100);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn higher_mrz_confidence_never_lowers_the_score() {
    let mut previous = 0;
    for conf in 0..=100 {
        let score = authenticity_score(true, true, conf, false, false, 0);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn higher_alteration_confidence_never_raises_the_score() {
    let mut previous = u8::MAX;
    for conf in 0..=100 {
        let score = authenticity_score(true, true, 70, true, true, conf);
        assert!(score <= previous);
        previous = score;
    }
}
