use swinggraph_core::sequencing::{analyze_sequence, sequencing_score, x_factor, IDEAL_GAP_S};
use swinggraph_core::AnalysisError;

#[test]
fn ideal_gaps_in_order_score_100() {
    assert_eq!(sequencing_score(IDEAL_GAP_S, IDEAL_GAP_S, IDEAL_GAP_S), 100.0);
}

#[test]
fn ideal_timestamps_score_100() {
    let seq = analyze_sequence(0.0, 0.05, 0.10, 0.15).unwrap();
    assert!((seq.score - 100.0).abs() < 1e-9);
    assert!((seq.hip_to_shoulder_s - 0.05).abs() < 1e-12);
}

#[test]
fn all_orderings_violated_clamps_to_zero() {
    // club → arm → shoulder → hip, ett sekund mellom hver
    let seq = analyze_sequence(3.0, 2.0, 1.0, 0.0).unwrap();
    assert_eq!(seq.score, 0.0);
}

#[test]
fn single_wrong_order_costs_order_and_timing_penalty() {
    // hofte og skulder bytter plass: gap -0.05 → -25 og -10
    let score = sequencing_score(-0.05, 0.05, 0.05);
    assert!((score - 65.0).abs() < 1e-9);
}

#[test]
fn timing_penalty_is_capped_per_gap() {
    // 0.5 s for sent: |0.5-0.05|×100 = 45 → kappet til 15
    let score = sequencing_score(0.5, 0.05, 0.05);
    assert!((score - 85.0).abs() < 1e-9);
}

#[test]
fn non_finite_timestamp_is_rejected() {
    let err = analyze_sequence(0.0, f64::NAN, 0.1, 0.15).unwrap_err();
    assert!(matches!(err, AnalysisError::OutOfRangeInput { field: "shoulder_start_s", .. }));
}

#[test]
fn x_factor_is_shoulder_minus_hip() {
    assert_eq!(x_factor(95.0, 45.0), 50.0);
    assert_eq!(x_factor(40.0, 45.0), -5.0);
}
