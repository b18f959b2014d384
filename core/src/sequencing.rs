use crate::error::{ensure_finite, AnalysisResult};
use crate::models::SwingKinematics;
use crate::types::KinematicSequence;

/// Ideelt mellomrom mellom to påfølgende initieringer (sek).
pub const IDEAL_GAP_S: f64 = 0.05;
/// Trekk per gap i feil rekkefølge (negativt gap).
pub const ORDER_PENALTY: f64 = 25.0;
/// Maks timing-trekk per gap.
pub const MAX_TIMING_PENALTY: f64 = 15.0;

/// Sekvensscore 0..100 fra de tre gapene hofte→skulder→arm→kølle.
pub fn sequencing_score(hip_to_shoulder: f64, shoulder_to_arm: f64, arm_to_club: f64) -> f64 {
    let mut score = 100.0;
    for gap in [hip_to_shoulder, shoulder_to_arm, arm_to_club] {
        if gap < 0.0 {
            score -= ORDER_PENALTY;
        }
        score -= ((gap - IDEAL_GAP_S).abs() * 100.0).min(MAX_TIMING_PENALTY);
    }
    score.clamp(0.0, 100.0)
}

/// Bygg sekvensen fra fire initieringstidspunkt (sek fra svingstart).
pub fn analyze_sequence(
    hip_s: f64,
    shoulder_s: f64,
    arm_s: f64,
    club_s: f64,
) -> AnalysisResult<KinematicSequence> {
    let hip = ensure_finite("hip_start_s", hip_s)?;
    let shoulder = ensure_finite("shoulder_start_s", shoulder_s)?;
    let arm = ensure_finite("arm_start_s", arm_s)?;
    let club = ensure_finite("club_start_s", club_s)?;

    let hip_to_shoulder = shoulder - hip;
    let shoulder_to_arm = arm - shoulder;
    let arm_to_club = club - arm;

    Ok(KinematicSequence {
        hip_start_s: hip,
        shoulder_start_s: shoulder,
        arm_start_s: arm,
        club_start_s: club,
        hip_to_shoulder_s: hip_to_shoulder,
        shoulder_to_arm_s: shoulder_to_arm,
        arm_to_club_s: arm_to_club,
        score: sequencing_score(hip_to_shoulder, shoulder_to_arm, arm_to_club),
    })
}

pub fn sequence_from_kinematics(kin: &SwingKinematics) -> AnalysisResult<KinematicSequence> {
    analyze_sequence(kin.hip_start_s, kin.shoulder_start_s, kin.arm_start_s, kin.club_start_s)
}

/// X-factor: skulderrotasjon minus hofterotasjon (maks-vinkler, grader).
#[inline]
pub fn x_factor(shoulder_max_rotation: f64, hip_max_rotation: f64) -> f64 {
    shoulder_max_rotation - hip_max_rotation
}
