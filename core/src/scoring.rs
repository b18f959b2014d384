use crate::error::{ensure_percent, ensure_unit, AnalysisError, AnalysisResult};
use crate::types::{ScoreBreakdown, SubScores};

/// Faste vekter for de fem delscorene. Summerer til 1.0.
pub const SCORE_WEIGHTS: SubScores = SubScores {
    tempo: 0.20,
    plane: 0.25,
    kinematics: 0.25,
    impact: 0.20,
    consistency: 0.10,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Karaktertabell: nedre grense (inklusiv) → bokstav, synkende.
pub const GRADE_TABLE: [(f64, &str); 11] = [
    (90.0, "A+"),
    (85.0, "A"),
    (80.0, "A-"),
    (75.0, "B+"),
    (70.0, "B"),
    (65.0, "B-"),
    (60.0, "C+"),
    (55.0, "C"),
    (50.0, "C-"),
    (45.0, "D+"),
    (40.0, "D"),
];

pub const STRONG_AREA_MIN: f64 = 80.0;
pub const WEAK_AREA_MAX: f64 = 70.0;

impl SubScores {
    pub fn sum(&self) -> f64 {
        self.tempo + self.plane + self.kinematics + self.impact + self.consistency
    }

    /// Vektet sum mot `weights`.
    pub fn weighted(&self, weights: &SubScores) -> f64 {
        weights.tempo * self.tempo
            + weights.plane * self.plane
            + weights.kinematics * self.kinematics
            + weights.impact * self.impact
            + weights.consistency * self.consistency
    }
}

/// Sjekk at hver vekt ligger i [0, 1] og at summen er 1.0.
pub fn validate_weights(weights: &SubScores) -> AnalysisResult<()> {
    ensure_unit("weights.tempo", weights.tempo)?;
    ensure_unit("weights.plane", weights.plane)?;
    ensure_unit("weights.kinematics", weights.kinematics)?;
    ensure_unit("weights.impact", weights.impact)?;
    ensure_unit("weights.consistency", weights.consistency)?;
    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(AnalysisError::out_of_range("weights.sum", sum, "1.0"));
    }
    Ok(())
}

/// Bokstavkarakter som trappefunksjon av totalscoren.
pub fn letter_grade(overall: f64) -> &'static str {
    GRADE_TABLE
        .iter()
        .find(|(min, _)| overall >= *min)
        .map(|(_, g)| *g)
        .unwrap_or("F")
}

/// Sterkeste og svakeste område; første forekomst i fast rekkefølge vinner ved likhet.
fn strongest_and_weakest(scores: &SubScores) -> ((&'static str, f64), (&'static str, f64)) {
    let named = scores.named();
    let mut best = named[0];
    let mut worst = named[0];
    for entry in &named[1..] {
        if entry.1 > best.1 { best = *entry; }
        if entry.1 < worst.1 { worst = *entry; }
    }
    (best, worst)
}

pub fn feedback_text(scores: &SubScores, overall: f64, grade: &str) -> String {
    let mut parts = vec![format!("Grade {} ({:.1}%).", grade, overall)];
    let (best, worst) = strongest_and_weakest(scores);
    if best.1 >= STRONG_AREA_MIN {
        parts.push(format!("Strongest area: {} ({:.0}).", best.0, best.1));
    }
    if worst.1 < WEAK_AREA_MAX {
        parts.push(format!("Needs work: {} ({:.0}).", worst.0, worst.1));
    }
    parts.join(" ")
}

/// Kombiner delscorene til total, karakter og tilbakemelding.
pub fn aggregate_scores(scores: SubScores, weights: Option<&SubScores>) -> AnalysisResult<ScoreBreakdown> {
    ensure_percent("tempo", scores.tempo)?;
    ensure_percent("plane", scores.plane)?;
    ensure_percent("kinematics", scores.kinematics)?;
    ensure_percent("impact", scores.impact)?;
    ensure_percent("consistency", scores.consistency)?;

    let weights = *weights.unwrap_or(&SCORE_WEIGHTS);
    validate_weights(&weights)?;

    // konveks kombinasjon; clamp tar bort avrundingsstøy rundt 0 og 100
    let overall = scores.weighted(&weights).clamp(0.0, 100.0);
    let grade = letter_grade(overall);

    Ok(ScoreBreakdown {
        scores,
        weights,
        overall_score: overall,
        grade: grade.to_string(),
        feedback: feedback_text(&scores, overall, grade),
    })
}

/// ----- Utledning av delscorer -----

/// Plan-score fra klassifiseringen.
pub fn plane_score(label: &str, confidence: f64) -> f64 {
    if label == "on_plane" {
        70.0 + 30.0 * confidence
    } else {
        70.0 - 40.0 * confidence
    }
}

/// Impact-score fra smash factor (1.5 ≈ maks).
pub fn impact_score(smash_factor: f64) -> f64 {
    if smash_factor.is_finite() { (smash_factor / 1.5 * 100.0).clamp(0.0, 100.0) } else { 0.0 }
}

/// Konsistens uten repeterte svinger: utledet fra klassifiseringens konfidensgap.
pub fn consistency_score(confidence_gap: f64) -> f64 {
    (100.0 * (1.0 - confidence_gap)).clamp(50.0, 100.0)
}
