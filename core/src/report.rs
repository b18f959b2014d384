use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{debug, info, warn};
use ordered_float::OrderedFloat;

use crate::config::AnalysisConfig;
use crate::error::{ensure_percent, ensure_unit, AnalysisError, AnalysisResult};
use crate::models::{ClassificationResult, PhaseBoundaries, SwingCapture};
use crate::phases::{detect_boundaries, tempo_score};
use crate::physics::{analyze_energy, compute_physics, force_vectors};
use crate::quality::{assess_tracking_quality, TrackingQualityInputs};
use crate::scoring::{aggregate_scores, consistency_score, impact_score, plane_score};
use crate::sequencing::sequence_from_kinematics;
use crate::suggestions::generate_suggestions;
use crate::telemetry::AnalysisMetrics;
use crate::types::{
    KinematicSequence, PhaseDurations, PhysicsMetrics, SubScores, SwingPhases, SwingReport,
};

/// Avvis ufullstendige eller ugyldige opptak før noe beregnes.
pub fn validate_capture(capture: &SwingCapture, config: &AnalysisConfig) -> AnalysisResult<()> {
    let meta = &capture.meta;
    if !(meta.frame_rate.is_finite() && meta.frame_rate > 0.0) {
        return Err(AnalysisError::InvalidCapture(format!(
            "frame rate must be positive, got {}",
            meta.frame_rate
        )));
    }
    if capture.samples.len() < config.min_frames {
        return Err(AnalysisError::InvalidCapture(format!(
            "capture has {} frames, at least {} required",
            capture.samples.len(),
            config.min_frames
        )));
    }
    if capture.samples.len() != meta.frame_count {
        return Err(AnalysisError::InvalidCapture(format!(
            "partial capture: {} of {} frames recorded",
            capture.samples.len(),
            meta.frame_count
        )));
    }
    if let Some(w) = capture.samples.windows(2).find(|w| w[1].frame < w[0].frame) {
        return Err(AnalysisError::InvalidCapture(format!(
            "frame indices are not monotonic ({} after {})",
            w[1].frame, w[0].frame
        )));
    }
    for s in &capture.samples {
        ensure_unit("club_confidence", s.club_confidence)?;
        for c in s.joint_confidence.values() {
            ensure_unit("joint_confidence", *c)?;
        }
    }
    let env = meta.environment;
    ensure_unit("environment.lighting", env.lighting)?;
    ensure_unit("environment.camera_stability", env.camera_stability)?;
    ensure_unit("environment.resolution", env.resolution)?;
    Ok(())
}

pub fn validate_classification(c: &ClassificationResult) -> AnalysisResult<()> {
    ensure_unit("classification.confidence", c.confidence)?;
    ensure_unit("classification.confidence_gap", c.confidence_gap)?;
    if let Some(t) = &c.tempo {
        ensure_percent("classification.tempo.score", t.score)?;
    }
    if let Some(i) = &c.impact {
        ensure_percent("classification.impact.score", i.score)?;
    }
    Ok(())
}

/// Delscorene for én sving. Klassifiseringens under-analyser vinner når de finnes.
pub fn derive_sub_scores(
    durations: &PhaseDurations,
    sequence: &KinematicSequence,
    physics: &PhysicsMetrics,
    classification: &ClassificationResult,
) -> SubScores {
    SubScores {
        tempo: classification
            .tempo
            .as_ref()
            .map(|t| t.score)
            .unwrap_or_else(|| tempo_score(durations.tempo_ratio)),
        plane: plane_score(&classification.label, classification.confidence),
        kinematics: sequence.score,
        impact: classification
            .impact
            .as_ref()
            .map(|i| i.score)
            .unwrap_or_else(|| impact_score(physics.smash_factor)),
        consistency: consistency_score(classification.confidence_gap),
    }
}

impl SwingReport {
    /// Bygg rapporten for ett (capture, klassifisering)-par.
    /// Ren funksjon: samme input gir bit-identisk rapport.
    pub fn assemble(
        capture: &SwingCapture,
        classification: Option<&ClassificationResult>,
        config: &AnalysisConfig,
    ) -> AnalysisResult<SwingReport> {
        // 0️⃣ Validering før beregning
        config.validate()?;
        validate_capture(capture, config)?;
        let classification = classification.ok_or_else(|| {
            AnalysisError::MissingUpstreamResult("swing-plane classification".into())
        })?;
        validate_classification(classification)?;

        // 1️⃣ Fysikk + energi + krefter
        let physics = compute_physics(&capture.kinematics)?;
        let energy = analyze_energy(physics.club_head_speed_mph, capture.kinematics.ball_speed_mph)?;
        let forces = force_vectors(physics.club_head_speed_ms);

        // 2️⃣ Sekvensering
        let sequence = sequence_from_kinematics(&capture.kinematics)?;

        // 3️⃣ Faser (levert eller utledet fra køllehode-banen)
        let boundaries = match capture.phases {
            Some(b) => b,
            None => detect_boundaries(&capture.samples)?,
        };
        let phases = SwingPhases::new(boundaries, capture.samples.len(), capture.meta.frame_rate)?;
        let durations = phases.durations();

        // 4️⃣ Sporingskvalitet
        let tracking = assess_tracking_quality(&TrackingQualityInputs::from_capture(capture))?;

        // 5️⃣ Score + forslag
        let sub_scores = derive_sub_scores(&durations, &sequence, &physics, classification);
        let scores = aggregate_scores(sub_scores, config.score_weights.as_ref())?;
        let suggestions = generate_suggestions(&scores.scores, &classification.label);

        let overall_quality_score =
            scores.overall_score * tracking.overall_score * classification.confidence;

        debug!(
            "scores: {:?} overall={:.1} grade={}",
            scores.scores, scores.overall_score, scores.grade
        );

        Ok(SwingReport {
            classification: classification.clone(),
            physics,
            energy,
            forces,
            sequence,
            phases,
            durations,
            tracking,
            scores,
            suggestions,
            overall_quality_score,
        })
    }

    pub fn grade(&self) -> &str {
        &self.scores.grade
    }

    pub fn to_json(&self) -> AnalysisResult<String> {
        serde_json::to_string(self).map_err(|e| AnalysisError::Serialize(e.to_string()))
    }
}

/// Innholdsbasert cache-nøkkel for en rapport, utledet fra input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportKey {
    pub frame_count: usize,
    pub frame_rate: OrderedFloat<f64>,
    pub kinematics: Vec<OrderedFloat<f64>>,
    pub phases: Option<PhaseBoundaries>,
    pub label: String,
    pub confidence: OrderedFloat<f64>,
    pub confidence_gap: OrderedFloat<f64>,
    pub samples_digest: u64,
    pub weights: Option<Vec<OrderedFloat<f64>>>,
}

impl ReportKey {
    pub fn from_inputs(
        capture: &SwingCapture,
        classification: &ClassificationResult,
        config: &AnalysisConfig,
    ) -> Self {
        let k = &capture.kinematics;
        let kinematics = [
            k.club_head_speed_mph,
            k.launch_angle_deg,
            k.ball_speed_mph.unwrap_or(f64::NAN),
            k.spin_rate_rpm.unwrap_or(f64::NAN),
            k.swing_plane_angle_deg,
            k.hip_rotation_deg,
            k.shoulder_rotation_deg,
            k.wrist_cock_deg,
            k.club_path_deg,
            k.swing_efficiency,
            k.hip_start_s,
            k.shoulder_start_s,
            k.arm_start_s,
            k.club_start_s,
        ]
        .into_iter()
        .map(OrderedFloat)
        .collect();

        let mut h = DefaultHasher::new();
        for s in &capture.samples {
            s.frame.hash(&mut h);
            OrderedFloat(s.club_confidence).hash(&mut h);
            s.club_head.map(|p| [OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z)]).hash(&mut h);
            for (joint, c) in &s.joint_confidence {
                joint.hash(&mut h);
                OrderedFloat(*c).hash(&mut h);
            }
        }
        let env = capture.meta.environment;
        for v in [env.lighting, env.camera_stability, env.resolution] {
            OrderedFloat(v).hash(&mut h);
        }
        // alt fra klassifiseringen som havner i rapporten må inn i nøkkelen
        classification.recommendations.hash(&mut h);
        for sub in [&classification.tempo, &classification.impact] {
            sub.as_ref()
                .map(|s| (OrderedFloat(s.score), s.note.as_deref()))
                .hash(&mut h);
        }

        ReportKey {
            frame_count: capture.meta.frame_count,
            frame_rate: OrderedFloat(capture.meta.frame_rate),
            kinematics,
            phases: capture.phases,
            label: classification.label.clone(),
            confidence: OrderedFloat(classification.confidence),
            confidence_gap: OrderedFloat(classification.confidence_gap),
            samples_digest: h.finish(),
            weights: config.score_weights.map(|w| {
                [w.tempo, w.plane, w.kinematics, w.impact, w.consistency]
                    .into_iter()
                    .map(OrderedFloat)
                    .collect()
            }),
        }
    }
}

/// Analysator bygget én gang fra konfig; muteres aldri etterpå.
#[derive(Debug, Clone, Default)]
pub struct SwingAnalyzer {
    config: AnalysisConfig,
    metrics: Option<AnalysisMetrics>,
}

impl SwingAnalyzer {
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config, metrics: None })
    }

    pub fn with_metrics(mut self, metrics: AnalysisMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(
        &self,
        capture: &SwingCapture,
        classification: Option<&ClassificationResult>,
    ) -> AnalysisResult<SwingReport> {
        match SwingReport::assemble(capture, classification, &self.config) {
            Ok(report) => {
                info!(
                    "swing report: grade {} ({:.1}), tracking {}, {} suggestion(s)",
                    report.scores.grade,
                    report.scores.overall_score,
                    report.tracking.label.as_str(),
                    report.suggestions.len()
                );
                if let Some(m) = &self.metrics {
                    m.record_report(report.scores.overall_score);
                }
                Ok(report)
            }
            Err(e) => {
                warn!("swing analysis rejected: {e}");
                if let Some(m) = &self.metrics {
                    m.record_rejected();
                }
                Err(e)
            }
        }
    }

    pub fn cache_key(&self, capture: &SwingCapture, classification: &ClassificationResult) -> ReportKey {
        ReportKey::from_inputs(capture, classification, &self.config)
    }
}
