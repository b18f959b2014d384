use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_unit, AnalysisResult};
use crate::models::SwingCapture;
use crate::types::{QualityLabel, TrackingQuality};

/// Vekter for de sju komponentene. Summerer til 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingQualityWeights {
    pub club_visibility: f64,
    pub body_visibility: f64,
    pub joint_confidence: f64,
    pub lighting: f64,
    pub camera_stability: f64,
    pub frame_rate: f64,
    pub resolution: f64,
}

impl TrackingQualityWeights {
    pub fn sum(&self) -> f64 {
        self.club_visibility
            + self.body_visibility
            + self.joint_confidence
            + self.lighting
            + self.camera_stability
            + self.frame_rate
            + self.resolution
    }
}

pub const TRACKING_QUALITY_WEIGHTS: TrackingQualityWeights = TrackingQualityWeights {
    club_visibility: 0.25,
    body_visibility: 0.20,
    joint_confidence: 0.15,
    lighting: 0.15,
    camera_stability: 0.10,
    frame_rate: 0.10,
    resolution: 0.05,
};

// terskler for begrensende faktorer
pub const MIN_CLUB_VISIBILITY: f64 = 0.7;
pub const MIN_BODY_VISIBILITY: f64 = 0.7;
pub const MIN_LIGHTING: f64 = 0.6;
pub const MIN_CAMERA_STABILITY: f64 = 0.7;

/// Konfidens som teller som "synlig" i en frame.
pub const VISIBLE_CONFIDENCE: f64 = 0.5;
/// Frame rate som gir full score.
pub const REFERENCE_FPS: f64 = 60.0;

/// Sju komponentscorer, alle i [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingQualityInputs {
    pub club_visibility: f64,
    pub body_visibility: f64,
    pub joint_confidence: f64,
    pub lighting: f64,
    pub camera_stability: f64,
    pub frame_rate: f64,
    pub resolution: f64,
}

impl TrackingQualityInputs {
    /// Utled komponentene fra selve opptaket; lys, kamera og oppløsning
    /// kommer fra `CaptureMeta::environment`.
    pub fn from_capture(capture: &SwingCapture) -> Self {
        let n = capture.samples.len().max(1) as f64;

        let club_visible = capture
            .samples
            .iter()
            .filter(|s| s.club_head.is_some() && s.club_confidence >= VISIBLE_CONFIDENCE)
            .count() as f64;

        let mut body_visible = 0usize;
        let mut conf_sum = 0.0;
        let mut conf_cnt = 0usize;
        for s in &capture.samples {
            if s.joint_confidence.is_empty() {
                continue;
            }
            let frame_sum: f64 = s.joint_confidence.values().sum();
            let frame_mean = frame_sum / s.joint_confidence.len() as f64;
            if frame_mean >= VISIBLE_CONFIDENCE {
                body_visible += 1;
            }
            conf_sum += frame_sum;
            conf_cnt += s.joint_confidence.len();
        }

        let env = capture.meta.environment;
        Self {
            club_visibility: club_visible / n,
            body_visibility: body_visible as f64 / n,
            joint_confidence: if conf_cnt == 0 { 0.0 } else { conf_sum / conf_cnt as f64 },
            lighting: env.lighting,
            camera_stability: env.camera_stability,
            frame_rate: frame_rate_score(capture.meta.frame_rate),
            resolution: env.resolution,
        }
    }
}

pub fn frame_rate_score(fps: f64) -> f64 {
    if fps.is_finite() && fps > 0.0 { (fps / REFERENCE_FPS).min(1.0) } else { 0.0 }
}

pub fn quality_label(overall: f64) -> QualityLabel {
    if overall >= 0.9 {
        QualityLabel::Excellent
    } else if overall >= 0.75 {
        QualityLabel::Good
    } else if overall >= 0.6 {
        QualityLabel::Fair
    } else if overall >= 0.4 {
        QualityLabel::Poor
    } else {
        QualityLabel::VeryPoor
    }
}

/// Vurder sporingskvaliteten. Komponenter utenfor [0, 1] avvises.
pub fn assess_tracking_quality(inputs: &TrackingQualityInputs) -> AnalysisResult<TrackingQuality> {
    let club = ensure_unit("club_visibility", inputs.club_visibility)?;
    let body = ensure_unit("body_visibility", inputs.body_visibility)?;
    let joint = ensure_unit("joint_confidence", inputs.joint_confidence)?;
    let lighting = ensure_unit("lighting", inputs.lighting)?;
    let camera = ensure_unit("camera_stability", inputs.camera_stability)?;
    let fps = ensure_unit("frame_rate", inputs.frame_rate)?;
    let resolution = ensure_unit("resolution", inputs.resolution)?;

    let w = TRACKING_QUALITY_WEIGHTS;
    let overall = w.club_visibility * club
        + w.body_visibility * body
        + w.joint_confidence * joint
        + w.lighting * lighting
        + w.camera_stability * camera
        + w.frame_rate * fps
        + w.resolution * resolution;

    let mut limiting_factors = Vec::new();
    if club < MIN_CLUB_VISIBILITY {
        limiting_factors.push("Club visibility".to_string());
    }
    if body < MIN_BODY_VISIBILITY {
        limiting_factors.push("Body visibility".to_string());
    }
    if lighting < MIN_LIGHTING {
        limiting_factors.push("Lighting".to_string());
    }
    if camera < MIN_CAMERA_STABILITY {
        limiting_factors.push("Camera stability".to_string());
    }

    let label = quality_label(overall);
    if matches!(label, QualityLabel::Poor | QualityLabel::VeryPoor) {
        warn!(
            "tracking quality {:.2} ({}), limiting factors: {:?}",
            overall,
            label.as_str(),
            limiting_factors
        );
    }

    Ok(TrackingQuality {
        club_visibility: club,
        body_visibility: body,
        joint_confidence: joint,
        lighting,
        camera_stability: camera,
        frame_rate: fps,
        resolution,
        overall_score: overall,
        label,
        limiting_factors,
    })
}
