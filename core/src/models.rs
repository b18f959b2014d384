use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64, // vertikal akse
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Vec3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Én frame fra trackeren. Uforanderlig etter opptak.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackingSample {
    pub t: f64,       // sek fra start
    pub frame: u32,   // 0-basert
    #[serde(default)]
    pub joints: BTreeMap<String, Vec3>,
    #[serde(default)]
    pub joint_confidence: BTreeMap<String, f64>, // 0..1
    #[serde(default)]
    pub club_head: Option<Vec3>,
    #[serde(default)]
    pub club_confidence: f64, // 0..1
}

/// Opptaksforhold vurdert utenfor kjernen (lys, kamera, oppløsning), 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub lighting: f64,
    pub camera_stability: f64,
    pub resolution: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            lighting: 1.0,
            camera_stability: 1.0,
            resolution: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaptureMeta {
    pub frame_count: usize,
    pub frame_rate: f64, // fps
    pub duration_s: f64,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub environment: Environment,
}

/// Sammendrag av svingens kinematikk levert av trackeren.
/// Alle felt er påkrevd input; kjernen genererer dem aldri selv.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwingKinematics {
    pub club_head_speed_mph: f64,
    pub launch_angle_deg: f64,
    #[serde(default)]
    pub ball_speed_mph: Option<f64>,
    #[serde(default)]
    pub spin_rate_rpm: Option<f64>,
    pub swing_plane_angle_deg: f64,
    pub hip_rotation_deg: f64,      // maks hofterotasjon
    pub shoulder_rotation_deg: f64, // maks skulderrotasjon
    pub wrist_cock_deg: f64,
    pub club_path_deg: f64,
    pub swing_efficiency: f64,
    // initieringstidspunkt (sek fra svingstart)
    pub hip_start_s: f64,
    pub shoulder_start_s: f64,
    pub arm_start_s: f64,
    pub club_start_s: f64,
}

/// Ni fasegrenser (frame-indekser), ikke-synkende i denne rekkefølgen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PhaseBoundaries {
    pub setup: u32,
    pub takeaway: u32,
    pub mid_backswing: u32,
    pub top: u32,
    pub transition: u32,
    pub mid_downswing: u32,
    pub impact: u32,
    pub follow_through: u32,
    #[serde(default)]
    pub finish: Option<u32>,
}

impl PhaseBoundaries {
    /// Grensene i rekkefølge; `finish` kun hvis satt.
    pub fn ordered(&self) -> Vec<u32> {
        let mut v = vec![
            self.setup,
            self.takeaway,
            self.mid_backswing,
            self.top,
            self.transition,
            self.mid_downswing,
            self.impact,
            self.follow_through,
        ];
        if let Some(f) = self.finish {
            v.push(f);
        }
        v
    }
}

/// Komplett, uforanderlig opptak av én sving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwingCapture {
    pub samples: Vec<TrackingSample>,
    pub meta: CaptureMeta,
    pub kinematics: SwingKinematics,
    /// Mangler grensene utledes de fra køllehode-banen.
    #[serde(default)]
    pub phases: Option<PhaseBoundaries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAnalysis {
    pub score: f64, // 0..100
    #[serde(default)]
    pub note: Option<String>,
}

/// Resultat fra den eksterne klassifiseringstjenesten (svingplan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String, // "on_plane" | "too_steep" | "too_flat" | ...
    pub confidence: f64,
    pub confidence_gap: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub tempo: Option<SubAnalysis>,
    #[serde(default)]
    pub impact: Option<SubAnalysis>,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, confidence: f64, confidence_gap: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            confidence_gap,
            recommendations: Vec::new(),
            tempo: None,
            impact: None,
        }
    }
}
