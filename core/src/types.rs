use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::models::{ClassificationResult, PhaseBoundaries};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMetrics {
    pub club_head_speed_mph: f64,
    pub club_head_speed_ms: f64,
    pub launch_angle_deg: f64,
    pub ball_speed_mph: f64,
    pub ball_speed_estimated: bool,
    pub spin_rate_rpm: Option<f64>,
    pub impact_force_n: f64,
    pub swing_plane_angle_deg: f64,
    pub hip_rotation_deg: f64,
    pub shoulder_rotation_deg: f64,
    pub x_factor_deg: f64,
    pub wrist_cock_deg: f64,
    pub club_path_deg: f64,
    pub swing_efficiency: f64,
    pub smash_factor: f64,
    pub carry_distance_yards: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForceKind {
    GroundReaction,
    Grip,
    Centrifugal,
    Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceVector {
    pub magnitude_n: f64,
    pub direction: [f64; 3], // enhetsvektor
    pub kind: ForceKind,
}

impl ForceVector {
    /// Komponentene (retning skalert med størrelse).
    pub fn components(&self) -> [f64; 3] {
        self.direction.map(|d| d * self.magnitude_n)
    }
}

/// Energi i joule (unntatt `transfer_efficiency_pct`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    pub total_energy_generated_j: f64,
    pub energy_to_club_head_j: f64,
    pub ball_kinetic_energy_j: f64,
    pub transfer_efficiency_pct: f64,
    pub energy_loss_j: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSequence {
    pub hip_start_s: f64,
    pub shoulder_start_s: f64,
    pub arm_start_s: f64,
    pub club_start_s: f64,
    pub hip_to_shoulder_s: f64,
    pub shoulder_to_arm_s: f64,
    pub arm_to_club_s: f64,
    pub score: f64, // 0..100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingPhase {
    Setup,
    Takeaway,
    Backswing,
    Transition,
    EarlyDownswing,
    LateDownswing,
    ImpactZone,
    FollowThrough,
}

impl SwingPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SwingPhase::Setup => "Setup",
            SwingPhase::Takeaway => "Takeaway",
            SwingPhase::Backswing => "Backswing",
            SwingPhase::Transition => "Transition",
            SwingPhase::EarlyDownswing => "Early Downswing",
            SwingPhase::LateDownswing => "Late Downswing",
            SwingPhase::ImpactZone => "Impact Zone",
            SwingPhase::FollowThrough => "Follow Through",
        }
    }
}

/// Validerte fasegrenser. Invariant: grensene er ikke-synkende og frame_rate > 0
/// (håndheves av `SwingPhases::new`).
/// Deserialisering går også gjennom `new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSwingPhases")]
pub struct SwingPhases {
    pub boundaries: PhaseBoundaries,
    pub total_frames: usize,
    pub frame_rate: f64,
}

#[derive(Deserialize)]
struct RawSwingPhases {
    boundaries: PhaseBoundaries,
    total_frames: usize,
    frame_rate: f64,
}

impl TryFrom<RawSwingPhases> for SwingPhases {
    type Error = AnalysisError;

    fn try_from(raw: RawSwingPhases) -> Result<Self, Self::Error> {
        SwingPhases::new(raw.boundaries, raw.total_frames, raw.frame_rate)
    }
}

/// Avledede fasevarigheter i sekunder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseDurations {
    pub setup_s: f64,
    pub backswing_s: f64,
    pub downswing_s: f64,
    pub follow_through_s: f64,
    pub total_s: f64,
    pub tempo_ratio: Option<f64>, // backswing / downswing
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl QualityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::Fair => "Fair",
            QualityLabel::Poor => "Poor",
            QualityLabel::VeryPoor => "Very Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingQuality {
    pub club_visibility: f64,
    pub body_visibility: f64,
    pub joint_confidence: f64,
    pub lighting: f64,
    pub camera_stability: f64,
    pub frame_rate: f64,
    pub resolution: f64,
    pub overall_score: f64, // 0..1
    pub label: QualityLabel,
    pub limiting_factors: Vec<String>,
}

/// De fem delscorene (0..100) i fast komponent-rekkefølge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub tempo: f64,
    pub plane: f64,
    pub kinematics: f64,
    pub impact: f64,
    pub consistency: f64,
}

impl SubScores {
    /// Navngitte delscorer i fast rekkefølge {tempo, plane, kinematics, impact, consistency}.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Tempo", self.tempo),
            ("Swing Plane", self.plane),
            ("Kinematics", self.kinematics),
            ("Impact", self.impact),
            ("Consistency", self.consistency),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scores: SubScores,
    pub weights: SubScores,
    pub overall_score: f64, // 0..100
    pub grade: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub area: String,
    pub issue: String,
    pub drill: String,
    pub expected_improvement: String,
    pub difficulty: Difficulty,
}

/// Rot-aggregatet. Bygges én gang per analyse og muteres aldri etterpå.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingReport {
    pub classification: ClassificationResult,
    pub physics: PhysicsMetrics,
    pub energy: EnergyAnalysis,
    pub forces: Vec<ForceVector>,
    pub sequence: KinematicSequence,
    pub phases: SwingPhases,
    pub durations: PhaseDurations,
    pub tracking: TrackingQuality,
    pub scores: ScoreBreakdown,
    pub suggestions: Vec<ImprovementSuggestion>,
    pub overall_quality_score: f64,
}
