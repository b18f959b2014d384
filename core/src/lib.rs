//! SwingGraph core: golfsving-opptak → rapport med delscorer, karakter,
//! faseoppdeling, sporingskvalitet og forbedringsforslag.
//!
//! Alt her er rene funksjoner av eksplisitt input. Ingen I/O i pipelinen,
//! ingen global tilstand.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod phases;
pub mod physics;
pub mod quality;
pub mod report;
pub mod scoring;
pub mod sequencing;
pub mod smoothing;
pub mod suggestions;
pub mod telemetry;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use analyzer::analyze_swing_json;
pub use config::{load_config, save_config, AnalysisConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use models::{
    CaptureMeta, ClassificationResult, Environment, PhaseBoundaries, SubAnalysis, SwingCapture,
    SwingKinematics, TrackingSample, Vec3,
};
pub use physics::{analyze_energy, compute_physics, POWER_GENERATION};
pub use quality::{assess_tracking_quality, TrackingQualityInputs};
pub use report::{ReportKey, SwingAnalyzer};
pub use scoring::{aggregate_scores, letter_grade, SCORE_WEIGHTS};
pub use sequencing::analyze_sequence;
pub use suggestions::generate_suggestions;
pub use telemetry::AnalysisMetrics;
pub use types::*;
