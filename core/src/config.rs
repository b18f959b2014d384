use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::scoring::validate_weights;
use crate::types::SubScores;

/// Minste antall frames i et gyldig opptak.
pub const DEFAULT_MIN_FRAMES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_min_frames")]
    pub min_frames: usize,
    /// Overstyr standardvektene (`scoring::SCORE_WEIGHTS`). Må summere til 1.0.
    #[serde(default)]
    pub score_weights: Option<SubScores>,
}

fn default_min_frames() -> usize {
    DEFAULT_MIN_FRAMES
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_frames: DEFAULT_MIN_FRAMES,
            score_weights: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.min_frames < 3 {
            return Err(AnalysisError::out_of_range("min_frames", self.min_frames as f64, "[3, inf)"));
        }
        if let Some(w) = &self.score_weights {
            validate_weights(w)?;
        }
        Ok(())
    }
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_config(path: impl AsRef<Path>) -> AnalysisResult<AnalysisConfig> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("config not found at {}, using defaults", path.display());
        return Ok(AnalysisConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::Config(format!("reading {}: {e}", path.display())))?;
    let cfg: AnalysisConfig = serde_json::from_str(&contents)
        .map_err(|e| AnalysisError::Config(format!("parsing {}: {e}", path.display())))?;
    cfg.validate()?;
    info!("config loaded from {} (min_frames={})", path.display(), cfg.min_frames);
    Ok(cfg)
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &AnalysisConfig, path: impl AsRef<Path>) -> AnalysisResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)
        .map_err(|e| AnalysisError::Config(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| AnalysisError::Config(format!("writing {}: {e}", path.display())))?;
    info!("config saved to {}", path.display());
    Ok(())
}
