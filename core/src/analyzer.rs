use serde::de::DeserializeOwned;
use serde_json as json;
use serde_path_to_error as spte;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{ClassificationResult, SwingCapture};
use crate::report::SwingAnalyzer;

/// Parse med sti til feltet som feilet (f.eks. `samples[3].frame`).
pub fn parse_json<T: DeserializeOwned>(what: &str, json_in: &str) -> AnalysisResult<T> {
    let mut de = json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| AnalysisError::Parse {
        path: format!("{what}:{}", e.path()),
        message: e.inner().to_string(),
    })
}

/// JSON inn → rapport som JSON ut.
///
/// `classification_json` kan være `null`; da returneres `MissingUpstreamResult`.
/// `cfg_json` er valgfri og faller tilbake til `AnalysisConfig::default()`.
pub fn analyze_swing_json(
    capture_json: &str,
    classification_json: &str,
    cfg_json: Option<&str>,
) -> AnalysisResult<String> {
    let capture: SwingCapture = parse_json("capture", capture_json)?;
    let classification: Option<ClassificationResult> =
        parse_json("classification", classification_json)?;
    let cfg: AnalysisConfig = match cfg_json {
        Some(s) => parse_json("cfg", s)?,
        None => AnalysisConfig::default(),
    };

    let report = SwingAnalyzer::new(cfg)?.analyze(&capture, classification.as_ref())?;
    report.to_json()
}
