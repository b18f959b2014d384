// core/src/error.rs
use thiserror::Error;

/// Felles feiltype for hele analyse-pipelinen.
///
/// Alle feil returneres synkront som verdi til kalleren; ingenting her er
/// fatalt for prosessen og ingenting prøves på nytt internt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// For få frames, ikke-monotone fasegrenser, frame rate <= 0, ufullstendig capture.
    #[error("invalid capture: {0}")]
    InvalidCapture(String),

    /// Klassifiseringsresultatet mangler når assembleren trenger det.
    #[error("missing upstream result: {0}")]
    MissingUpstreamResult(String),

    /// Vekt, konfidens, sannsynlighet eller annen input utenfor gyldig område.
    #[error("{field} = {value} is outside {bound}")]
    OutOfRangeInput {
        field: &'static str,
        value: f64,
        bound: &'static str,
    },

    /// JSON-inngang som ikke lar seg parse (path fra serde_path_to_error).
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    /// Rapporten lot seg ikke serialisere til JSON.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Lesing/skriving av konfigurasjon feilet.
    #[error("config error: {0}")]
    Config(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    pub(crate) fn out_of_range(field: &'static str, value: f64, bound: &'static str) -> Self {
        AnalysisError::OutOfRangeInput { field, value, bound }
    }
}

/// Sjekk at `value` er endelig og ligger i [0, 1].
pub(crate) fn ensure_unit(field: &'static str, value: f64) -> AnalysisResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AnalysisError::out_of_range(field, value, "[0, 1]"))
    }
}

/// Sjekk at `value` er endelig og ligger i [0, 100].
pub(crate) fn ensure_percent(field: &'static str, value: f64) -> AnalysisResult<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(AnalysisError::out_of_range(field, value, "[0, 100]"))
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> AnalysisResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalysisError::out_of_range(field, value, "finite"))
    }
}
