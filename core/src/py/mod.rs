use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// ──────────────────────────────────────────────────────────────────────────────
// JSON inn / JSON ut – Python-siden serialiserer selv med json.dumps/json.loads
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (capture_json, classification_json, cfg_json=None))]
fn analyze_swing_json(
    capture_json: &str,
    classification_json: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    crate::analyze_swing_json(capture_json, classification_json, cfg_json)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn letter_grade(overall: f64) -> String {
    crate::scoring::letter_grade(overall).to_string()
}

#[pyfunction]
fn power_generation() -> Vec<(String, f64)> {
    crate::POWER_GENERATION
        .iter()
        .map(|p| (p.segment.to_string(), p.share_pct))
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn swinggraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_swing_json, m)?)?;
    m.add_function(wrap_pyfunction!(letter_grade, m)?)?;
    m.add_function(wrap_pyfunction!(power_generation, m)?)?;
    Ok(())
}
