// PyO3-bindingene: tynt lag over analyzer/zones – all logikk ligger i kjernen.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyzer::simulate_arc_from_json;
use crate::models::ShotRecord;
use crate::zones::classify;

#[pyfunction]
fn simulate_arc_json(_py: Python<'_>, json_str: &str) -> PyResult<String> {
    simulate_arc_from_json(json_str).map_err(PyValueError::new_err)
}

/// Enkeltskudd-klassifisering for plotting/debugging fra Python-siden.
#[pyfunction]
fn classify_shot(
    distance_units: f64,
    loc_x: f64,
    loc_y: f64,
    arc_distance_ft: f64,
) -> PyResult<String> {
    let record = ShotRecord {
        distance_units,
        loc_x,
        loc_y,
        made: false,
        attempted: true,
    };
    record
        .validate(0)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(classify(&record, arc_distance_ft).label().to_string())
}

#[pymodule]
fn arcsim_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_arc_json, m)?)?;
    m.add_function(wrap_pyfunction!(classify_shot, m)?)?;
    Ok(())
}
