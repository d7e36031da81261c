//! This is the documentation for ratiolib-rs

#[cfg(test)]
mod tests;

pub mod json;
use crate::json::json_py::from_json_py;

use pyo3::prelude::*;

pub mod rational;
use rational::Rational;

#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // JSON
    m.add_function(wrap_pyfunction!(from_json_py, m)?)?;

    // Rational arithmetic
    m.add_class::<Rational>()?;

    Ok(())
}
