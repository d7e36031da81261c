//! Wrapper to allow de/serializable objects in Rust to be passed to/from Python using pyo3
//! bindings.
//!
//! Any pyclass that is serializable is added as a DeserializedObj and then converted to JSON.
//! Having been deserialized it is matched, unpacked and passed back to Python.
//!

use crate::json::JSON;
use crate::rational::Rational;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Container for all of the Python exposed Rust objects which are deserializable.
///
/// This allows a single `from_json` function to automatically detect the type and
/// convert it directly to a usable type in Python.
#[derive(Serialize, Deserialize, FromPyObject, IntoPyObject)]
pub(crate) enum DeserializedObj {
    Rational(Rational),
}

impl JSON for DeserializedObj {}

#[pyfunction]
#[pyo3(name = "from_json")]
pub(crate) fn from_json_py(_py: Python<'_>, json: &str) -> PyResult<DeserializedObj> {
    match DeserializedObj::from_json(json) {
        Ok(v) => Ok(v),
        Err(e) => Err(PyValueError::new_err(format!(
            "Could not create Class or Struct from given JSON.\n{}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_object() {
        let x = Rational::new(2, 4);
        let json = DeserializedObj::Rational(x).to_json().unwrap();
        assert_eq!(json, "{\"Rational\":{\"numerator\":1,\"denominator\":2}}");

        let y = DeserializedObj::from_json(&json).unwrap();
        match y {
            DeserializedObj::Rational(r) => assert_eq!(x, r),
        }
    }
}
