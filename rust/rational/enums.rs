use crate::rational::Rational;
use pyo3::FromPyObject;
use serde::{Deserialize, Serialize};

/// Container for the two core numeric types; [Rational] and [i64].
///
/// Deriving `FromPyObject` makes this the single coercion point for operands
/// arriving from Python: anything that is neither a `Rational` nor an `int`
/// fails extraction with a `TypeError`.
#[derive(Debug, Clone, Copy, FromPyObject, Serialize, Deserialize)]
pub enum Number {
    Rational(Rational),
    I64(i64),
}
