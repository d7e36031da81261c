//! Wrapper module to export the Rust rational data type to Python using pyo3 bindings.

use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::rational::enums::Number;
use crate::rational::rational::{gcd, Rational};
use num_traits::{Pow, Signed, Zero};
use pyo3::exceptions::{PyTypeError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyComplex, PyIterator, PyTuple};

#[pymethods]
impl Rational {
    /// Python wrapper to construct a new `Rational`.
    ///
    /// Parameters
    /// ----------
    /// numerator: int | Rational
    ///     The numerator, defaulting to 0. Passing a `Rational` copies its
    ///     components and the ``denominator`` argument is ignored.
    /// denominator: int
    ///     The denominator, defaulting to 1. Must be nonzero.
    ///
    /// Returns
    /// -------
    /// Rational
    #[new]
    #[pyo3(signature = (numerator=None, denominator=1))]
    fn new_py(numerator: Option<Number>, denominator: i64) -> PyResult<Self> {
        match numerator {
            None => Rational::try_new(0, denominator),
            Some(Number::I64(z)) => Rational::try_new(z, denominator),
            Some(Number::Rational(r)) => Ok(r),
        }
    }

    #[getter]
    #[pyo3(name = "numerator")]
    fn numerator_py(&self) -> PyResult<i64> {
        Ok(self.numerator())
    }

    #[getter]
    #[pyo3(name = "denominator")]
    fn denominator_py(&self) -> PyResult<i64> {
        Ok(self.denominator())
    }

    /// Greatest common divisor of two integers by the Euclidean algorithm.
    ///
    /// Parameters
    /// ----------
    /// x: int
    /// y: int
    ///
    /// Returns
    /// -------
    /// int
    #[staticmethod]
    #[pyo3(name = "gcd")]
    fn gcd_py(x: i64, y: i64) -> i64 {
        gcd(x, y)
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!("{}", self))
    }

    fn __eq__(&self, other: Number) -> bool {
        match other {
            Number::Rational(r) => *self == r,
            Number::I64(i) => *self == i,
        }
    }

    fn __ne__(&self, other: Number) -> bool {
        !self.__eq__(other)
    }

    fn __lt__(&self, other: Number) -> bool {
        match other {
            Number::Rational(r) => *self < r,
            Number::I64(i) => *self < i,
        }
    }

    fn __le__(&self, other: Number) -> bool {
        match other {
            Number::Rational(r) => *self <= r,
            Number::I64(i) => *self <= i,
        }
    }

    fn __gt__(&self, other: Number) -> bool {
        match other {
            Number::Rational(r) => *self > r,
            Number::I64(i) => *self > i,
        }
    }

    fn __ge__(&self, other: Number) -> bool {
        match other {
            Number::Rational(r) => *self >= r,
            Number::I64(i) => *self >= i,
        }
    }

    fn __neg__(&self) -> Self {
        -self
    }

    fn __add__(&self, other: Number) -> Self {
        match other {
            Number::Rational(r) => self + r,
            Number::I64(i) => self + i,
        }
    }

    fn __radd__(&self, other: Number) -> Self {
        self.__add__(other)
    }

    fn __sub__(&self, other: Number) -> Self {
        match other {
            Number::Rational(r) => self - r,
            Number::I64(i) => self - i,
        }
    }

    fn __rsub__(&self, other: Number) -> Self {
        match other {
            Number::Rational(r) => r - self,
            Number::I64(i) => i - self,
        }
    }

    fn __mul__(&self, other: Number) -> Self {
        match other {
            Number::Rational(r) => self * r,
            Number::I64(i) => self * i,
        }
    }

    fn __rmul__(&self, other: Number) -> Self {
        self.__mul__(other)
    }

    fn __truediv__(&self, other: Number) -> PyResult<Self> {
        if other.is_zero() {
            return Err(PyZeroDivisionError::new_err("division by zero"));
        }
        match other {
            Number::Rational(r) => Ok(self / r),
            Number::I64(i) => Ok(self / i),
        }
    }

    fn __rtruediv__(&self, other: Number) -> PyResult<Self> {
        if self.is_zero() {
            return Err(PyZeroDivisionError::new_err("division by zero"));
        }
        match other {
            Number::Rational(r) => Ok(r / self),
            Number::I64(i) => Ok(i / self),
        }
    }

    fn __pow__(&self, power: Number, modulo: Option<i32>) -> PyResult<Self> {
        if modulo.unwrap_or(0) != 0 {
            panic!("Power function with mod not available for Rational.")
        }
        match power {
            Number::I64(p) => {
                if p < 0 && self.is_zero() {
                    Err(PyZeroDivisionError::new_err(
                        "zero cannot be raised to a negative power",
                    ))
                } else {
                    Ok(self.pow(p as i32))
                }
            }
            Number::Rational(_) => Err(PyTypeError::new_err(
                "Power operation not defined with Rational type exponent.",
            )),
        }
    }

    fn __abs__(&self) -> Self {
        self.abs()
    }

    fn __invert__(&self) -> PyResult<Self> {
        if self.is_zero() {
            Err(PyZeroDivisionError::new_err("cannot take reciprocal of zero"))
        } else {
            Ok(self.recip())
        }
    }

    fn __float__(&self) -> f64 {
        self.to_f64()
    }

    fn __int__(&self) -> i64 {
        self.to_i64()
    }

    fn __complex__<'py>(&self, py: Python<'py>) -> Bound<'py, PyComplex> {
        PyComplex::from_doubles(py, self.to_f64(), 0.0)
    }

    /// Iterates the numerator then the denominator, so a value unpacks as
    /// ``z, n = rational``. Each call starts a fresh iterator.
    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        PyTuple::new(py, [self.numerator(), self.denominator()])?.try_iter()
    }

    // JSON
    /// Create a JSON string representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::Rational(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `Rational` to JSON.",
            )),
        }
    }

    // Pickling
    pub fn __setstate__(&mut self, state: Bound<'_, PyBytes>) -> PyResult<()> {
        *self = bincode::serde::decode_from_slice(state.as_bytes(), bincode::config::standard())
            .unwrap()
            .0;
        Ok(())
    }
    pub fn __getstate__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        Ok(PyBytes::new(
            py,
            &bincode::serde::encode_to_vec(self, bincode::config::standard()).unwrap(),
        ))
    }
    pub fn __getnewargs__(&self) -> PyResult<(i64, i64)> {
        Ok((self.numerator(), self.denominator()))
    }
}
