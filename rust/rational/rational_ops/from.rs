use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use std::convert::From;

/// An integer coerces to denominator 1, already canonical.
impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}

impl From<&Rational> for f64 {
    fn from(value: &Rational) -> Self {
        value.to_f64()
    }
}

/// The canonical coercion from the dynamic operand type: a `Rational` passes
/// through unchanged, an integer wraps with denominator 1.
impl From<Number> for Rational {
    fn from(value: Number) -> Self {
        match value {
            Number::I64(i) => Rational::from(i),
            Number::Rational(r) => r,
        }
    }
}

impl From<&Number> for Rational {
    fn from(value: &Number) -> Self {
        match value {
            Number::I64(i) => Rational::from(*i),
            Number::Rational(r) => *r,
        }
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        match value {
            Number::I64(i) => i as f64,
            Number::Rational(r) => r.to_f64(),
        }
    }
}
