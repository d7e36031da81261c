use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use std::hash::{Hash, Hasher};

/// Measures value equivalence of `Rational` by cross-multiplication.
///
/// Denominators are positive by the canonical-form invariant, so the
/// comparison direction never flips.
impl PartialEq<Rational> for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }
}

impl Eq for Rational {}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        Rational::from(*other) == *self
    }
}

impl PartialEq<Rational> for i64 {
    fn eq(&self, other: &Rational) -> bool {
        Rational::from(*self) == *other
    }
}

// Values are canonical, so field hashing agrees with cross-multiplied equality.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl PartialEq<Number> for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::I64(i), Number::I64(i2)) => i == i2,
            (Number::I64(i), Number::Rational(r2)) => i == r2,
            (Number::Rational(r), Number::I64(i2)) => r == i2,
            (Number::Rational(r), Number::Rational(r2)) => r == r2,
        }
    }
}
