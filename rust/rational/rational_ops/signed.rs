use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use num_traits::{Signed, Zero};

impl Signed for Rational {
    /// Absolute value; the denominator is already positive in canonical form.
    fn abs(&self) -> Self {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Rational::zero()
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        Rational::from(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl Signed for Number {
    fn abs(&self) -> Self {
        match self {
            Number::I64(i) => Number::I64(i.abs()),
            Number::Rational(r) => Number::Rational(r.abs()),
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Number::zero()
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        match self {
            Number::I64(i) => Number::I64(i.signum()),
            Number::Rational(r) => Number::Rational(r.signum()),
        }
    }

    fn is_positive(&self) -> bool {
        match self {
            Number::I64(i) => *i > 0,
            Number::Rational(r) => Signed::is_positive(r),
        }
    }

    fn is_negative(&self) -> bool {
        match self {
            Number::I64(i) => *i < 0,
            Number::Rational(r) => Signed::is_negative(r),
        }
    }
}
