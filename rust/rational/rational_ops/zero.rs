use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use num_traits::Zero;

impl Zero for Rational {
    fn zero() -> Rational {
        Rational::new(0, 1)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl Zero for Number {
    fn zero() -> Number {
        Number::I64(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::I64(i) => *i == 0,
            Number::Rational(r) => r.is_zero(),
        }
    }
}
