use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use num_traits::One;

impl One for Rational {
    fn one() -> Rational {
        Rational::new(1, 1)
    }
}

impl One for Number {
    fn one() -> Number {
        Number::I64(1)
    }
}
