use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use std::iter::Sum;

impl Sum for Rational {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Rational>,
    {
        iter.fold(Rational::new(0, 1), |acc, x| acc + x)
    }
}

impl Sum for Number {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Number>,
    {
        iter.fold(Number::I64(0), |acc, x| acc + x)
    }
}
