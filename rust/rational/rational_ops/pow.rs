use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use num_traits::Pow;

/// Raises to an integer power, componentwise on the canonical form.
///
/// A negative exponent inverts first: `x.pow(-p) == x.recip().pow(p)`, which
/// panics for a zero value.
impl Pow<i32> for Rational {
    type Output = Rational;
    fn pow(self, power: i32) -> Rational {
        if power < 0 {
            self.recip().pow(-power)
        } else {
            Rational {
                numerator: self.numerator.pow(power as u32),
                denominator: self.denominator.pow(power as u32),
            }
        }
    }
}

impl Pow<i32> for &Rational {
    type Output = Rational;
    fn pow(self, power: i32) -> Rational {
        (*self).pow(power)
    }
}

impl Pow<i32> for Number {
    type Output = Number;
    fn pow(self, power: i32) -> Number {
        match self {
            Number::I64(i) => Number::Rational(Rational::from(i).pow(power)),
            Number::Rational(r) => Number::Rational(r.pow(power)),
        }
    }
}

impl Pow<i32> for &Number {
    type Output = Number;
    fn pow(self, power: i32) -> Number {
        (*self).pow(power)
    }
}
