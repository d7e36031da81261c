use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use auto_ops::impl_op;

impl_op!(-|a: Rational| -> Rational {
    Rational {
        numerator: -a.numerator,
        denominator: a.denominator,
    }
});
impl_op!(-|a: &Rational| -> Rational {
    Rational {
        numerator: -a.numerator,
        denominator: a.denominator,
    }
});

// Neg for Number
impl_op!(-|a: Number| -> Number {
    match a {
        Number::I64(i) => Number::I64(-i),
        Number::Rational(r) => Number::Rational(-r),
    }
});
impl_op!(-|a: &Number| -> Number {
    match a {
        Number::I64(i) => Number::I64(-i),
        Number::Rational(r) => Number::Rational(-r),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate() {
        let d = Rational::new(2, 3);
        assert_eq!((-d).parts(), (-2, 3));
        assert_eq!((-&d).parts(), (-2, 3));
    }

    #[test]
    fn negate_negative() {
        let d = Rational::new(-2, 3);
        assert_eq!((-d).parts(), (2, 3));
    }

    #[test]
    fn test_enum() {
        let r = Number::Rational(Rational::new(1, 2));
        assert_eq!(-r, Number::Rational(Rational::new(-1, 2)));
        let i = Number::I64(3);
        assert_eq!(-&i, Number::I64(-3));
    }
}
