use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use auto_ops::impl_op_ex;

// impl Rem for Rational, truncated toward zero as for native integers
impl_op_ex!(% |a: &Rational, b: &Rational| -> Rational {
    let d = (a / b).to_i64();
    a - d * b
});
impl_op_ex!(% |a: &Rational, b: &i64| -> Rational { a % Rational::from(*b) });
impl_op_ex!(% |a: &i64, b: &Rational| -> Rational { Rational::from(*a) % b });

// Rem for Number
impl_op_ex!(% |a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::I64(i), Number::I64(i2)) => Number::I64(i % i2),
        (Number::I64(i), Number::Rational(r2)) => Number::Rational(i % r2),
        (Number::Rational(r), Number::I64(i2)) => Number::Rational(r % i2),
        (Number::Rational(r), Number::Rational(r2)) => Number::Rational(r % r2),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_() {
        // (7/2) % (3/2) = 1/2
        let result = Rational::new(7, 2) % Rational::new(3, 2);
        assert_eq!(result, Rational::new(1, 2));
    }

    #[test]
    fn rem_i64_() {
        let result = Rational::new(7, 2) % 2_i64;
        assert_eq!(result, Rational::new(3, 2));

        let result = 7_i64 % Rational::new(3, 2);
        assert_eq!(result, Rational::new(1, 2));
    }

    #[test]
    fn rem_negative() {
        // truncation toward zero keeps the dividend's sign
        let result = Rational::new(-7, 2) % Rational::new(3, 2);
        assert_eq!(result, Rational::new(-1, 2));
    }

    #[test]
    fn test_enum() {
        assert_eq!(Number::I64(7) % Number::I64(3), Number::I64(1));
        assert_eq!(
            Number::I64(7) % Number::Rational(Rational::new(3, 2)),
            Number::Rational(Rational::new(1, 2))
        );
    }
}
