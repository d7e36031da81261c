use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// impl Mul for Rational
impl_op_ex!(*|a: &Rational, b: &Rational| -> Rational {
    Rational::normalized(
        a.numerator * b.numerator,
        a.denominator * b.denominator,
    )
});
impl_op_ex_commutative!(*|a: &Rational, b: &i64| -> Rational { a * Rational::from(*b) });

impl_op_ex!(*= |a: &mut Rational, b: &Rational| { *a = *a * *b });
impl_op_ex!(*= |a: &mut Rational, b: &i64| { *a = *a * *b });

// Mul for Number
impl_op_ex!(*|a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::I64(i), Number::I64(i2)) => Number::I64(i * i2),
        (Number::I64(i), Number::Rational(r2)) => Number::Rational(i * r2),
        (Number::Rational(r), Number::I64(i2)) => Number::Rational(r * i2),
        (Number::Rational(r), Number::Rational(r2)) => Number::Rational(r * r2),
    }
});
