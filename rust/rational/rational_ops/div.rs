use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use auto_ops::impl_op_ex;

// impl Div for Rational, as multiplication by the reciprocal.
// A zero divisor panics, matching native integer division.
impl_op_ex!(/ |a: &Rational, b: &Rational| -> Rational { a * b.recip() });
impl_op_ex!(/ |a: &Rational, b: &i64| -> Rational { a / Rational::from(*b) });
impl_op_ex!(/ |a: &i64, b: &Rational| -> Rational { Rational::from(*a) * b.recip() });

impl_op_ex!(/= |a: &mut Rational, b: &Rational| { *a = *a / *b });
impl_op_ex!(/= |a: &mut Rational, b: &i64| { *a = *a / *b });

// Div for Number
impl_op_ex!(/ |a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::I64(i), Number::I64(i2)) => Number::Rational(Rational::from(*i) / Rational::from(*i2)),
        (Number::I64(i), Number::Rational(r2)) => Number::Rational(i / r2),
        (Number::Rational(r), Number::I64(i2)) => Number::Rational(r / i2),
        (Number::Rational(r), Number::Rational(r2)) => Number::Rational(r / r2),
    }
});
