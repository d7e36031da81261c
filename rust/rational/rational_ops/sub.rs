use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use auto_ops::impl_op_ex;

// impl Sub for Rational, defined as addition of the negated right operand
impl_op_ex!(- |a: &Rational, b: &Rational| -> Rational { a + (b * -1) });
impl_op_ex!(- |a: &Rational, b: &i64| -> Rational { a + (-b) });
impl_op_ex!(- |a: &i64, b: &Rational| -> Rational {
    Rational::normalized(a * b.denominator - b.numerator, b.denominator)
});

impl_op_ex!(-= |a: &mut Rational, b: &Rational| { *a = *a - *b });
impl_op_ex!(-= |a: &mut Rational, b: &i64| { *a = *a - *b });

// Sub for Number
impl_op_ex!(- |a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::I64(i), Number::I64(i2)) => Number::I64(i - i2),
        (Number::I64(i), Number::Rational(r2)) => Number::Rational(i - r2),
        (Number::Rational(r), Number::I64(i2)) => Number::Rational(r - i2),
        (Number::Rational(r), Number::Rational(r2)) => Number::Rational(r - r2),
    }
});
