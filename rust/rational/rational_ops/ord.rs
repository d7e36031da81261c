use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use std::cmp::Ordering;

/// Orders `Rational` by cross-multiplication, a total order on canonical
/// values.
impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl PartialOrd<Rational> for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Rational::from(*other)))
    }
}

impl PartialOrd<Rational> for i64 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(Rational::from(*self).cmp(other))
    }
}

impl PartialOrd<Number> for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(i), Number::I64(i2)) => i.partial_cmp(i2),
            (Number::I64(i), Number::Rational(r2)) => i.partial_cmp(r2),
            (Number::Rational(r), Number::I64(i2)) => r.partial_cmp(i2),
            (Number::Rational(r), Number::Rational(r2)) => r.partial_cmp(r2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord() {
        let d1 = Rational::new(1, 2);
        let d2 = Rational::new(2, 3);
        assert!(d1 < d2);
        assert!(d2 > d1);
        assert!(d1 <= Rational::new(2, 4));
        assert!(d1 >= Rational::new(2, 4));
    }

    #[test]
    fn ord_i64() {
        let d = Rational::new(3, 2);
        assert!(d < 2);
        assert!(d > 1);
        assert!(2 > d);
        assert!(1 < d);
        assert!(Rational::new(4, 2) <= 2);
        assert!(Rational::new(4, 2) >= 2);
    }

    #[test]
    fn ord_negative() {
        // sign handling is safe because denominators are canonical
        assert!(Rational::new(-1, 2) < Rational::new(1, 3));
        assert!(Rational::new(1, -2) < Rational::new(-1, 3));
    }

    #[test]
    fn trichotomy() {
        let a = Rational::new(2, 6);
        let b = Rational::new(1, 3);
        assert!(!(a < b) && a == b && !(a > b));
        assert_eq!(a <= b, a < b || a == b);
    }

    #[test]
    fn test_enum() {
        let i = Number::I64(1);
        let r = Number::Rational(Rational::new(1, 2));
        assert!(r < i);
        assert!(i > r);
    }
}
