use crate::rational::{Number, Rational};
use num_traits::{One, Pow, Signed, Zero};

#[test]
fn float_conversion() {
    for (z, n) in [(1_i64, 2_i64), (-3, 4), (7, -2), (0, 9), (5, 5)] {
        let r = Rational::new(z, n);
        assert!((r.to_f64() - z as f64 / n as f64).abs() < 1e-12);
    }
}

#[test]
fn construction_errors() {
    assert!(Rational::try_new(1, 0).is_err());
    assert!(Rational::try_new(0, 0).is_err());
    assert!(Rational::try_new(i64::MIN + 1, -1).is_ok());
}

#[test]
fn commutativity() {
    let a = Rational::new(3, 7);
    let b = Rational::new(-2, 5);
    assert_eq!(a + b, b + a);
    assert_eq!(a * b, b * a);
    assert_eq!(a + 4_i64, 4_i64 + a);
    assert_eq!(a * 4_i64, 4_i64 * a);
}

#[test]
fn identities() {
    let a = Rational::new(-5, 9);
    assert_eq!(a + Rational::zero(), a);
    assert_eq!(a * Rational::one(), a);
}

#[test]
fn inverse_round_trip() {
    let a = Rational::new(3, 8);
    assert_eq!(a * (Rational::one() / a), Rational::one());
    assert_eq!(a * a.recip(), Rational::one());
}

#[test]
fn comparison_consistency() {
    let pairs = [
        (Rational::new(1, 2), Rational::new(1, 3)),
        (Rational::new(1, 3), Rational::new(1, 2)),
        (Rational::new(2, 6), Rational::new(1, 3)),
        (Rational::new(-1, 2), Rational::new(1, -3)),
    ];
    for (a, b) in pairs {
        let truths = [a < b, a == b, a > b];
        assert_eq!(truths.iter().filter(|x| **x).count(), 1);
        assert_eq!(a <= b, a < b || a == b);
        assert_eq!(a >= b, a > b || a == b);
        assert_eq!(a != b, !(a == b));
    }
}

#[test]
fn reduction_idempotence() {
    // every observable value is in lowest terms with positive denominator
    let samples = [
        Rational::new(2, 4),
        Rational::new(-6, -9) + Rational::new(4, -6),
        Rational::new(10, 4) * Rational::new(2, 5),
        Rational::new(1, 3).pow(-2),
    ];
    for r in samples {
        let (z, n) = r.parts();
        assert_eq!(crate::rational::gcd(z, n), 1);
        assert!(n > 0);
    }
}

#[test]
fn display_scenarios() {
    assert_eq!(Rational::new(2, 4).to_string(), "(1/2)");
    assert_eq!(Rational::new(3, 1).to_string(), "(3)");
}

#[test]
fn arithmetic_scenarios() {
    assert_eq!(
        Rational::new(1, 2) + Rational::new(1, 3),
        Rational::new(5, 6)
    );
    assert_eq!(
        Rational::new(1, 2) / Rational::new(1, 3),
        Rational::new(3, 2)
    );
    assert_eq!(Rational::new(1, 2) * 2_i64, Rational::new(1, 1));
    assert_eq!(1_i64 - Rational::new(1, 3), Rational::new(2, 3));
}

#[test]
fn absolute_value() {
    assert_eq!(Rational::new(-3, 4).abs(), Rational::new(3, 4));
    assert_eq!(Rational::new(3, -4).abs(), Rational::new(3, 4));
}

#[test]
fn mixed_enum_expression() {
    // (2 + 1/2) * 2/5 = 1
    let x = (Number::I64(2) + Number::Rational(Rational::new(1, 2)))
        * Number::Rational(Rational::new(2, 5));
    assert_eq!(x, Number::Rational(Rational::one()));
}

#[test]
fn unpacking() {
    let r = Rational::new(9, -6);
    let (z, n) = r.parts();
    assert_eq!((z, n), (-3, 2));
    // iteration restarts from the top every time
    assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![-3, 2]);
    assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![-3, 2]);
}
