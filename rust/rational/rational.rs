use pyo3::exceptions::PyZeroDivisionError;
use pyo3::{pyclass, PyErr};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Greatest common divisor of two integers, by the Euclidean algorithm on
/// absolute values.
///
/// Defined for all inputs; `gcd(0, 0)` is 0.
pub fn gcd(x: i64, y: i64) -> i64 {
    let (mut x, mut y) = (x.abs(), y.abs());
    if x < y {
        std::mem::swap(&mut x, &mut y);
    }
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// An exact rational number data type with `i64` components.
///
/// Values are always held in canonical form: reduced to lowest terms with a
/// positive denominator. Every arithmetic operation returns a new canonical
/// `Rational`; there is no deferred normalization step.
#[pyclass(module = "ratiolib.rs")]
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Rational {
    pub(crate) numerator: i64,
    pub(crate) denominator: i64,
}

impl Rational {
    /// Constructs a new `Rational`, reducing to lowest terms and fixing the
    /// denominator sign.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero. Use [`Rational::try_new`] for a
    /// fallible constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ratiolib::rational::Rational;
    /// let x = Rational::new(2, 4);
    /// // x: (1/2)
    /// assert_eq!(x.parts(), (1, 2));
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self::normalized(numerator, denominator)
    }

    /// Constructs a new `Rational`.
    ///
    /// # Errors
    ///
    /// If `denominator` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ratiolib::rational::Rational;
    /// let x = Rational::try_new(3, -6).unwrap();
    /// // x: (-1/2)
    /// assert_eq!(x.parts(), (-1, 2));
    /// assert!(Rational::try_new(1, 0).is_err());
    /// ```
    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, PyErr> {
        if denominator == 0 {
            Err(PyZeroDivisionError::new_err("denominator cannot be zero"))
        } else {
            Ok(Self::normalized(numerator, denominator))
        }
    }

    /// Reduce by the gcd and make the denominator positive. The sole
    /// constructor through which operator results are materialized;
    /// `denominator` must already be nonzero.
    pub(crate) fn normalized(numerator: i64, denominator: i64) -> Self {
        let g = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / g, denominator / g);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Get the numerator of the canonical form.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Get the denominator of the canonical form. Always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Get both components, numerator first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ratiolib::rational::Rational;
    /// let (z, n) = Rational::new(9, 6).parts();
    /// assert_eq!((z, n), (3, 2));
    /// ```
    pub fn parts(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    /// `true` if the denominator of the canonical form is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// The value as a float, by true division.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The value truncated toward zero.
    pub fn to_i64(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Returns the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ratiolib::rational::Rational;
    /// let x = Rational::new(2, 3);
    /// assert_eq!(x.recip(), Rational::new(3, 2));
    /// ```
    pub fn recip(&self) -> Self {
        assert!(self.numerator != 0, "cannot take reciprocal of zero");
        Self::normalized(self.denominator, self.numerator)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }
}

/// Renders `(N)` when the denominator is 1, otherwise `(N/D)`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "({})", self.numerator)
        } else {
            write!(f, "({}/{})", self.numerator, self.denominator)
        }
    }
}

/// Yields the numerator then the denominator, so a value unpacks into its
/// two components. The value is `Copy`; iteration can be restarted at will.
impl IntoIterator for Rational {
    type Item = i64;
    type IntoIter = std::array::IntoIter<i64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.numerator, self.denominator].into_iter()
    }
}
