use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use num_traits::Num;

impl Num for Rational {
    // PartialEq + Zero + One + NumOps (Add + Sub + Mul + Div + Rem)
    type FromStrRadixErr = String;
    fn from_str_radix(_src: &str, _radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Err("No implementation for string radix for Rational".to_string())
    }
}

impl Num for Number {
    type FromStrRadixErr = String;
    fn from_str_radix(_src: &str, _radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Err("No implementation for string radix for Number".to_string())
    }
}
