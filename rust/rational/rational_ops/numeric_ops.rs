use crate::rational::enums::Number;
use crate::rational::rational::Rational;
use std::ops::{Add, Div, Mul, Sub};

pub trait NumberOps<T>:
    Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Sized + Clone
{
}
impl<'a, T: 'a> NumberOps<T> for &'a T where
    &'a T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>
{
}
impl NumberOps<Rational> for Rational {}
impl NumberOps<i64> for i64 {}
impl NumberOps<Number> for Number {}
