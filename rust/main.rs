use ratiolib::rational::{Number, NumberOps, Rational};

fn ops<T>(a: &T, b: &T) -> T
where
    T: NumberOps<T>,
    for<'a> &'a T: NumberOps<T>,
{
    &(&(&(a + b) - a) * b) / a
}

fn main() {
    let a1 = Rational::new(2, 3);
    let b1 = Rational::new(7, 2);
    let a2 = Number::Rational(a1);
    let b2 = Number::Rational(b1);

    println!("{}", ops(&a1, &b1));
    println!("{:?}", ops(&a2, &b2));

    // let now = SystemTime::now();
    //
    // for _i in 0..10000 {
    //     let _ = ops(&a0, &b0);
    // }
    // println!("{:.5?} time taken for i64", now.elapsed());
    //
    // for _i in 0..10000 {
    //     let _ = ops(&a1, &b1);
    // }
    // println!("{:.5?} time taken for Rational", now.elapsed());
    //
    // for _i in 0..10000 {
    //     let _ = ops(&a2, &b2);
    // }
    // println!("{:.5?} time taken for Number Rational wrapper", now.elapsed());
}
