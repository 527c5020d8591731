use std::ops::{Add, Sub, Mul};
use super::poly::Polynomial;

// Scalar on the left: `a + f = f + a`, `a - f = (-f) + a`, `a * f = f * a`.
// A blanket impl over `R` is ruled out by coherence, hence the macro.

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => { $(
        impl Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn add(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Add<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn add(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: Polynomial<$t>) -> Self::Output {
                -rhs + self
            }
        }

        impl Sub<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: &Polynomial<$t>) -> Self::Output {
                -rhs + self
            }
        }

        impl Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn mul(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn mul(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs * self
            }
        }
    )* };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, f32, f64);

cfg_if::cfg_if! {
    if #[cfg(feature = "bigint")] {
        use num_bigint::BigInt;
        impl_scalar_lhs!(BigInt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = Polynomial<i32>;

    #[test]
    fn add() {
        let f = P::new(vec![2, 1]);
        assert_eq!(3 + &f, P::new(vec![5, 1]));
        assert_eq!(3 + &f, &f + 3);
        assert_eq!(0 + f.clone(), f);
    }

    #[test]
    fn sub() {
        let f = P::new(vec![2, 1, -4]);
        assert_eq!(3 - &f, P::new(vec![1, -1, 4]));
        assert_eq!(3 - f, P::new(vec![1, -1, 4]));
    }

    #[test]
    fn mul() {
        let f = P::new(vec![2, 3]);
        assert_eq!(0 * &f, P::new(vec![0, 0]));
        assert_eq!(2 * f, P::new(vec![4, 6]));
    }

    #[test]
    fn f64() {
        let f = Polynomial::new(vec![0.5, 2.0]);
        assert_eq!(1.0 - &f, Polynomial::new(vec![0.5, -2.0]));
        assert_eq!(2.0 * &f, Polynomial::new(vec![1.0, 4.0]));
    }

    #[test]
    #[cfg(feature = "bigint")]
    fn bigint() {
        let f = Polynomial::new(vec![BigInt::from(1), BigInt::from(2)]);
        let g = BigInt::from(10) * &f;
        assert_eq!(g, Polynomial::new(vec![BigInt::from(10), BigInt::from(20)]));
        assert_eq!(g.eval(&BigInt::from(3)), BigInt::from(70));
    }
}
