use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};
use num_traits::{One, Zero};

// Coefficient domains

pub trait CoeffOps<T = Self>:
    Sized +
    Add<T, Output = T> +
    for<'a> Add<&'a T, Output = T> +
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T> +
    Mul<T, Output = T> +
    for<'a> Mul<&'a T, Output = T> +
    Neg<Output = T>
{}

/// A numeric domain usable as polynomial coefficients.
///
/// Implemented for the signed primitive integers, `f32`, `f64` and, with the
/// `bigint` feature, `BigInt`. Bounds on `&R` cannot be stated as
/// supertraits, so users write `R: Coeff, for<'x> &'x R: CoeffOps<R>`.
pub trait Coeff:
    Clone +
    PartialEq +
    Display +
    Debug +
    Zero +
    One +
    CoeffOps
where
    for<'a> &'a Self: CoeffOps<Self>
{}

macro_rules! impl_coeff {
    ($($type:ty),*) => { $(
        impl CoeffOps for $type {}
        impl<'a> CoeffOps<$type> for &'a $type {}
        impl Coeff for $type {}
    )* };
}

impl_coeff!(i8, i16, i32, i64, i128, isize, f32, f64);

cfg_if::cfg_if! {
    if #[cfg(feature = "bigint")] {
        use num_bigint::BigInt;
        impl_coeff!(BigInt);
    }
}
