use std::fmt::{Display, Debug};
use std::iter::{Sum, Product};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use delegate::delegate;
use itertools::Itertools;
use log::trace;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::{Coeff, CoeffOps, Error, Result};
use crate::util::format;

pub(crate) const POLY_NAME: &str = "Polynomial";

// A univariate polynomial stored as its coefficient list, `coeffs[i]` being
// the coefficient of x^i. The list is kept exactly as built: trailing zeros
// are never trimmed, so equality and `degree` see the stored length.

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<R>", into = "Vec<R>"))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "R: serde::Serialize + Clone",
    deserialize = "R: serde::Deserialize<'de>"
)))]
pub struct Polynomial<R> {
    coeffs: Vec<R>
}

impl<R> Polynomial<R> {
    /// Panics if `coeffs` is empty. See [`Polynomial::try_new`].
    pub fn new(coeffs: Vec<R>) -> Self {
        assert!(!coeffs.is_empty(), "polynomial must have at least one coefficient");
        Self { coeffs }
    }

    pub fn try_new(coeffs: Vec<R>) -> Result<Self> {
        if coeffs.is_empty() {
            Err(Error::EmptyCoeffs)
        } else {
            Ok(Self { coeffs })
        }
    }

    pub fn from_const(r: R) -> Self {
        Self::new(vec![r])
    }

    /// Number of stored coefficients minus one. Trailing zero coefficients
    /// count, so this is not necessarily the mathematical degree.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    delegate! {
        to self.coeffs {
            #[call(len)]
            pub fn ncoeffs(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, R>;
        }
    }

    pub fn const_term(&self) -> &R {
        &self.coeffs[0]
    }

    pub fn lead_coeff(&self) -> &R {
        &self.coeffs[self.degree()]
    }

    pub fn into_inner(self) -> Vec<R> {
        self.coeffs
    }

    pub fn map_coeffs<R2, F>(&self, f: F) -> Polynomial<R2>
    where F: Fn(&R) -> R2 {
        Polynomial::new(self.coeffs.iter().map(f).collect())
    }
}

impl<R> Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    pub fn variable() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Value at `x`, summing `coeffs[i] * x^i` from `R::zero()`.
    pub fn eval(&self, x: &R) -> R {
        self.coeffs.iter().enumerate().fold(R::zero(), |acc, (i, c)| {
            acc + c * &num_traits::pow(x.clone(), i)
        })
    }

    /// Substitutes `q` for x, i.e. `Σ coeffs[i] * q^i`.
    pub fn compose(&self, q: &Self) -> Self {
        self.coeffs.iter().enumerate().fold(Self::zero(), |acc, (i, c)| {
            acc + q.pow(i) * c
        })
    }

    pub fn dx(&self) -> Self {
        let one = R::one();
        let scaled = itertools::iterate(R::zero(), |k| k + &one)
            .zip(self.coeffs.iter())
            .map(|(k, c)| k * c)
            .collect_vec();

        if self.degree() == 0 {
            // d/dx c = 0, kept as a single coefficient.
            Self::new(scaled)
        } else {
            Self::new(scaled.into_iter().skip(1).collect())
        }
    }

    pub fn try_pow(&self, n: i64) -> Result<Self> {
        if n < 0 {
            Err(Error::NegativeExponent(n))
        } else {
            Ok(self.pow(n as u64))
        }
    }

    // (Σ a_i x^i) * g = Σ x^i (a_i g), accumulated with `+`.
    fn convolve(&self, rhs: &Self) -> Self {
        let a0 = self.const_term();
        let mut res = Self::new(rhs.coeffs.iter().map(|b| a0 * b).collect());

        for (i, a) in self.coeffs.iter().enumerate().skip(1) {
            let shifted = itertools::repeat_n(R::zero(), i)
                .chain(rhs.coeffs.iter().map(|b| a * b))
                .collect();
            res += Self::new(shifted);
        }

        res
    }
}

pub fn derivative<R>(p: &Polynomial<R>) -> Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    p.dx()
}

impl<R> TryFrom<Vec<R>> for Polynomial<R> {
    type Error = Error;

    fn try_from(coeffs: Vec<R>) -> Result<Self> {
        Self::try_new(coeffs)
    }
}

impl<R> From<Polynomial<R>> for Vec<R> {
    fn from(p: Polynomial<R>) -> Self {
        p.coeffs
    }
}

impl<R> FromIterator<R> for Polynomial<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Polynomial<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<R> Display for Polynomial<R>
where R: Display + Zero + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format::poly(&self.coeffs))
    }
}

impl<R> Debug for Polynomial<R>
where R: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{POLY_NAME}({:?})", self.coeffs)
    }
}

impl<R> Zero for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn zero() -> Self {
        Self::from_const(R::zero())
    }

    // true for [0, 0, ...] of any length, even though only [0] == zero().
    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }
}

impl<R> One for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }
}

impl<R> Neg for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    type Output = Polynomial<R>;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|c| -c)
    }
}

#[auto_ops]
impl<R> AddAssign<&Polynomial<R>> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn add_assign(&mut self, rhs: &Polynomial<R>) {
        let common = self.degree().min(rhs.degree()) + 1;
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = &*a + b;
        }
        self.coeffs.extend(rhs.coeffs[common..].iter().cloned());
    }
}

#[auto_ops]
impl<R> SubAssign<&Polynomial<R>> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn sub_assign(&mut self, rhs: &Polynomial<R>) {
        let common = self.degree().min(rhs.degree()) + 1;
        let shorter = self.degree() < rhs.degree();
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = &*a - b;
        }
        if shorter {
            self.coeffs.extend(rhs.coeffs[common..].iter().map(|c| -c));
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&Polynomial<R>> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn mul_assign(&mut self, rhs: &Polynomial<R>) {
        trace!("mul: {} x {} coeffs", self.ncoeffs(), rhs.ncoeffs());
        *self = self.convolve(rhs)
    }
}

// scalars act on the constant term for `+` and `-`, on every term for `*`.

#[auto_ops]
impl<R> AddAssign<&R> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn add_assign(&mut self, rhs: &R) {
        self.coeffs[0] = &self.coeffs[0] + rhs;
    }
}

#[auto_ops]
impl<R> SubAssign<&R> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn sub_assign(&mut self, rhs: &R) {
        self.coeffs[0] = &self.coeffs[0] - rhs;
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        for a in self.coeffs.iter_mut() {
            *a = rhs * &*a;
        }
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<R> Pow<$t> for &Polynomial<R>
        where R: Coeff, for<'x> &'x R: CoeffOps<R> {
            type Output = Polynomial<R>;
            fn pow(self, n: $t) -> Self::Output {
                trace!("pow: {} coeffs, n = {n}", self.ncoeffs());
                let mut res = Polynomial::<R>::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

// negative exponents panic; use `try_pow` to get an `Err` instead.
macro_rules! impl_pow_signed {
    ($t:ty) => {
        impl<R> Pow<$t> for &Polynomial<R>
        where R: Coeff, for<'x> &'x R: CoeffOps<R> {
            type Output = Polynomial<R>;
            fn pow(self, n: $t) -> Self::Output {
                match self.try_pow(n as i64) {
                    Ok(res) => res,
                    Err(e) => panic!("{e}")
                }
            }
        }
    };
}

impl_pow_signed!(i32);
impl_pow_signed!(i64);
impl_pow_signed!(isize);

impl<R> Sum for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a, R> Sum<&'a Polynomial<R>> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn sum<I: Iterator<Item = &'a Polynomial<R>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<R> Product for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}

impl<'a, R> Product<&'a Polynomial<R>> for Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    fn product<I: Iterator<Item = &'a Polynomial<R>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}
