use std::any::type_name;

use crate::{Coeff, CoeffOps, Error, Result};
use super::poly::{Polynomial, POLY_NAME};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, derive_more::Display)]
pub enum BinOp {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
}

/// An operand whose kind is only known at runtime.
///
/// Arithmetic between operands goes through [`Operand::binop`], which tries
/// the polynomial on the left, then the polynomial on the right, then plain
/// scalar arithmetic, and otherwise fails with
/// [`Error::UnsupportedOperand`].
#[derive(Clone, PartialEq, Debug)]
pub enum Operand<R> {
    Poly(Polynomial<R>),
    Scalar(R),
    Unsupported(&'static str),
}

impl<R> Operand<R> {
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported(type_name::<T>())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Poly(_) => POLY_NAME,
            Self::Scalar(_) => type_name::<R>(),
            Self::Unsupported(name) => *name,
        }
    }
}

impl<R> From<Polynomial<R>> for Operand<R> {
    fn from(p: Polynomial<R>) -> Self {
        Self::Poly(p)
    }
}

impl<R> Operand<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    pub fn binop(lhs: &Self, op: BinOp, rhs: &Self) -> Result<Self> {
        use Operand::*;

        match (lhs, rhs) {
            (Poly(p), _) => p.apply(op, rhs).map(Poly),
            (_, Poly(q)) => q.apply_rev(op, lhs).map(Poly),
            (Scalar(a), Scalar(b)) => Ok(Scalar(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
            })),
            _ => Err(Error::UnsupportedOperand {
                op,
                lhs: lhs.type_name().to_string(),
                rhs: rhs.type_name().to_string()
            })
        }
    }
}

impl<R> Polynomial<R>
where R: Coeff, for<'x> &'x R: CoeffOps<R> {
    /// `self op rhs`.
    pub fn apply(&self, op: BinOp, rhs: &Operand<R>) -> Result<Self> {
        match rhs {
            Operand::Poly(q) => Ok(match op {
                BinOp::Add => self + q,
                BinOp::Sub => self - q,
                BinOp::Mul => self * q,
            }),
            Operand::Scalar(r) => Ok(match op {
                BinOp::Add => self + r,
                BinOp::Sub => self - r,
                BinOp::Mul => self * r,
            }),
            Operand::Unsupported(name) => Err(Error::UnsupportedOperand {
                op,
                lhs: POLY_NAME.to_string(),
                rhs: name.to_string()
            })
        }
    }

    /// `lhs op self`.
    pub fn apply_rev(&self, op: BinOp, lhs: &Operand<R>) -> Result<Self> {
        match lhs {
            Operand::Poly(p) => Ok(match op {
                BinOp::Add => p + self,
                BinOp::Sub => p - self,
                BinOp::Mul => p * self,
            }),
            Operand::Scalar(r) => Ok(match op {
                BinOp::Add => self + r,
                BinOp::Sub => -self + r,
                BinOp::Mul => self * r,
            }),
            Operand::Unsupported(name) => Err(Error::UnsupportedOperand {
                op,
                lhs: name.to_string(),
                rhs: POLY_NAME.to_string()
            })
        }
    }
}
