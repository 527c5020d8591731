use crate::BinOp;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    #[display("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperand { op: BinOp, lhs: String, rhs: String },

    #[display("polynomial must have at least one coefficient")]
    EmptyCoeffs,

    #[display("negative exponent: {_0}")]
    NegativeExponent(i64),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
