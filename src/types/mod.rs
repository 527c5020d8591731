mod poly;
mod operand;
mod scalar;

pub use poly::*;
pub use operand::*;
