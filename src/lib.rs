mod abst;
mod types;
mod error;

pub use abst::*;
pub use types::*;
pub use error::*;

pub mod util;
