mod coeff;

pub use coeff::*;
