use std::fmt::Display;
use itertools::Itertools;
use num_traits::{One, Zero};

// `c x^d`, with the coefficient dropped when it is exactly 1.
pub fn term<R>(c: &R, d: usize) -> String
where R: Display + One + PartialEq {
    if d == 0 {
        return c.to_string()
    }

    let c = if c.is_one() {
        String::new()
    } else {
        c.to_string()
    };

    if d == 1 {
        format!("{c}x")
    } else {
        format!("{c}x^{d}")
    }
}

// `coeffs[i]` is the coefficient of x^i. Zero terms are skipped and the rest
// are listed from the highest degree down.
pub fn poly<R>(coeffs: &[R]) -> String
where R: Display + Zero + One + PartialEq {
    let terms = coeffs.iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .map(|(d, c)| term(c, d))
        .collect_vec();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.into_iter().rev().join(" + ")
    }
}
