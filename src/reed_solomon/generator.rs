//! Generator polynomial derivation
//!
//! g(x) = (x - α^0)(x - α^1)...(x - α^(n-1)), expanded one factor at a time.
//! Used to cross-check the fixed configuration table.

use crate::galois::Gf256;

/// Coefficients of the degree-`degree` generator polynomial, highest order
/// first, including the leading 1.
pub fn generator_polynomial(degree: usize) -> Vec<Gf256> {
    let mut poly = vec![Gf256::ONE];

    for i in 0..degree {
        let root = Gf256::alpha_pow(i as u32);
        let mut next = vec![Gf256::ZERO; poly.len() + 1];
        for (j, &coefficient) in poly.iter().enumerate() {
            next[j] += coefficient;
            next[j + 1] += coefficient * root;
        }
        poly = next;
    }

    poly
}

/// Generator polynomial in the table's log form: exponents of α with the
/// leading coefficient dropped. `None` if the degree is out of range or a
/// coefficient is zero.
pub fn generator_log_form(degree: usize) -> Option<Vec<u8>> {
    if degree == 0 || degree > 254 {
        return None;
    }

    generator_polynomial(degree)
        .iter()
        .skip(1)
        .map(Gf256::log)
        .collect()
}
