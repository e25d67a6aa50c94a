//! Order reduction: turn a generator equivalent to RM(r,m) into one
//! equivalent to RM(d,m) with d = gcd(m-1, r), by combining Schur
//! products (order i, order j -> order i+j) and orthogonal complements
//! (order i -> order m-1-i) along a Bezout identity for (m-1, r).

use super::error::AttackError;
use super::schur::{schur_power, schur_product};
use crate::gf2::Gf2Matrix;

/// Extended Euclid: returns (x, y, d) with a*x + b*y = d = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut r_prev, mut r_cur) = (a, b);
    let (mut x_prev, mut x_cur) = (1i64, 0i64);
    let (mut y_prev, mut y_cur) = (0i64, 1i64);
    while r_cur != 0 {
        let q = r_prev / r_cur;
        (r_prev, r_cur) = (r_cur, r_prev - q * r_cur);
        (x_prev, x_cur) = (x_cur, x_prev - q * x_cur);
        (y_prev, y_cur) = (y_cur, y_prev - q * y_cur);
    }
    (x_prev, y_prev, r_prev)
}

/// The a > 0, b < 0 case of the reduction: with q = ceil(-b/a) and
/// s = q*a + b (s >= 0 by choice of q), the code of order
/// a*(m-1) + b*r is obtained as
/// ((G^q)^perp)^a, Schur-multiplied with G^s when s > 0.
pub fn positive_a_case(a: i64, b: i64, generator: &Gf2Matrix) -> Gf2Matrix {
    debug_assert!(a > 0 && b < 0, "wrong sign pattern");
    let q = (-b + a - 1) / a;
    let s = q * a + b;

    let reduced = schur_power(
        &schur_power(generator, q as usize).orthogonal_complement(),
        a as usize,
    );
    if s == 0 {
        reduced
    } else {
        schur_product(&reduced, &schur_power(generator, s as usize))
    }
}

/// Given Bezout coefficients (a, b) for gcd(m-1, r) = d and a generator
/// equivalent to RM(r,m), produce a generator equivalent to RM(d,m).
pub fn generate_rm_d(generator: &Gf2Matrix, a: i64, b: i64) -> Result<Gf2Matrix, AttackError> {
    if a == 0 && b == 1 {
        return Ok(generator.clone());
    }
    if a > 0 && b < 0 {
        return Ok(positive_a_case(a, b, generator));
    }
    if a < 0 && b > 0 {
        return Ok(positive_a_case(1 - a, -b, generator).orthogonal_complement());
    }
    Err(AttackError::InvalidParameter(format!(
        "unexpected Bezout coefficients a={a}, b={b}"
    )))
}
