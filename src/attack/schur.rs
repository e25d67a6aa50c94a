//! The Schur ("circle-dot") product on generator matrices: the algebraic
//! multiplication underlying RM(i,m) * RM(j,m) = RM(min(i+j,m), m).

use crate::gf2::{Gf2Matrix, Gf2Vector};

/// Basis of the Schur product of the codes spanned by `g1` and `g2`:
/// every pairwise row AND, reduced to a linearly independent basis with
/// zero rows discarded.
pub fn schur_product(g1: &Gf2Matrix, g2: &Gf2Matrix) -> Gf2Matrix {
    assert_eq!(g1.ncols, g2.ncols, "length mismatch");
    let mut products: Vec<Gf2Vector> = Vec::with_capacity(g1.nrows() * g2.nrows());
    for row1 in &g1.rows {
        for row2 in &g2.rows {
            products.push(row1.and(row2));
        }
    }
    Gf2Matrix {
        rows: products,
        ncols: g1.ncols,
    }
    .echelon_basis()
}

/// e-fold Schur self-product of a code (e = 1 is the code itself).
pub fn schur_power(g: &Gf2Matrix, e: usize) -> Gf2Matrix {
    assert!(e >= 1, "power must be positive");
    let mut acc = g.clone();
    for _ in 1..e {
        acc = schur_product(&acc, g);
    }
    acc
}
