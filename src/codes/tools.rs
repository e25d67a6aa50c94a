//! Code-level helpers shared by the attack engines.

use crate::gf2::{Gf2Matrix, Gf2Vector};

/// Basis of the subcode of codewords vanishing on `support`.
///
/// Coordinates are kept in place (columns are not deleted) so that
/// indices of the shortened code line up with the original coordinate
/// space; the subcode-recovery engine relies on this when it unions
/// recovered inner sets with the shortening support.
pub fn shorten(generator: &Gf2Matrix, support: &[usize]) -> Gf2Matrix {
    let eliminated = generator.gaussian_elimination(Some(support));
    let rows: Vec<Gf2Vector> = eliminated
        .rows
        .iter()
        .filter(|row| !row.is_zero() && support.iter().all(|&c| !row.get(c)))
        .cloned()
        .collect();
    Gf2Matrix {
        rows,
        ncols: generator.ncols,
    }
}

/// Basis of the span of the union of two bases.
pub fn union(a: &Gf2Matrix, b: &Gf2Matrix) -> Gf2Matrix {
    if a.nrows() == 0 {
        return b.echelon_basis();
    }
    assert_eq!(a.ncols, b.ncols, "length mismatch");
    let mut rows = a.rows.clone();
    rows.extend(b.rows.iter().cloned());
    Gf2Matrix {
        rows,
        ncols: a.ncols,
    }
    .echelon_basis()
}
