use cb4rm::codes::rm;
use cb4rm::gf2::Gf2Vector;

#[test]
fn dimensions_match_closed_form() {
    assert_eq!(rm::dimension(1, 4), 5);
    assert_eq!(rm::dimension(2, 5), 16);
    assert_eq!(rm::dimension(3, 6), 42);
    for (r, m) in [(1usize, 4usize), (2, 5), (2, 6), (3, 6)] {
        let g = rm::generator(r, m);
        assert_eq!(g.nrows(), rm::dimension(r, m));
        assert_eq!(g.ncols, 1 << m);
        assert_eq!(g.rank(), g.nrows(), "generator rows dependent");
    }
}

#[test]
fn first_row_is_all_ones() {
    let g = rm::generator(2, 5);
    assert_eq!(g.row(0), &Gf2Vector::ones(32));
}

#[test]
fn rm_1_4_weight_spectrum() {
    // RM(1,4) codewords have weight 0, 8 or 16
    let g = rm::generator(1, 4);
    let k = g.nrows();
    for mask in 0u32..(1 << k) {
        let mut cw = Gf2Vector::zero(16);
        for i in 0..k {
            if (mask >> i) & 1 == 1 {
                cw.xor_in_place(g.row(i));
            }
        }
        assert!(matches!(cw.weight(), 0 | 8 | 16), "weight {}", cw.weight());
    }
}

#[test]
fn minimum_distance_of_rm_2_5() {
    // min distance 2^(m-r) = 8: no nonzero codeword lighter than 8
    let g = rm::generator(2, 5);
    let k = g.nrows();
    for mask in 1u32..(1 << k) {
        let mut cw = Gf2Vector::zero(32);
        for i in 0..k {
            if (mask >> i) & 1 == 1 {
                cw.xor_in_place(g.row(i));
            }
        }
        assert!(cw.weight() >= 8);
    }
}

#[test]
fn dual_of_rm_is_rm() {
    // RM(r,m)^perp = RM(m-1-r, m)
    for (r, m) in [(1usize, 3usize), (1, 4), (2, 5), (2, 6)] {
        let dual = rm::generator(r, m).orthogonal_complement();
        let expected = rm::generator(m - 1 - r, m);
        assert_eq!(dual.echelon_basis(), expected.echelon_basis());
    }
}
