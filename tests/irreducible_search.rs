//! Irreducibility test and search, checked against brute-force trial division.

use std::sync::atomic::AtomicBool;

use gfpk::{
    find_irreducible, is_irreducible, FieldError, IrreducibleSearch, ModulusError,
    MonicCandidates, Poly,
};

/// Every monic polynomial of degree `d` over F_p, zero constant term included.
fn all_monic(p: u64, d: usize) -> Vec<Poly> {
    let count = p.pow(d as u32);
    (0..count)
        .map(|mut n| {
            let mut coeffs = Vec::with_capacity(d + 1);
            for _ in 0..d {
                coeffs.push(n % p);
                n /= p;
            }
            coeffs.push(1);
            Poly::new(p, coeffs)
        })
        .collect()
}

/// Irreducible iff no monic factor of degree 1..=k/2 divides it.
fn irreducible_by_trial_division(f: &Poly) -> bool {
    let k = f.degree().unwrap();
    (1..=k / 2).all(|d| {
        all_monic(f.p(), d)
            .iter()
            .all(|g| !f.rem(g).unwrap().is_zero())
    })
}

#[test]
fn rabin_agrees_with_trial_division() {
    for (p, max_k) in [(2, 6), (3, 4), (5, 3), (7, 2)] {
        for k in 1..=max_k {
            for f in all_monic(p, k) {
                assert_eq!(
                    is_irreducible(&f, p, k).unwrap(),
                    irreducible_by_trial_division(&f),
                    "disagreement on {} over F_{}",
                    f,
                    p
                );
            }
        }
    }
}

#[test]
fn irreducible_counts_match_gauss_formula() {
    // number of monic irreducibles of degree k over F_p
    let expected = [
        (2, 2, 1),
        (2, 3, 2),
        (2, 4, 3),
        (2, 5, 6),
        (2, 6, 9),
        (3, 2, 3),
        (3, 3, 8),
        (5, 2, 10),
    ];
    for (p, k, count) in expected {
        let found = all_monic(p, k)
            .iter()
            .filter(|f| is_irreducible(f, p, k).unwrap())
            .count();
        assert_eq!(found, count, "p = {}, k = {}", p, k);
    }
}

#[test]
fn find_returns_first_irreducible_candidate() {
    for (p, k) in [(2, 2), (2, 3), (2, 8), (3, 3), (5, 2), (7, 3), (11, 2)] {
        let found = find_irreducible(p, k).unwrap();
        let first = MonicCandidates::new(p, k)
            .find(irreducible_by_trial_division)
            .unwrap();
        assert_eq!(found, first, "p = {}, k = {}", p, k);
    }
}

#[test]
fn find_is_deterministic() {
    assert_eq!(find_irreducible(13, 4), find_irreducible(13, 4));
}

#[test]
fn find_degree_one_is_x() {
    for p in [2, 3, 97] {
        assert_eq!(find_irreducible(p, 1).unwrap(), Poly::x(p));
    }
}

#[test]
fn find_larger_parameters() {
    let f = find_irreducible(65_537, 4).unwrap();
    assert_eq!(f.degree(), Some(4));
    assert!(f.is_monic());
    assert!(f.is_irreducible());

    let g = find_irreducible(2, 16).unwrap();
    assert_eq!(g.degree(), Some(16));
    assert!(g.is_irreducible());
}

#[test]
fn degree_zero_rejected() {
    assert_eq!(
        find_irreducible(3, 0),
        Err(FieldError::InvalidModulus(ModulusError::ZeroDegree))
    );
}

#[test]
fn cancelled_search() {
    let cancel = AtomicBool::new(true);
    assert_eq!(
        IrreducibleSearch::new(5, 6).with_cancel(&cancel).run(),
        Err(FieldError::Cancelled)
    );
}

#[test]
fn candidates_skip_multiples_of_x() {
    assert!(MonicCandidates::new(3, 4).all(|f| f.coeff(0) != 0));
    // degree one keeps x, which is irreducible
    assert_eq!(MonicCandidates::new(3, 1).next(), Some(Poly::x(3)));
}

#[cfg(feature = "std")]
#[test]
fn cache_survives_clear_semantics() {
    use std::sync::Arc;

    let first = gfpk::cached_modulus(17, 3).unwrap();
    assert_eq!(first.poly(), &find_irreducible(17, 3).unwrap());
    assert!(Arc::ptr_eq(&first, &gfpk::cached_modulus(17, 3).unwrap()));

    gfpk::cache::clear();
    assert!(!gfpk::cache::is_cached(17, 3));

    // a fresh modulus, equal in value
    let second = gfpk::cached_modulus(17, 3).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}
