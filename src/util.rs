//! Comparison helpers shared by unit tests, integration tests and benches.

use crate::points::ComplexMatrix;
use float_cmp::{approx_eq, F64Margin};
use num::complex::Complex64;

/// Absolute tolerance used when comparing values that went through text.
pub const ROUND_TRIP_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-5,
    ulps: 4,
};

pub fn comp_line(exemplar: &str, calc: &str, test: &str) {
    let mut i: usize = 0;
    let mut exemplar_iter = exemplar.lines();
    let mut calc_iter = calc.lines();
    loop {
        let (exemplar_line, calc_line) = match (exemplar_iter.next(), calc_iter.next()) {
            (None, None) => break,
            (Some(e), Some(c)) => (e, c),
            _ => panic!("test {} number of lines does not match >{}", test, i),
        };
        i += 1;
        assert!(
            exemplar_line == calc_line,
            "test {} line {} does not match\n  exemplar: {}\n      calc: {}",
            test,
            i,
            exemplar_line,
            calc_line
        );
    }
}

pub fn comp_matrix(
    exemplar: &ComplexMatrix,
    calc: &ComplexMatrix,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(exemplar.dim(), calc.dim(), "test {} dimensions", test);
    for ((i, j, k), c) in calc.indexed_iter() {
        comp_c64(
            &exemplar[[i, j, k]],
            c,
            precision,
            test,
            &format!("({},{},{})", i, j, k),
        );
    }
}

pub fn comp_vec_f64(exemplar: &[f64], calc: &[f64], precision: F64Margin, test: &str) {
    assert_eq!(exemplar.len(), calc.len(), "test {} lengths", test);
    for k in 0..calc.len() {
        comp_f64(&exemplar[k], &calc[k], precision, test, &format!("({})", k));
    }
}

pub fn comp_c64(
    exemplar: &Complex64,
    calc: &Complex64,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &exemplar.re,
        &calc.re,
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &exemplar.im,
        &calc.im,
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}
