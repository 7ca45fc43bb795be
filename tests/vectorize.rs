//! Integration tests for the broadcasting adapter

mod common;

use common::assert_allclose_f64;
use numr_special::dtype::{Complex128, DType, Scalar};
use numr_special::error::Error;
use numr_special::tensor::NdArray;
use numr_special::vectorize::Vectorized;
use std::sync::atomic::{AtomicUsize, Ordering};

fn sub_or_add(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { a + b }
}

// ============================================================================
// Broadcasting
// ============================================================================

#[test]
fn test_scalar_stretches_over_vector() {
    let f = Vectorized::new(sub_or_add);
    let out = f.call((vec![1.0, 2.0, 3.0, 4.0], 2.0)).unwrap();
    assert_eq!(out.shape(), &[4]);
    assert_eq!(out.to_f64_vec().unwrap(), vec![3.0, 4.0, 1.0, 2.0]);
}

#[test]
fn test_row_and_column_broadcast() {
    let f = Vectorized::new(|a: f64, b: f64| 10.0 * a + b);
    let column = vec![vec![1.0], vec![2.0]];
    let row = vec![0.0, 1.0, 2.0];
    let out = f.call((column, row)).unwrap();
    assert_eq!(out.shape(), &[2, 3]);
    assert_eq!(
        out.to_f64_vec().unwrap(),
        vec![10.0, 11.0, 12.0, 20.0, 21.0, 22.0]
    );
}

#[test]
fn test_incompatible_shapes() {
    let f = Vectorized::new(sub_or_add);
    let err = f.call((vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0])).unwrap_err();
    assert!(matches!(err, Error::BroadcastError { .. }));
}

#[test]
fn test_zero_size_never_invokes() {
    let calls = AtomicUsize::new(0);
    let f = Vectorized::new(|a: f64, b: f64| {
        calls.fetch_add(1, Ordering::Relaxed);
        a + b
    });
    let empty = NdArray::<f64>::zeros(&[0, 3]);
    let out = f.call((empty, 1.0)).unwrap();
    assert_eq!(out.shape(), &[0, 3]);
    assert!(out.to_scalars().is_empty());
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_scalar_in_scalar_out() {
    let f = Vectorized::new(sub_or_add);
    let out = f.call((5.0, 1.0)).unwrap();
    assert!(out.is_scalar());
    assert_eq!(out.as_f64(), Some(4.0));
}

#[test]
fn test_size_one_axes_are_kept() {
    let f = Vectorized::new(|x: f64| x + 1.0);
    let out = f.call((vec![vec![1.0, 2.0, 3.0]],)).unwrap();
    assert!(!out.is_scalar());
    assert_eq!(out.shape(), &[1, 3]);
    let single = f.call((vec![vec![1.0]],)).unwrap();
    assert_eq!(single.shape(), &[1, 1]);
}

#[test]
fn test_row_major_order() {
    let seen = parking_lot::Mutex::new(Vec::new());
    let f = Vectorized::new(|a: i64, b: i64| {
        seen.lock().push((a, b));
        a * b
    })
    .with_parallel_min_len(usize::MAX);
    f.call((vec![1, 2], vec![vec![3], vec![4]])).unwrap();
    assert_eq!(*seen.lock(), vec![(1, 3), (2, 3), (1, 4), (2, 4)]);
}

// ============================================================================
// Output type
// ============================================================================

#[test]
fn test_typecode_coerces_output() {
    let f = Vectorized::from_typecode(|x: f64| x * 2.0, Some("D"), Some("double it")).unwrap();
    let out = f.call((vec![1.0, 2.5],)).unwrap();
    assert_eq!(out.dtype(), DType::Complex128);
    assert_eq!(
        out.to_scalars(),
        vec![
            Scalar::Complex128(Complex128::new(2.0, 0.0)),
            Scalar::Complex128(Complex128::new(5.0, 0.0)),
        ]
    );
    assert_eq!(f.doc(), Some("double it"));
}

#[test]
fn test_explicit_otype_and_doc() {
    let f = Vectorized::new(|x: i64| x * 3)
        .with_otype(DType::F64)
        .with_doc("triple");
    let out = f.call((vec![1, 2],)).unwrap();
    assert_eq!(out.dtype(), DType::F64);
    assert_eq!(out.to_f64_vec().unwrap(), vec![3.0, 6.0]);
    assert_eq!(f.doc(), Some("triple"));
}

#[test]
fn test_unknown_typecode_is_configuration_error() {
    let err = Vectorized::from_typecode(|x: f64| x, Some("x"), None).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_inferred_type_is_cached() {
    let f = Vectorized::new(|x: i64| x + 1);
    assert_eq!(f.inferred_otype(), None);
    let out = f.call((vec![1, 2, 3],)).unwrap();
    assert_eq!(out.dtype(), DType::I64);
    assert_eq!(f.inferred_otype(), Some(DType::I64));
}

#[test]
fn test_errors_abort_the_call() {
    let f = Vectorized::new(|x: f64| -> numr_special::error::Result<f64> {
        if x < 0.0 {
            Err(Error::domain("x", "negative"))
        } else {
            Ok(x.sqrt())
        }
    });
    assert!(f.call((vec![4.0, -1.0, 9.0],)).is_err());
    let out = f.call((vec![4.0, 9.0],)).unwrap();
    assert_allclose_f64(&out.to_f64_vec().unwrap(), &[2.0, 3.0], 0.0, 0.0, "sqrt");
}

#[test]
fn test_parallel_matches_sequential() {
    let xs: Vec<f64> = (0..10_000).map(|k| k as f64 * 1e-3).collect();
    let serial = Vectorized::new(|x: f64| x.sin() * x).with_parallel_min_len(usize::MAX);
    let parallel = Vectorized::new(|x: f64| x.sin() * x).with_parallel_min_len(64);
    let a = serial.call((xs.clone(),)).unwrap();
    let b = parallel.call((xs,)).unwrap();
    assert_eq!(a, b);
}
