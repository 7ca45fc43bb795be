//! Derivatives of Bessel and Hankel functions of any order
//!
//! The n-th derivative follows
//!
//! ```text
//! F_v^(n)(z) = (F_{v-1}^(n-1)(z) - F_{v+1}^(n-1)(z)) / 2,   F_v^(0)(z) = F_v(z)
//! ```
//!
//! which costs 2^n base evaluations. With
//! [`SpecialOptions::memoize_derivatives`](super::SpecialOptions) set,
//! intermediate values are cached by `(family, v, z, n)` for the duration of
//! one call and the cost drops to O(n²).

use super::Special;
use crate::dtype::{FromScalar, IntoScalar, Scalar};
use crate::error::{Error, Result};
use crate::routines::Backend;
use crate::tensor::IntoOperand;
use crate::vectorize::Value;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::ops::{Div, Sub};

/// Which function a derivative recurrence expands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DerivativeKind {
    /// J_v
    J,
    /// Y_v
    Y,
    /// I_v
    I,
    /// K_v
    K,
    /// H1_v
    Hankel1,
    /// H2_v
    Hankel2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct DerivativeKey {
    kind: DerivativeKind,
    v: u64,
    z: u64,
    n: u32,
}

/// Recurrence values of one call, shared by every element it evaluates
type DerivativeMemo = Mutex<HashMap<DerivativeKey, Scalar>>;

fn check_order(n: i64) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::domain("n", "n must be a non-negative integer."))
}

impl<B: Backend> Special<B> {
    /// Fresh memo for one call, when memoization is enabled
    fn derivative_memo(&self) -> Option<DerivativeMemo> {
        self.options
            .memoize_derivatives
            .then(|| Mutex::new(HashMap::new()))
    }

    /// Recurrence for one point
    fn derivative<T>(
        &self,
        memo: Option<&DerivativeMemo>,
        kind: DerivativeKind,
        base: &(dyn Fn(f64, f64) -> Result<T> + Sync),
        v: f64,
        z: f64,
        n: u32,
    ) -> Result<T>
    where
        T: Copy + Sub<Output = T> + Div<f64, Output = T> + FromScalar + IntoScalar,
    {
        if n == 0 {
            return base(v, z);
        }
        let key = DerivativeKey {
            kind,
            v: v.to_bits(),
            z: z.to_bits(),
            n,
        };
        if let Some(memo) = memo {
            let hit = memo.lock().get(&key).copied();
            if let Some(hit) = hit {
                return T::from_scalar(hit);
            }
        }
        let lower = self.derivative(memo, kind, base, v - 1.0, z, n - 1)?;
        let upper = self.derivative(memo, kind, base, v + 1.0, z, n - 1)?;
        let value = (lower - upper) / 2.0;
        if let Some(memo) = memo {
            memo.lock().insert(key, value.into_scalar()?);
        }
        Ok(value)
    }

    /// n-th derivative of J_v(z)
    pub fn jvp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.jv(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.jv(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::J, &base, v, z, n)
        })
        .call((v, z))
    }

    /// n-th derivative of Y_v(z)
    pub fn yvp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.yv(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.yv(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::Y, &base, v, z, n)
        })
        .call((v, z))
    }

    /// n-th derivative of I_v(z)
    ///
    /// Uses the same difference recurrence as [`Special::jvp`], so the result
    /// is `(I_{v-1} - I_{v+1}) / 2` applied `n` times.
    pub fn ivp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.iv(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.iv(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::I, &base, v, z, n)
        })
        .call((v, z))
    }

    /// n-th derivative of K_v(z)
    ///
    /// Uses the same difference recurrence as [`Special::jvp`].
    pub fn kvp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.kv(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.kv(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::K, &base, v, z, n)
        })
        .call((v, z))
    }

    /// n-th derivative of H1_v(z)
    pub fn h1vp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.hankel1(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.hankel1(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::Hankel1, &base, v, z, n)
        })
        .call((v, z))
    }

    /// n-th derivative of H2_v(z)
    pub fn h2vp(&self, v: impl IntoOperand, z: impl IntoOperand, n: i64) -> Result<Value> {
        let n = check_order(n)?;
        if n == 0 {
            return self.hankel2(v, z);
        }
        let backend = &self.backend;
        let memo = self.derivative_memo();
        let base = move |v: f64, z: f64| backend.hankel2(v, z);
        self.vectorize(move |v: f64, z: f64| {
            self.derivative(memo.as_ref(), DerivativeKind::Hankel2, &base, v, z, n)
        })
        .call((v, z))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SpecialOptions;
    use super::*;
    use crate::kernels::{NativeBackend, ScalarKernels};

    #[test]
    fn test_negative_order_rejected() {
        let sp = Special::default();
        let err = sp.jvp(1.0, 2.0, -1).unwrap_err();
        assert_eq!(err, Error::domain("n", "n must be a non-negative integer."));
    }

    #[test]
    fn test_order_zero_is_base_function() {
        let sp = Special::default();
        let base = NativeBackend.kv(1.5, 2.0).unwrap();
        assert_eq!(sp.kvp(1.5, 2.0, 0).unwrap().as_f64(), Some(base));
    }

    #[test]
    fn test_first_derivative_of_j0() {
        // J_0' = -J_1, and the recurrence gives (J_{-1} - J_1) / 2 = -J_1
        let sp = Special::default();
        let d = sp.jvp(0.0, 1.5, 1).unwrap().as_f64().unwrap();
        let j1 = NativeBackend.jv(1.0, 1.5).unwrap();
        assert!((d + j1).abs() < 1e-15);
    }

    #[test]
    fn test_memoized_matches_plain() {
        let plain = Special::default();
        let cached = Special::with_options(
            NativeBackend,
            SpecialOptions::default().with_memoized_derivatives(true),
        );
        let z = vec![0.5, 1.0, 2.0];
        let a = plain.yvp(1.0, z.clone(), 3).unwrap();
        let b = cached.yvp(1.0, z, 3).unwrap();
        assert_eq!(a, b);
        assert!(plain.derivative_memo().is_none());
    }

    #[test]
    fn test_memo_holds_one_entry_per_recurrence_node() {
        let sp = Special::with_options(
            NativeBackend,
            SpecialOptions::default().with_memoized_derivatives(true),
        );
        let memo = sp.derivative_memo();
        let memo = memo.as_ref();
        let base = |v: f64, z: f64| NativeBackend.jv(v, z);
        let first = sp.derivative(memo, DerivativeKind::J, &base, 1.0, 2.0, 3).unwrap();
        // orders 1 | 0, 2 | -1, 1, 3 across the three levels
        assert_eq!(memo.map(|m| m.lock().len()), Some(6));

        let again = sp.derivative(memo, DerivativeKind::J, &base, 1.0, 2.0, 3).unwrap();
        assert_eq!(first, again);
        assert_eq!(memo.map(|m| m.lock().len()), Some(6));

        // every call starts from an empty memo
        assert_eq!(sp.derivative_memo().map(|m| m.into_inner().len()), Some(0));
    }
}
