//! Broadcasting function adapter
//!
//! [`Vectorized`] wraps a scalar function of fixed arity and turns it into a
//! function over arrays. A call converts every argument into an
//! [`Operand`], computes the broadcast shape, walks it in row-major order
//! while invoking the scalar function on the selected elements, and
//! assembles the results into an array of the broadcast shape.
//!
//! Only a rank-0 result is squeezed, into [`Value::Scalar`]. Size-1 axes of
//! the broadcast shape are kept, so a `(1, 3)` argument yields a `(1, 3)`
//! result.
//!
//! # Output type
//!
//! The output element type is taken from, in order:
//! 1. the explicit output type given at construction,
//! 2. the type inferred on an earlier call (cached, written at most once),
//! 3. the type of the first result of this call.
//!
//! Every result is cast to the output type before assembly.
//!
//! # Example
//!
//! ```
//! use numr_special::vectorize::Vectorized;
//!
//! let f = Vectorized::new(|a: f64, b: f64| if a > b { a - b } else { a + b });
//!
//! // Scalars in, scalar out
//! assert_eq!(f.call((3.0, 1.0)).unwrap().as_f64(), Some(2.0));
//!
//! // The scalar stretches across every position of the array
//! let out = f.call((vec![1.0, 2.0, 3.0, 4.0], 2.0)).unwrap();
//! assert_eq!(out.to_f64_vec().unwrap(), vec![3.0, 4.0, 1.0, 2.0]);
//! ```

mod iter;

pub use iter::{BroadcastIter, Offsets};

use crate::dtype::{DType, FromScalar, IntoScalar, Scalar};
use crate::error::{Error, Result};
use crate::tensor::{IntoOperand, Operand, OperandElement, broadcast_shapes};
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Element count below which the adapter stays on the calling thread
pub const DEFAULT_PARALLEL_MIN_LEN: usize = 4096;

// ============================================================================
// Scalar function capability
// ============================================================================

/// A scalar function of fixed arity callable on dynamic scalars
///
/// Implemented for every `Fn` closure of arity 1 to 6 whose arguments
/// implement [`FromScalar`] and whose return type implements [`IntoScalar`].
/// `Args` is the tuple of argument types and only disambiguates the impls.
pub trait ScalarFn<Args>: Send + Sync {
    /// Number of arguments
    const ARITY: usize;

    /// Invoke on exactly `ARITY` scalars
    fn call_scalars(&self, args: &[Scalar]) -> Result<Scalar>;
}

macro_rules! impl_scalar_fn {
    ($arity:expr; $($A:ident $idx:tt),+) => {
        impl<Func, R, $($A),+> ScalarFn<($($A,)+)> for Func
        where
            Func: Fn($($A),+) -> R + Send + Sync,
            R: IntoScalar,
            $($A: FromScalar,)+
        {
            const ARITY: usize = $arity;

            #[inline]
            fn call_scalars(&self, args: &[Scalar]) -> Result<Scalar> {
                if args.len() != $arity {
                    return Err(Error::configuration(format!(
                        "function takes {} arguments, {} given",
                        $arity,
                        args.len()
                    )));
                }
                (self)($($A::from_scalar(args[$idx])?),+).into_scalar()
            }
        }
    };
}

impl_scalar_fn!(1; A0 0);
impl_scalar_fn!(2; A0 0, A1 1);
impl_scalar_fn!(3; A0 0, A1 1, A2 2);
impl_scalar_fn!(4; A0 0, A1 1, A2 2, A3 3);
impl_scalar_fn!(5; A0 0, A1 1, A2 2, A3 3, A4 4);
impl_scalar_fn!(6; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5);

/// A tuple of call arguments matching a scalar function's arity
pub trait IntoOperands<Args> {
    /// Convert every argument into an operand
    fn into_operands(self) -> Result<Vec<Operand>>;
}

macro_rules! impl_into_operands {
    ($($T:ident $A:ident),+) => {
        impl<$($T: IntoOperand, $A),+> IntoOperands<($($A,)+)> for ($($T,)+) {
            #[allow(non_snake_case)]
            fn into_operands(self) -> Result<Vec<Operand>> {
                let ($($T,)+) = self;
                Ok(vec![$($T.into_operand()?),+])
            }
        }
    };
}

impl_into_operands!(T0 A0);
impl_into_operands!(T0 A0, T1 A1);
impl_into_operands!(T0 A0, T1 A1, T2 A2);
impl_into_operands!(T0 A0, T1 A1, T2 A2, T3 A3);
impl_into_operands!(T0 A0, T1 A1, T2 A2, T3 A3, T4 A4);
impl_into_operands!(T0 A0, T1 A1, T2 A2, T3 A3, T4 A4, T5 A5);

// ============================================================================
// Value
// ============================================================================

/// Result of a broadcast call: a bare scalar for rank-0 input, else an array
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// All inputs were scalars
    Scalar(Scalar),
    /// Array of the broadcast shape
    Array(Operand),
}

impl Value {
    /// True for the scalar variant
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// The scalar, when the call was scalar in / scalar out
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Array(_) => None,
        }
    }

    /// Real value of a scalar result
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(|s| s.as_f64())
    }

    /// The array, when the broadcast shape had rank >= 1
    pub fn as_array(&self) -> Option<&Operand> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(a) => Some(a),
        }
    }

    /// Element type of the result
    pub fn dtype(&self) -> DType {
        match self {
            Self::Scalar(s) => s.dtype(),
            Self::Array(a) => a.dtype(),
        }
    }

    /// Shape of the result (empty for scalars)
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Scalar(_) => &[],
            Self::Array(a) => a.shape(),
        }
    }

    /// All values in row-major order
    pub fn to_scalars(&self) -> Vec<Scalar> {
        match self {
            Self::Scalar(s) => vec![*s],
            Self::Array(a) => a.to_scalars(),
        }
    }

    /// All values as `f64` in row-major order
    pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
        self.to_scalars().into_iter().map(f64::from_scalar).collect()
    }

    /// Convert into a typed array (rank-0 for scalars)
    pub fn to_array<T: OperandElement>(&self) -> Result<crate::tensor::NdArray<T>> {
        self.clone().into_operand()?.to_array::<T>()
    }
}

impl IntoOperand for Value {
    fn into_operand(self) -> Result<Operand> {
        match self {
            Self::Scalar(s) => Ok(Operand::scalar(s)),
            Self::Array(a) => Ok(a),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Array(a) => write!(f, "array(dtype={}, shape={:?})", a.dtype(), a.shape()),
        }
    }
}

// ============================================================================
// Vectorized
// ============================================================================

/// A scalar function lifted to broadcast over array arguments
pub struct Vectorized<F, Args> {
    func: F,
    otype: Option<DType>,
    doc: Option<String>,
    inferred: OnceLock<DType>,
    parallel_min_len: usize,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Vectorized<F, Args>
where
    F: ScalarFn<Args>,
{
    /// Wrap `func`; the output type is inferred from the first result
    pub fn new(func: F) -> Self {
        Self {
            func,
            otype: None,
            doc: None,
            inferred: OnceLock::new(),
            parallel_min_len: DEFAULT_PARALLEL_MIN_LEN,
            _args: PhantomData,
        }
    }

    /// Wrap `func` with an output-type tag and documentation string
    ///
    /// The tag follows array-protocol typecodes (`"d"`, `"D"`, `"l"`, ...);
    /// only its first character is used. An unknown typecode is a
    /// [`Error::Configuration`].
    pub fn from_typecode(func: F, otypes: Option<&str>, doc: Option<&str>) -> Result<Self> {
        let otype = match otypes {
            Some(tag) => DType::from_typecode(tag)?,
            None => None,
        };
        let mut v = Self::new(func);
        v.otype = otype;
        v.doc = doc.map(str::to_owned);
        Ok(v)
    }

    /// Declare the output element type
    pub fn with_otype(mut self, dtype: DType) -> Self {
        self.otype = Some(dtype);
        self
    }

    /// Attach a documentation string
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Minimum element count before enumeration goes parallel
    pub fn with_parallel_min_len(mut self, min_len: usize) -> Self {
        self.parallel_min_len = min_len.max(1);
        self
    }

    /// Declared output type, if any
    pub fn otype(&self) -> Option<DType> {
        self.otype
    }

    /// Output type inferred by an earlier call, if any
    pub fn inferred_otype(&self) -> Option<DType> {
        self.inferred.get().copied()
    }

    /// Documentation string
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Number of arguments the wrapped function takes
    pub fn arity(&self) -> usize {
        F::ARITY
    }

    /// Broadcast the wrapped function over a tuple of arguments
    pub fn call<I: IntoOperands<Args>>(&self, args: I) -> Result<Value> {
        let operands = args.into_operands()?;
        self.call_operands(&operands)
    }

    /// Broadcast the wrapped function over already converted operands
    ///
    /// Fails with [`Error::Configuration`] when the number of operands does
    /// not match the arity, and with [`Error::BroadcastError`] when the shapes
    /// cannot be broadcast together.
    pub fn call_operands(&self, operands: &[Operand]) -> Result<Value> {
        if operands.len() != F::ARITY {
            return Err(Error::configuration(format!(
                "function takes {} arguments, {} given",
                F::ARITY,
                operands.len()
            )));
        }

        let shapes: Vec<&[usize]> = operands.iter().map(Operand::shape).collect();
        let shape = broadcast_shapes(&shapes)?;
        let layouts: Vec<_> = operands.iter().map(Operand::layout).collect();
        let walker = BroadcastIter::new(&shape, &layouts)?;

        if walker.is_empty() {
            let dtype = self
                .otype
                .or_else(|| self.inferred_otype())
                .unwrap_or(DType::F64);
            log::trace!("zero-size broadcast {shape:?}, function not invoked");
            return Ok(Value::Array(Operand::empty(&shape, dtype)));
        }

        let results = self.evaluate(walker, operands)?;

        let dtype = match self.otype {
            Some(dtype) => dtype,
            None => *self.inferred.get_or_init(|| {
                let first = results[0].dtype();
                log::debug!("inferred output dtype {first} from first result");
                first
            }),
        };

        if shape.is_empty() {
            return Ok(Value::Scalar(results[0].cast(dtype)?));
        }
        Operand::from_scalars(results, &shape, dtype).map(Value::Array)
    }

    fn apply(&self, offsets: &Offsets, operands: &[Operand]) -> Result<Scalar> {
        let mut args: smallvec::SmallVec<[Scalar; 6]> = smallvec::SmallVec::new();
        for (operand, &offset) in operands.iter().zip(offsets.iter()) {
            let value = operand.get_linear(offset).ok_or_else(|| {
                Error::Internal(format!("broadcast offset {offset} out of bounds"))
            })?;
            args.push(value);
        }
        self.func.call_scalars(&args)
    }

    #[cfg(feature = "rayon")]
    fn evaluate(&self, walker: BroadcastIter, operands: &[Operand]) -> Result<Vec<Scalar>> {
        let len = walker.len();
        if len >= self.parallel_min_len {
            log::trace!("parallel broadcast over {len} elements");
            return (0..len)
                .into_par_iter()
                .with_min_len(self.parallel_min_len)
                .map(|linear| self.apply(&walker.offsets_at(linear), operands))
                .collect();
        }
        walker.map(|offsets| self.apply(&offsets, operands)).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn evaluate(&self, walker: BroadcastIter, operands: &[Operand]) -> Result<Vec<Scalar>> {
        walker.map(|offsets| self.apply(&offsets, operands)).collect()
    }
}

impl<F, Args> fmt::Debug for Vectorized<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vectorized")
            .field("otype", &self.otype)
            .field("inferred", &self.inferred.get())
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}
