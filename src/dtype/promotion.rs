//! Type promotion rules for mixed-type array construction

use super::DType;

/// Promote two dtypes to a common dtype
///
/// Follows NumPy-like promotion rules:
/// - Complex wins over everything
/// - Floats always win over integers
/// - Larger types win over smaller types
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    // Promotion priority (higher = wins)
    let priority = |dt: DType| -> u8 {
        match dt {
            Complex128 => 120,
            F64 => 100,
            F32 => 90,
            I64 => 65,
            I32 => 55,
            Bool => 25,
        }
    };

    // An f32 mixed with a 64-bit integer needs f64 to keep integer precision
    if matches!((lhs, rhs), (F32, I64) | (I64, F32)) {
        return F64;
    }

    if priority(lhs) >= priority(rhs) {
        lhs
    } else {
        rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type() {
        assert_eq!(promote(DType::F64, DType::F64), DType::F64);
        assert_eq!(promote(DType::Bool, DType::Bool), DType::Bool);
    }

    #[test]
    fn test_float_wins() {
        assert_eq!(promote(DType::I64, DType::F64), DType::F64);
        assert_eq!(promote(DType::F32, DType::I32), DType::F32);
        assert_eq!(promote(DType::F32, DType::I64), DType::F64);
    }

    #[test]
    fn test_complex_wins() {
        assert_eq!(promote(DType::F64, DType::Complex128), DType::Complex128);
        assert_eq!(promote(DType::Bool, DType::Complex128), DType::Complex128);
    }

    #[test]
    fn test_bool_lowest() {
        assert_eq!(promote(DType::Bool, DType::I32), DType::I32);
    }
}
