//! Complex number type for complex-valued special functions
//!
//! Complex128 is compatible with bytemuck for zero-copy conversions and
//! implements the Element trait so it can be stored in arrays.
//!
//! # Arithmetic Operations
//!
//! Complex arithmetic follows standard mathematical definitions:
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
//!
//! Mixed operations with `f64` scale both components.

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 128-bit complex number with f64 real and imaginary parts
///
/// Memory layout: Complex128 is f64 × 2, interleaved format.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): atan2(im, re)
    #[inline]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Complex exponential: e^z = e^re * (cos(im) + i*sin(im))
    #[inline]
    pub fn exp(self) -> Self {
        let exp_re = self.re.exp();
        Self {
            re: exp_re * self.im.cos(),
            im: exp_re * self.im.sin(),
        }
    }

    /// Natural logarithm: ln(z) = ln(|z|) + i*arg(z)
    #[inline]
    pub fn ln(self) -> Self {
        Self {
            re: self.magnitude().ln(),
            im: self.phase(),
        }
    }

    /// Square root using principal branch
    #[inline]
    pub fn sqrt(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            let re = ((mag + self.re) / 2.0).sqrt();
            let im = self.im.signum() * ((mag - self.re) / 2.0).sqrt();
            Self { re, im }
        }
    }

    /// True when the imaginary part is exactly zero
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == 0.0
    }

    /// True when either component is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl Add for Complex128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div for Complex128 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.magnitude_squared();
        if denom == 0.0 {
            Self {
                re: f64::NAN,
                im: f64::NAN,
            }
        } else {
            Self {
                re: (self.re * rhs.re + self.im * rhs.im) / denom,
                im: (self.im * rhs.re - self.re * rhs.im) / denom,
            }
        }
    }
}

impl Mul<f64> for Complex128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl Div<f64> for Complex128 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

impl Neg for Complex128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl From<f64> for Complex128 {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex128 {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_arithmetic() {
        let a = Complex128::new(1.0, 2.0);
        let b = Complex128::new(3.0, 4.0);

        assert_eq!(a + b, Complex128::new(4.0, 6.0));
        assert_eq!(a - b, Complex128::new(-2.0, -2.0));
        // (1+2i)(3+4i) = -5 + 10i
        assert_eq!(a * b, Complex128::new(-5.0, 10.0));
        assert_eq!(a * 2.0, Complex128::new(2.0, 4.0));
        assert_eq!(a / 2.0, Complex128::new(0.5, 1.0));
    }

    #[test]
    fn test_division() {
        // 1/i = -i
        let result = Complex128::ONE / Complex128::I;
        assert!(result.re.abs() < 1e-12);
        assert!((result.im + 1.0).abs() < 1e-12);

        assert!((Complex128::ONE / Complex128::ZERO).is_nan());
    }

    #[test]
    fn test_exp_euler() {
        let z = Complex128::new(0.0, PI).exp();
        assert!((z.re + 1.0).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);
    }

    #[test]
    fn test_sqrt_principal_branch() {
        let z = Complex128::new(-4.0, 0.0).sqrt();
        assert!(z.re.abs() < 1e-12);
        assert!((z.im - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_real() {
        assert!(Complex128::new(2.0, 0.0).is_real());
        assert!(!Complex128::new(2.0, -0.5).is_real());
    }

    #[test]
    fn test_pod() {
        let z = Complex128::new(3.0, 4.0);
        let bytes = bytemuck::bytes_of(&z);
        assert_eq!(bytes.len(), 16);
        let back: &Complex128 = bytemuck::from_bytes(bytes);
        assert_eq!(*back, z);
    }
}
