//! Power-sum polynomials with a small fixed capacity.
//!
//! A polynomial is a mapping from exponent to coefficient. The boundary-value
//! polynomials used here only populate exponents `n+1 ..= 2n+1`, and every
//! operation we need (differentiation, time scaling) preserves a contiguous
//! run of exponents, so the mapping is stored as the lowest populated exponent
//! plus a run of at most [`MAX_TERMS`] coefficients. Nothing allocates.
//!
//! Differentiating replaces each term `(e, c)` with `(e - 1, c * e)` and
//! drops constant terms, so repeated differentiation eventually reaches the
//! zero polynomial and stays there.
//!
//! ```rust
//! use flattraj::Polynomial;
//!
//! // 3t^2 - 2t^3
//! let p = Polynomial::new(2, &[3.0_f64, -2.0]).unwrap();
//! assert_eq!(p.eval_one(1.0), 1.0);
//!
//! // 6t - 6t^2
//! let v = p.differentiate();
//! assert_eq!(v.eval_one(0.5), 1.5);
//!
//! // Degree 3 means the 4th derivative vanishes
//! assert!(p.derivative(4).is_zero());
//! ```
use core::ops::Mul;

use num_traits::{Float, NumCast};

use crate::error::{Result, TrajectoryError};

/// Largest number of terms a [`Polynomial`] can hold.
///
/// Order 7 boundary polynomials have 8 terms, the most of any supported order.
pub const MAX_TERMS: usize = 8;

/// A polynomial `sum(c_i * t^(lowest + i))` over a contiguous exponent range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polynomial<T: Float> {
    /// Exponent of `coefs[0]`
    lowest: usize,

    /// Number of populated terms; zero means the zero polynomial
    nterms: usize,

    /// Coefficients in increasing exponent order, size nterms
    coefs: [T; MAX_TERMS],
}

impl<T: Float> Polynomial<T> {
    /// Build a polynomial whose first coefficient multiplies `t^lowest`.
    ///
    /// # Errors
    /// * If more than [`MAX_TERMS`] coefficients are given
    pub fn new(lowest: usize, coefs: &[T]) -> Result<Self> {
        let nterms = coefs.len();
        if nterms > MAX_TERMS {
            return Err(TrajectoryError::TooManyTerms {
                nterms,
                max: MAX_TERMS,
            });
        }

        let mut coefs_local = [T::zero(); MAX_TERMS];
        coefs_local[..nterms].copy_from_slice(coefs);

        Ok(Self {
            lowest: if nterms == 0 { 0 } else { lowest },
            nterms,
            coefs: coefs_local,
        })
    }

    /// The polynomial with no terms.
    pub fn zero() -> Self {
        Self {
            lowest: 0,
            nterms: 0,
            coefs: [T::zero(); MAX_TERMS],
        }
    }

    /// True if every term has been eliminated or every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefs[..self.nterms].iter().all(|c| c.is_zero())
    }

    /// True if no coefficient is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.coefs[..self.nterms].iter().all(|c| c.is_finite())
    }

    /// Highest populated exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        match self.nterms {
            0 => None,
            n => Some(self.lowest + n - 1),
        }
    }

    /// Iterate over `(exponent, coefficient)` pairs in increasing exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.coefs[..self.nterms]
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.lowest + i, c))
    }

    /// Evaluate at a single point.
    ///
    /// Uses Horner's method on the coefficient run, then multiplies by
    /// `t^lowest`, so `t = 0` returns exactly zero whenever `lowest > 0`.
    #[inline]
    pub fn eval_one(&self, t: T) -> T {
        let n = self.nterms;
        if n == 0 {
            return T::zero();
        }

        let mut acc = self.coefs[n - 1];
        for i in (0..n - 1).rev() {
            acc = acc * t + self.coefs[i];
        }

        acc * t.powi(self.lowest as i32)
    }

    /// Evaluate at a set of points.
    ///
    /// # Errors
    /// * If `t` and `out` have different lengths
    #[inline]
    pub fn eval(&self, t: &[T], out: &mut [T]) -> Result<()> {
        if t.len() != out.len() {
            return Err(TrajectoryError::OutputSizeMismatch {
                expected: t.len(),
                actual: out.len(),
            });
        }

        for i in 0..t.len() {
            out[i] = self.eval_one(t[i]);
        }

        Ok(())
    }

    /// First derivative with respect to the polynomial variable.
    pub fn differentiate(&self) -> Self {
        let mut out = Self::zero();
        let mut j = 0;
        for (e, c) in self.terms() {
            if e == 0 {
                continue;
            }
            if j == 0 {
                out.lowest = e - 1;
            }
            // Small integer exponents always have a float representation
            let factor = <T as NumCast>::from(e).unwrap_or_else(T::nan);
            out.coefs[j] = c * factor;
            j += 1;
        }
        out.nterms = j;

        out
    }

    /// The `k`-th derivative. `k = 0` returns a copy; `k` past the degree
    /// returns the zero polynomial.
    pub fn derivative(&self, k: usize) -> Self {
        let mut out = *self;
        for _ in 0..k {
            if out.nterms == 0 {
                break;
            }
            out = out.differentiate();
        }

        out
    }

    /// Substitute `tau = t / duration`, returning a polynomial in `t`.
    ///
    /// Each coefficient is divided by `duration` raised to its exponent.
    pub fn scale(&self, duration: T) -> Self {
        let mut out = *self;
        for i in 0..self.nterms {
            out.coefs[i] = self.coefs[i] / duration.powi((self.lowest + i) as i32);
        }

        out
    }
}

/// Multiply every coefficient by a constant gain.
impl<T: Float> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(mut self, gain: T) -> Self {
        for c in self.coefs[..self.nterms].iter_mut() {
            *c = *c * gain;
        }
        self
    }
}

impl<T: Float> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_eval_cubic() {
        // 3t^2 - 2t^3
        let p = Polynomial::new(2, &[3.0_f64, -2.0]).unwrap();
        assert_eq!(p.eval_one(0.0), 0.0);
        assert_eq!(p.eval_one(1.0), 1.0);
        assert_eq!(p.eval_one(0.5), 0.5);
        assert_eq!(p.degree(), Some(3));

        let t = [0.0, 0.25, 2.0];
        let mut out = [0.0; 3];
        p.eval(&t, &mut out).unwrap();
        assert_eq!(out[1], 3.0 * 0.0625 - 2.0 * 0.015625);
        assert_eq!(out[2], 12.0 - 16.0);
    }

    #[test]
    fn test_eval_length_mismatch() {
        let p = Polynomial::new(0, &[1.0_f64]).unwrap();
        let mut out = [0.0; 2];
        assert_eq!(
            p.eval(&[0.0, 1.0, 2.0], &mut out),
            Err(TrajectoryError::OutputSizeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_too_many_terms() {
        let coefs = [1.0_f64; MAX_TERMS + 1];
        assert!(matches!(
            Polynomial::new(0, &coefs),
            Err(TrajectoryError::TooManyTerms { .. })
        ));
    }

    #[test]
    fn test_differentiate_terms() {
        // 1 + 2t + 3t^2 -> 2 + 6t -> 6
        let p = Polynomial::new(0, &[1.0_f64, 2.0, 3.0]).unwrap();
        let dp = p.differentiate();
        let terms: Vec<(usize, f64)> = dp.terms().collect();
        assert_eq!(terms, vec![(0, 2.0), (1, 6.0)]);

        let ddp = dp.differentiate();
        let terms: Vec<(usize, f64)> = ddp.terms().collect();
        assert_eq!(terms, vec![(0, 6.0)]);

        let dddp = ddp.differentiate();
        assert!(dddp.is_zero());
        assert_eq!(dddp.degree(), None);
    }

    #[test]
    fn test_zero_is_closed_under_differentiation() {
        let z = Polynomial::<f64>::zero();
        assert!(z.differentiate().is_zero());
        assert!(z.derivative(10).is_zero());
        assert_eq!(z.eval_one(3.0), 0.0);
        assert_eq!(Polynomial::<f64>::default(), z);
    }

    #[test]
    fn test_derivative_past_degree() {
        let p = Polynomial::new(4, &[1.0_f64, -1.0, 0.5]).unwrap();
        assert_eq!(p.degree(), Some(6));
        assert!(!p.derivative(6).is_zero());
        assert!(p.derivative(7).is_zero());
        assert_eq!(p.derivative(0), p);
    }

    #[test]
    fn test_scale() {
        // p(tau) = tau^2 on [0, 1] becomes (t / 4)^2 on [0, 4]
        let p = Polynomial::new(2, &[1.0_f64]).unwrap();
        let ps = p.scale(4.0);
        assert_eq!(ps.eval_one(4.0), 1.0);
        assert_eq!(ps.eval_one(2.0), 0.25);

        // Scaling then differentiating picks up the chain-rule factor 1/T
        let q = Polynomial::new(2, &[3.0_f64, -2.0]).unwrap();
        let dq = q.scale(2.0).differentiate();
        let expected = q.differentiate().eval_one(0.3) / 2.0;
        assert!((dq.eval_one(0.6) - expected).abs() < 1e-14);
    }

    /// Differentiating in the normalized variable and applying `T^-k` to the
    /// value matches differentiating the time-scaled polynomial.
    #[test]
    fn test_normalized_derivative_matches_scale() {
        let p = Polynomial::new(5, &[126.0_f64, -420.0, 540.0, -315.0, 70.0]).unwrap();
        let duration = 3.0_f64;
        let t = 1.3;
        for k in 0..=10 {
            let scaled = p.scale(duration).derivative(k).eval_one(t);
            let gain = duration.recip().powi(k as i32);
            let normalized = (p.derivative(k) * gain).eval_one(t / duration);
            assert!((scaled - normalized).abs() <= 1e-12 * scaled.abs().max(1.0), "k {k}");
        }
    }

    #[test]
    fn test_gain_and_finiteness() {
        let p = Polynomial::new(1, &[2.0_f32, 3.0]).unwrap();
        let q = p * 0.5;
        assert_eq!(q.terms().collect::<Vec<_>>(), vec![(1, 1.0), (2, 1.5)]);
        assert!(q.is_finite());
        assert!(!(p * f32::MAX * 4.0).is_finite());
        assert!(Polynomial::<f32>::zero().is_finite());
    }
}
