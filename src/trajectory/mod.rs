//! Point-to-point trajectories between arbitrary start and end vectors.
//!
//! Every dimension follows the same normalized shape function `P(tau)`,
//! mapped affinely onto its own start and end value:
//!
//! `x_m(t) = start_m + (end_m - start_m) * P(t / T)`
//!
//! Samples are evaluated in the normalized variable `tau = t / T`, so the
//! exact integer coefficients are used directly and `t = T` lands on
//! `P(1) = 1` whatever the transition time or float type. The `k`-th time
//! derivative is `P^(k)(tau) / T^k`: the derivative is taken in `tau`, where
//! its coefficients are still integers, and `1 / T^k` is applied once to
//! the evaluated value. This matches differentiating the polynomial after
//! [`Polynomial::scale`] without ever forming `T^(2n+1)`.
//!
//! Outputs use C-style ordering of (sample, dimension) pairs, so sample `i`
//! of dimension `m` lives at `out[i * ndims + m]`.
//!
//! Operation Complexity
//! * O(order) to evaluate the shape function at one sample
//! * O(ndims) to map it onto every dimension
//!
//! Memory Complexity
//! * Peak stack usage is O(MAXDIMS) for [`FlatTrajectory`], and O(1) for
//!   the free functions, which handle any number of dimensions.
//!
//! ```rust
//! use flattraj::trajectory;
//!
//! let start = [0.0_f64, 10.0];
//! let end = [1.0_f64, 6.0];
//! let times = [0.0, 0.5, 1.0, 1.5, 2.0];
//! let mut out = [0.0; 10];
//!
//! trajectory::trajectory(&start, &end, 6, 2.0, &times, &mut out).unwrap();
//!
//! assert_eq!(&out[..2], &start);
//! assert_eq!(&out[4..6], &[0.5, 8.0]);
//! ```
use itertools::Itertools;
use log::debug;
use num_traits::{Float, NumCast};

use crate::coefficients::{boundary_polynomial, SmoothnessOrder};
use crate::error::{Result, TrajectoryError};
use crate::polynomial::Polynomial;

pub mod derivative;

pub use derivative::derivative;

/// A transition between two points over a fixed duration, for up to
/// `MAXDIMS` dimensions, evaluated at a fixed derivative order.
///
/// Holds the boundary data locally so it can be built once and evaluated
/// at every control tick without allocating.
#[derive(Clone, Copy, Debug)]
pub struct FlatTrajectory<T: Float, const MAXDIMS: usize> {
    /// Number of dimensions
    ndims: usize,

    /// Starting value of each dimension, size ndims
    start: [T; MAXDIMS],

    /// `end - start` for each dimension, size ndims
    delta: [T; MAXDIMS],

    order: SmoothnessOrder,

    transition_time: T,

    /// Derivative order produced by `eval`; 0 is position
    derivative_order: usize,

    /// Normalized shape function `P(tau)`
    position: Polynomial<T>,

    /// `derivative_order`-th derivative of `position` with respect to `tau`
    shape: Polynomial<T>,

    /// Chain-rule factor `T^-derivative_order` applied to `shape`
    gain: T,
}

impl<T: Float, const MAXDIMS: usize> FlatTrajectory<T, MAXDIMS> {
    /// Build a position trajectory from `start` to `end` lasting `transition_time`.
    ///
    /// # Errors
    /// * If `start` and `end` have different lengths
    /// * If there are more than `MAXDIMS` dimensions
    /// * If `order` is outside `1..=7`
    /// * If `transition_time` is not finite and positive
    pub fn new(start: &[T], end: &[T], order: usize, transition_time: T) -> Result<Self> {
        let ndims = check_boundary(start, end)?;
        if ndims > MAXDIMS {
            return Err(TrajectoryError::TooManyDimensions {
                ndims,
                max: MAXDIMS,
            });
        }
        let order = SmoothnessOrder::new(order)?;
        check_transition_time(transition_time)?;
        let position = boundary_polynomial::<T>(order)?;

        let mut start_local = [T::zero(); MAXDIMS];
        let mut delta_local = [T::zero(); MAXDIMS];
        start_local[..ndims].copy_from_slice(start);
        (0..ndims).for_each(|m| delta_local[m] = end[m] - start[m]);

        debug!("Built order-{} trajectory in {} dims", order.get(), ndims);

        Ok(Self {
            ndims,
            start: start_local,
            delta: delta_local,
            order,
            transition_time,
            derivative_order: 0,
            position,
            shape: position,
            gain: T::one(),
        })
    }

    pub fn ndims(&self) -> usize {
        self.ndims
    }

    pub fn order(&self) -> SmoothnessOrder {
        self.order
    }

    pub fn transition_time(&self) -> T {
        self.transition_time
    }

    pub fn derivative_order(&self) -> usize {
        self.derivative_order
    }

    /// Evaluate every dimension at one instant.
    ///
    /// `t` is not clamped to `[0, transition_time]`; outside that range the
    /// polynomial is extrapolated.
    ///
    /// # Errors
    /// * If `out` does not have one entry per dimension
    #[inline]
    pub fn eval_one(&self, t: T, out: &mut [T]) -> Result<()> {
        if out.len() != self.ndims {
            return Err(TrajectoryError::OutputSizeMismatch {
                expected: self.ndims,
                actual: out.len(),
            });
        }

        let p = self.shape.eval_one(t / self.transition_time) * self.gain;
        self.fill_row(self.derivative_order, p, out);

        Ok(())
    }

    /// Evaluate every dimension on a time grid ending at the transition time.
    ///
    /// # Errors
    /// * If `times` is empty or decreasing anywhere
    /// * If the last entry of `times` is not exactly the transition time
    /// * If `out` is not `times.len() * ndims` long
    pub fn eval(&self, times: &[T], out: &mut [T]) -> Result<()> {
        check_times(times, self.transition_time)?;
        check_output(times.len(), self.ndims, out)?;

        let ndims = self.ndims;
        for (i, &t) in times.iter().enumerate() {
            let p = self.shape.eval_one(t / self.transition_time) * self.gain;
            self.fill_row(self.derivative_order, p, &mut out[i * ndims..(i + 1) * ndims]);
        }

        Ok(())
    }

    /// Map a shape-function value onto each dimension.
    ///
    /// Only position carries the start offset; derivatives of a constant vanish.
    #[inline]
    fn fill_row(&self, k: usize, p: T, row: &mut [T]) {
        for m in 0..self.ndims {
            row[m] = match k {
                0 => self.start[m] + self.delta[m] * p,
                _ => self.delta[m] * p,
            };
        }
    }
}

/// Evaluate a position trajectory from `start` to `end` on `times`,
/// for any number of dimensions.
///
/// `out` is filled in C-style ordering, `out[i * ndims + m]` for sample `i`
/// of dimension `m`.
///
/// # Errors
/// * If `start` and `end` have different lengths
/// * If `order` is outside `1..=7`
/// * If `transition_time` is not finite and positive
/// * If `times` is empty, decreasing anywhere, or does not end exactly at
///   `transition_time`
/// * If `out` is not `times.len() * start.len()` long
pub fn trajectory<T: Float>(
    start: &[T],
    end: &[T],
    order: usize,
    transition_time: T,
    times: &[T],
    out: &mut [T],
) -> Result<()> {
    derivative(start, end, order, 0, transition_time, times, out)
}

/// The `k`-th derivative of a normalized shape function with respect to
/// `tau`, and the gain `T^-k` that turns it into a time derivative.
///
/// Past the degree the shape is zero and the gain is 1.
///
/// # Errors
/// * If the gain or any gain-weighted coefficient overflows the float type
pub(crate) fn time_derivative<T: Float>(
    position: &Polynomial<T>,
    k: usize,
    transition_time: T,
) -> Result<(Polynomial<T>, T)> {
    let shape = position.derivative(k);
    if position.degree().map_or(true, |degree| k > degree) {
        return Ok((shape, T::one()));
    }

    let gain = transition_time.recip().powi(k as i32);
    if !gain.is_finite() || !(shape * gain).is_finite() {
        return Err(TrajectoryError::Unrepresentable);
    }

    Ok((shape, gain))
}

/// Returns the number of dimensions.
pub(crate) fn check_boundary<T>(start: &[T], end: &[T]) -> Result<usize> {
    if start.len() != end.len() {
        return Err(TrajectoryError::DimensionMismatch {
            start: start.len(),
            end: end.len(),
        });
    }

    Ok(start.len())
}

pub(crate) fn check_transition_time<T: Float>(transition_time: T) -> Result<()> {
    if transition_time.is_finite() && transition_time > T::zero() {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidTransitionTime {
            transition_time: as_f64(transition_time),
        })
    }
}

/// Check that `times` is non-empty, non-decreasing, and ends exactly at
/// `transition_time`. No tolerance is applied to the final sample.
pub(crate) fn check_times<T: Float>(times: &[T], transition_time: T) -> Result<()> {
    let last = *times
        .last()
        .ok_or(TrajectoryError::InvalidTimes { index: None })?;

    // Written as a negated `>=` so NaN samples are rejected too
    if let Some(i) = times.iter().tuple_windows().position(|(a, b)| !(b >= a)) {
        return Err(TrajectoryError::InvalidTimes { index: Some(i + 1) });
    }

    if last != transition_time {
        return Err(TrajectoryError::BoundaryTimeMismatch {
            last: as_f64(last),
            transition_time: as_f64(transition_time),
        });
    }

    Ok(())
}

pub(crate) fn check_output<T>(nsamples: usize, ndims: usize, out: &[T]) -> Result<()> {
    let expected = nsamples * ndims;
    if out.len() != expected {
        return Err(TrajectoryError::OutputSizeMismatch {
            expected,
            actual: out.len(),
        });
    }

    Ok(())
}

/// Lossy conversion for error reporting only.
fn as_f64<T: Float>(x: T) -> f64 {
    <f64 as NumCast>::from(x).unwrap_or(f64::NAN)
}
