//! Velocity, acceleration, jerk, and higher derivatives of a transition.
//!
//! The k-th derivative of `start + delta * P(t / T)` is `delta * P^(k)(t / T) / T^k`
//! for `k >= 1`. The derivative is taken in `tau`, where the coefficients stay
//! integers, so `P^(k)(1)` cancels exactly for small `k` in either float type.
//! Only the evaluated value is multiplied by `1 / T^k`.
//!
//! The boundary polynomial of order `n` has degree `2n + 1`, so every
//! derivative past that is identically zero and is reported as zeros rather
//! than as an error.
use num_traits::Float;

use super::{
    check_boundary, check_output, check_times, check_transition_time, time_derivative,
    FlatTrajectory,
};
use crate::coefficients::{boundary_polynomial, SmoothnessOrder};
use crate::error::{Result, TrajectoryError};

/// Evaluate the `k`-th time derivative of a trajectory from `start` to `end`
/// on `times`, for any number of dimensions. `k = 0` is position.
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
/// * If the derivative's coefficients overflow `T`, which takes a very short
///   transition and a high `k`
pub fn derivative<T: Float>(
    start: &[T],
    end: &[T],
    order: usize,
    k: usize,
    transition_time: T,
    times: &[T],
    out: &mut [T],
) -> Result<()> {
    let ndims = check_boundary(start, end)?;
    let order = SmoothnessOrder::new(order)?;
    check_transition_time(transition_time)?;
    let position = boundary_polynomial::<T>(order)?;
    check_times(times, transition_time)?;
    check_output(times.len(), ndims, out)?;

    let (shape, gain) = time_derivative(&position, k, transition_time)?;
    if shape.is_zero() {
        out.fill(T::zero());
        return Ok(());
    }

    for (i, &t) in times.iter().enumerate() {
        let p = shape.eval_one(t / transition_time) * gain;
        let row = &mut out[i * ndims..(i + 1) * ndims];
        for m in 0..ndims {
            let delta = end[m] - start[m];
            row[m] = match k {
                0 => start[m] + delta * p,
                _ => delta * p,
            };
        }
    }

    Ok(())
}

impl<T: Float, const MAXDIMS: usize> FlatTrajectory<T, MAXDIMS> {
    /// The same transition, evaluated at derivative order `k` (0 is position).
    ///
    /// `k` is absolute, not relative to this evaluator's current order.
    ///
    /// # Errors
    /// * If the derivative's coefficients overflow `T`
    pub fn derivative(&self, k: usize) -> Result<Self> {
        let (shape, gain) = time_derivative(&self.position, k, self.transition_time)?;
        Ok(Self {
            derivative_order: k,
            shape,
            gain,
            ..*self
        })
    }

    /// Position and its derivatives at one instant.
    ///
    /// `out` holds `nderivs` rows of `ndims` values in C-style ordering,
    /// row `j` being the `j`-th derivative, so `out.len()` determines how
    /// many derivatives are produced.
    ///
    /// # Errors
    /// * If `out` is empty or not a whole number of rows
    /// * If a requested derivative's coefficients overflow `T`
    pub fn eval_state(&self, t: T, out: &mut [T]) -> Result<()> {
        let ndims = self.ndims;
        if ndims == 0 {
            return check_output(0, 0, out);
        }
        if out.is_empty() || out.len() % ndims != 0 {
            return Err(TrajectoryError::OutputSizeMismatch {
                expected: ndims * out.len().div_ceil(ndims).max(1),
                actual: out.len(),
            });
        }

        let tau = t / self.transition_time;
        for (j, row) in out.chunks_exact_mut(ndims).enumerate() {
            let (shape, gain) = time_derivative(&self.position, j, self.transition_time)?;
            self.fill_row(j, shape.eval_one(tau) * gain, row);
        }

        Ok(())
    }
}
