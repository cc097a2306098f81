//! Convenience methods for constructing time grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
//!
//! Both generators pin their last entry to the requested stop value, since
//! trajectory evaluation rejects a grid whose final sample is not exactly
//! the transition time.
use log::trace;
use num_traits::{Float, NumCast};

use crate::error::{Result, TrajectoryError};
use crate::trajectory::check_transition_time;

/// Generates evenly spaced values from start to stop,
/// including the endpoint, which is reproduced exactly.
///
/// `n = 1` yields `[stop]` and `n = 0` an empty vector.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>>
where
    T: Float,
{
    if n < 2 {
        return Ok(vec![stop; n]);
    }

    let dx: T = (stop - start) / cast::<T>(n - 1)?;
    let mut out = (0..n)
        .map(|i| Ok(start + cast::<T>(i)? * dx))
        .collect::<Result<Vec<T>>>()?;
    out[n - 1] = stop;

    Ok(out)
}

/// Fixed-step grid from 0 to `transition_time`.
///
/// When `transition_time` is a whole number of steps (to within rounding),
/// the grid is evenly spaced. Otherwise the samples `0, step, 2 step, ...`
/// below `transition_time` are followed by `transition_time` itself, so the
/// last interval is shorter than `step`.
///
/// # Errors
/// * If `transition_time` or `step` is not finite and positive
pub fn time_grid<T: Float>(transition_time: T, step: T) -> Result<Vec<T>> {
    check_transition_time(transition_time)?;
    if !(step.is_finite() && step > T::zero()) {
        return Err(TrajectoryError::InvalidStep {
            step: <f64 as NumCast>::from(step).unwrap_or(f64::NAN),
        });
    }

    let ratio = transition_time / step;
    let nsteps = ratio.round();
    let tol = T::epsilon().sqrt();

    let grid = if nsteps >= T::one() && (ratio - nsteps).abs() <= tol * nsteps {
        let n: usize = <usize as NumCast>::from(nsteps).ok_or(TrajectoryError::Unrepresentable)?;
        linspace(T::zero(), transition_time, n + 1)?
    } else {
        let n: usize =
            <usize as NumCast>::from(ratio.floor()).ok_or(TrajectoryError::Unrepresentable)?;
        let mut grid = (0..=n)
            .map(|i| Ok(cast::<T>(i)? * step))
            .collect::<Result<Vec<T>>>()?;
        grid.retain(|&t| t < transition_time);
        grid.push(transition_time);
        grid
    };
    trace!("Built time grid with {} samples", grid.len());

    Ok(grid)
}

fn cast<T: Float>(i: usize) -> Result<T> {
    <T as NumCast>::from(i).ok_or(TrajectoryError::Unrepresentable)
}
