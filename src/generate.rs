//! Allocating front-end returning time-stamped trajectories.
//!
//! ```rust
//! use flattraj::{generate, TrajectoryConfig};
//!
//! // Defaults: order 6, one second, 1 ms grid
//! let traj = generate(&[0.0, 1.0], &[1.0, 3.0], &TrajectoryConfig::default()).unwrap();
//! assert_eq!(traj.len(), 1001);
//! assert_eq!(traj.row(0), &[0.0, 1.0]);
//! assert_eq!(traj.row(1000), &[1.0, 3.0]);
//!
//! // Velocity on a custom grid
//! let config = TrajectoryConfig::default()
//!     .with_transition_time(2.0)
//!     .with_times(vec![0.0, 1.0, 2.0]);
//! let vel = flattraj::generate_derivative(&[0.0], &[1.0], 1, &config).unwrap();
//! assert_eq!(vel.row(0), &[0.0]);
//! ```
use log::debug;
use num_traits::Float;

use crate::config::TrajectoryConfig;
use crate::error::Result;
use crate::trajectory::derivative;

/// Samples of a transition: one timestamp per row, one column per dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<T> {
    /// Sample times, size nsamples
    times: Vec<T>,

    /// Values in C-style ordering, size nsamples * ndims
    values: Vec<T>,

    /// Number of dimensions
    ndims: usize,
}

impl<T: Float> Trajectory<T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn ndims(&self) -> usize {
        self.ndims
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// All values, `values()[i * ndims + m]` for sample `i` of dimension `m`.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Every dimension at sample `i`.
    ///
    /// # Panics
    /// * If `i >= len()`
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i * self.ndims..(i + 1) * self.ndims]
    }

    /// Every sample of dimension `m`.
    pub fn column(&self, m: usize) -> impl Iterator<Item = T> + '_ {
        self.values.iter().skip(m).step_by(self.ndims.max(1)).copied()
    }

    /// `(timestamp, values)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[T])> + '_ {
        self.times
            .iter()
            .enumerate()
            .map(move |(i, &t)| (t, self.row(i)))
    }

    /// Take the sample times and value storage.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.times, self.values)
    }
}

/// Sample a position trajectory from `start` to `end`.
///
/// # Errors
/// * As for [`trajectory`](crate::trajectory::trajectory), plus invalid
///   default grid parameters
pub fn generate<T: Float>(
    start: &[T],
    end: &[T],
    config: &TrajectoryConfig<T>,
) -> Result<Trajectory<T>> {
    generate_derivative(start, end, 0, config)
}

/// Sample the `k`-th time derivative of a trajectory from `start` to `end`.
///
/// Derivative orders past `2 * order + 1` produce all-zero values.
///
/// # Errors
/// * As for [`derivative`](crate::trajectory::derivative()), plus invalid
///   default grid parameters
pub fn generate_derivative<T: Float>(
    start: &[T],
    end: &[T],
    k: usize,
    config: &TrajectoryConfig<T>,
) -> Result<Trajectory<T>> {
    let times = config.sample_times()?;
    let ndims = start.len();
    let mut values = vec![T::zero(); times.len() * ndims];

    debug!(
        "Generating derivative {} of order-{} trajectory, {} samples in {} dims",
        k,
        config.order,
        times.len(),
        ndims
    );
    derivative(
        start,
        end,
        config.order,
        k,
        config.transition_time,
        &times,
        &mut values,
    )?;

    Ok(Trajectory {
        times,
        values,
        ndims,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TrajectoryError;
    use ndarray::ArrayView2;

    #[test]
    fn test_literal_scenario() {
        let config = TrajectoryConfig::default().with_times(vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let traj = generate(&[0.0], &[1.0], &config).unwrap();
        let y: Vec<f64> = traj.column(0).collect();

        assert_eq!(y[0], 0.0);
        assert_eq!(y[2], 0.5);
        assert_eq!(y[4], 1.0);
        assert!((y[1] - (1.0 - y[3])).abs() < 1e-15);
        assert!(y[1] > 0.0 && y[1] < 0.5);
    }

    #[test]
    fn test_default_grid() {
        let traj = generate(&[0.0, 0.0, 0.0], &[1.0, -1.0, 2.0], &TrajectoryConfig::default())
            .unwrap();
        assert_eq!(traj.len(), 1001);
        assert_eq!(traj.ndims(), 3);
        assert_eq!(*traj.times().last().unwrap(), 1.0);
        assert_eq!(traj.row(1000), &[1.0, -1.0, 2.0]);

        let view = ArrayView2::from_shape((traj.len(), traj.ndims()), traj.values()).unwrap();
        assert_eq!(view.row(0).to_vec(), vec![0.0, 0.0, 0.0]);
        for (a, b) in view.column(1).iter().zip(traj.column(1)) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_iter_pairs() {
        let config = TrajectoryConfig::default()
            .with_transition_time(3.0)
            .with_step(1.0);
        let traj = generate(&[2.0, 4.0], &[4.0, 2.0], &config).unwrap();
        let pairs: Vec<(f64, Vec<f64>)> = traj.iter().map(|(t, v)| (t, v.to_vec())).collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (0.0, vec![2.0, 4.0]));
        assert_eq!(pairs[3], (3.0, vec![4.0, 2.0]));
    }

    #[test]
    fn test_generate_derivative() {
        let config = TrajectoryConfig::default().with_order(2).with_step(0.01);
        let acc = generate_derivative(&[0.0], &[1.0], 2, &config).unwrap();
        assert_eq!(acc.len(), 101);
        assert_eq!(acc.row(0), &[0.0]);
        assert!(acc.row(100)[0].abs() < 1e-9);

        // Degree is 5, so the 6th derivative vanishes
        let zero = generate_derivative(&[0.0], &[1.0], 6, &config).unwrap();
        assert!(zero.values().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_errors_propagate() {
        let config = TrajectoryConfig::default().with_order(0);
        assert_eq!(
            generate(&[0.0], &[1.0], &config).err(),
            Some(TrajectoryError::UnsupportedOrder { order: 0 })
        );

        let config = TrajectoryConfig::default().with_times(vec![0.0, 0.5]);
        assert!(matches!(
            generate(&[0.0], &[1.0], &config),
            Err(TrajectoryError::BoundaryTimeMismatch { .. })
        ));

        let config = TrajectoryConfig::<f64>::default().with_step(-1.0);
        assert!(matches!(
            generate(&[0.0], &[1.0], &config),
            Err(TrajectoryError::InvalidStep { .. })
        ));

        assert!(matches!(
            generate(&[0.0, 1.0], &[1.0], &TrajectoryConfig::default()),
            Err(TrajectoryError::DimensionMismatch { .. })
        ));
    }
}
