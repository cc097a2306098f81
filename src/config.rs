//! Call defaults for [`generate`](crate::generate::generate).
//!
//! | Option            | Default                                 |
//! |-------------------|-----------------------------------------|
//! | `order`           | 6                                       |
//! | `transition_time` | 1                                       |
//! | `step`            | 1e-3                                    |
//! | `times`           | fixed-step grid from 0 to the transition time |
use num_traits::Float;

use crate::coefficients::SmoothnessOrder;
use crate::error::Result;
use crate::utils::time_grid;

/// Options for one generated transition.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryConfig<T: Float> {
    /// Smoothness order, 1..=7
    pub order: usize,

    /// Duration of the transition
    pub transition_time: T,

    /// Spacing of the default time grid; unused when `times` is given
    pub step: T,

    /// Explicit sample times, which must end exactly at `transition_time`
    pub times: Option<Vec<T>>,
}

impl<T: Float> TrajectoryConfig<T> {
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_transition_time(mut self, transition_time: T) -> Self {
        self.transition_time = transition_time;
        self
    }

    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    pub fn with_times(mut self, times: Vec<T>) -> Self {
        self.times = Some(times);
        self
    }

    /// The sample times this configuration produces: the explicit `times`
    /// if given, otherwise the fixed-step grid.
    ///
    /// # Errors
    /// * If the default grid is needed and `transition_time` or `step`
    ///   is not finite and positive
    pub fn sample_times(&self) -> Result<Vec<T>> {
        match &self.times {
            Some(times) => Ok(times.clone()),
            None => time_grid(self.transition_time, self.step),
        }
    }
}

macro_rules! impl_default_config {
    ($T:ty) => {
        impl Default for TrajectoryConfig<$T> {
            fn default() -> Self {
                Self {
                    order: SmoothnessOrder::default().get(),
                    transition_time: 1.0,
                    step: 1e-3,
                    times: None,
                }
            }
        }
    };
}

impl_default_config!(f32);
impl_default_config!(f64);
