//! Differentially-flat point-to-point trajectories, no-std and no-alloc compatible,
//! for feed-forward references in motion control.
//!
//! A transition of smoothness order `n` moves each dimension from its start
//! value to its end value over a transition time `T`, following the
//! boundary-value polynomial
//!
//! `P(tau) = sum(c_i * tau^(n + 1 + i)), i = 0..=n, tau = t / T`
//!
//! whose first `n` derivatives vanish at both ends. Velocity, acceleration,
//! jerk, and so on come from differentiating the same polynomial, so every
//! derivative up to `2n + 1` is available in closed form, and every derivative
//! past that is identically zero.
//!
//! | Order | Degree | Derivatives vanishing at both ends |
//! |-------|--------|------------------------------------|
//! | 1     | 3      | velocity                           |
//! | 2     | 5      | velocity, acceleration             |
//! | 3     | 7      | ... jerk                           |
//! | 6     | 13     | ... 6th derivative (default)       |
//! | 7     | 15     | ... 7th derivative                 |
//!
//! # Example: Evaluate into caller-provided storage
//! ```rust
//! use flattraj::trajectory;
//!
//! // Two dimensions moving over 2 seconds
//! let start = [0.0_f64, 1.0];
//! let end = [1.0_f64, -1.0];
//! let times = [0.0, 0.5, 1.0, 1.5, 2.0];
//!
//! // Storage for output, one row per sample
//! let mut pos = [0.0; 10];
//! let mut vel = [0.0; 10];
//!
//! trajectory::trajectory(&start, &end, 6, 2.0, &times, &mut pos).unwrap();
//! trajectory::derivative(&start, &end, 6, 1, 2.0, &times, &mut vel).unwrap();
//!
//! assert_eq!(&pos[4..6], &[0.5, 0.0]);
//! assert_eq!(&vel[..2], &[0.0, 0.0]);
//! ```
//!
//! # Example: Per-tick evaluation
//! ```rust
//! use flattraj::FlatTrajectory;
//!
//! let traj: FlatTrajectory<f64, 3> =
//!     FlatTrajectory::new(&[0.0, 0.0, 0.0], &[0.1, 0.2, 0.3], 4, 0.5).unwrap();
//!
//! // Position, velocity, and acceleration of all three dimensions at t = 0.2
//! let mut state = [0.0; 9];
//! traj.eval_state(0.2, &mut state).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod coefficients;
pub mod error;
pub mod polynomial;
pub mod trajectory;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod generate;
#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

pub use coefficients::{coefficients, SmoothnessOrder};
pub use error::{Result, TrajectoryError};
pub use polynomial::Polynomial;
pub use trajectory::FlatTrajectory;

#[cfg(feature = "std")]
pub use config::TrajectoryConfig;
#[cfg(feature = "std")]
pub use generate::{generate, generate_derivative, Trajectory};
