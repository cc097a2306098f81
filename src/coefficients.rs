//! Boundary-value polynomial coefficients.
//!
//! For smoothness order `n`, the normalized shape function is
//!
//! `P(tau) = sum(c_i * tau^(n + 1 + i)), i = 0..=n`
//!
//! with `P(0) = 0`, `P(1) = 1`, and derivatives `1..=n` vanishing at both
//! `tau = 0` and `tau = 1`. The coefficients are exact integers, so they are
//! stored as literals rather than solved for at runtime.
use num_traits::{Float, NumCast};

use crate::error::{Result, TrajectoryError};
use crate::polynomial::{Polynomial, MAX_TERMS};

/// Coefficients indexed by `order - 1`, lowest exponent first.
static COEFFICIENTS: [&[f64]; 7] = [
    &[3.0, -2.0],
    &[10.0, -15.0, 6.0],
    &[35.0, -84.0, 70.0, -20.0],
    &[126.0, -420.0, 540.0, -315.0, 70.0],
    &[462.0, -1980.0, 3465.0, -3080.0, 1386.0, -252.0],
    &[1716.0, -9009.0, 20020.0, -24024.0, 16380.0, -6006.0, 924.0],
    &[
        6435.0, -40040.0, 108108.0, -163800.0, 150150.0, -83160.0, 25740.0, -3432.0,
    ],
];

/// Number of derivatives forced to vanish at both ends of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmoothnessOrder(usize);

impl SmoothnessOrder {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(7);

    /// # Errors
    /// * If `order` is outside `1..=7`
    pub fn new(order: usize) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&order) {
            Ok(Self(order))
        } else {
            Err(TrajectoryError::UnsupportedOrder { order })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Degree of the boundary polynomial, `2n + 1`.
    ///
    /// This is also the highest derivative order that is not identically zero.
    pub fn degree(self) -> usize {
        2 * self.0 + 1
    }

    pub fn coefficients(self) -> &'static [f64] {
        COEFFICIENTS[self.0 - 1]
    }
}

impl Default for SmoothnessOrder {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<usize> for SmoothnessOrder {
    type Error = TrajectoryError;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}

/// Look up the coefficient vector for a smoothness order.
///
/// # Errors
/// * If `order` is outside `1..=7`
pub fn coefficients(order: usize) -> Result<&'static [f64]> {
    Ok(SmoothnessOrder::new(order)?.coefficients())
}

/// The normalized shape function `P(tau)` for `order`, in the working float type.
///
/// # Errors
/// * If `order` is outside `1..=7`
/// * If a coefficient cannot be represented in `T`
pub fn boundary_polynomial<T: Float>(order: SmoothnessOrder) -> Result<Polynomial<T>> {
    let coefs = order.coefficients();
    let mut local = [T::zero(); MAX_TERMS];
    for (dst, &c) in local.iter_mut().zip(coefs) {
        *dst = <T as NumCast>::from(c).ok_or(TrajectoryError::Unrepresentable)?;
    }

    Polynomial::new(order.get() + 1, &local[..coefs.len()])
}
