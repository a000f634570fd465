//! Scalar abstraction for real-valued linear algebra
//!
//! [`RealField`] is the single scalar bound used throughout the crate. It
//! collects the `num-traits` capabilities the fill loops and substitution
//! routines rely on.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in the decompositions.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for statistics code)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Convergence tolerance for iterative sweeps, scaled to the type's
    /// precision.
    fn sweep_tolerance() -> Self {
        Self::epsilon() * Self::from_f64(100.0).unwrap()
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_tolerance_f64() {
        let tol = <f64 as RealField>::sweep_tolerance();
        assert!(tol > 0.0);
        assert!(tol < 1e-10);
    }

    #[test]
    fn test_sweep_tolerance_f32() {
        let tol = <f32 as RealField>::sweep_tolerance();
        assert!(tol > 0.0);
        assert!(tol < 1e-3);
    }
}
