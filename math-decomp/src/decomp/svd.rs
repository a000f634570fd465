//! Singular Value Decomposition
//!
//! Decomposes an m×n matrix as `M = U·S·Vᵗ`: `U` spans the eigenvectors of
//! `M·Mᵗ`, `V` those of `Mᵗ·M`, and `S = Uᵗ·M·V` comes out diagonal up to
//! the eigensolver's arbitrary sign choices. A signature matrix then flips
//! the offending columns of `U` so that every singular value is
//! non-negative.

use crate::eigen::{EigenError, eigen_symmetric};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during SVD
#[derive(Error, Debug)]
pub enum SvdError {
    #[error(transparent)]
    Eigen(#[from] EigenError),
}

/// SVD result: `M = U·S·Vᵗ`
///
/// Holds the orthogonal factors `U` (m×m) and `V` (n×n), the
/// rectangular-diagonal `S` (m×n), and `D`, the diagonal of `S` as a
/// vector. After sign correction every entry of `D` is ≥ 0.
#[derive(Debug, Clone)]
pub struct SvdDecomposition<T: RealField> {
    u: Array2<T>,
    s: Array2<T>,
    v: Array2<T>,
    d: Array1<T>,
}

impl<T: RealField> SvdDecomposition<T> {
    /// Decompose an m×n matrix as `M = U·S·Vᵗ`.
    ///
    /// Eigensolver failures on either Gram product propagate unchanged.
    pub fn decompose(m: &Array2<T>) -> Result<Self, SvdError> {
        let gram_left = m.dot(&m.t());
        let gram_right = m.t().dot(m);

        let u = eigen_symmetric(&gram_left)?.vectors;
        let v = eigen_symmetric(&gram_right)?.vectors;

        let s = u.t().dot(m).dot(&v);
        let (u, s) = correct_signs(u, s);
        let d = s.diag().to_owned();

        Ok(Self { u, s, v, d })
    }

    /// The left singular vectors `U` (m×m, orthogonal).
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// The rectangular-diagonal matrix `S` (m×n) of singular values.
    pub fn s(&self) -> &Array2<T> {
        &self.s
    }

    /// The right singular vectors `V` (n×n, orthogonal).
    pub fn v(&self) -> &Array2<T> {
        &self.v
    }

    /// The singular values, the diagonal of `S`.
    pub fn d(&self) -> &Array1<T> {
        &self.d
    }

    /// Number of singular values strictly above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        self.d.iter().filter(|&&x| x > tol).count()
    }

    /// Ratio of the largest to the smallest singular value.
    pub fn condition_number(&self) -> T {
        let mut max = T::zero();
        let mut min = T::infinity();
        for &x in self.d.iter() {
            if x > max {
                max = x;
            }
            if x < min {
                min = x;
            }
        }
        if min == T::zero() {
            return T::infinity();
        }
        max / min
    }
}

/// Flip the sign of `U`'s columns wherever the matching diagonal entry of
/// `S` is negative, compensating for the eigensolver's sign ambiguity
/// (eigenvectors are only unique up to sign). On input whose diagonal is
/// already non-negative this returns both matrices unchanged.
fn correct_signs<T: RealField>(u: Array2<T>, s: Array2<T>) -> (Array2<T>, Array2<T>) {
    if s.diag().iter().all(|&x| x >= T::zero()) {
        return (u, s);
    }

    let m = u.nrows();
    let mut sig = Array2::<T>::eye(m);
    for (k, &x) in s.diag().iter().enumerate() {
        if x < T::zero() {
            sig[[k, k]] = -T::one();
        }
    }

    let u = u.dot(&sig);
    let s = sig.dot(&s);
    (u, s)
}
