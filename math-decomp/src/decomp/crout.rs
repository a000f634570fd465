//! Crout decomposition
//!
//! The Crout recurrence factors `A = L·U` with `L` lower triangular and
//! `U` upper triangular with unit diagonal (the mirror of Doolittle's
//! convention). There is no pivoting, so a zero pivot is immediately
//! fatal: nothing downstream can recover it.

use crate::traits::RealField;
use ndarray::Array2;
use thiserror::Error;

/// Errors that can occur during Crout factorization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CroutError {
    #[error("division by zero: zero pivot L[{index}][{index}]")]
    ZeroPivot { index: usize },
    #[error("Crout decomposition needs at least as many rows as columns, got {rows}x{cols}")]
    TooFewRows { rows: usize, cols: usize },
}

/// Crout factorization result: `A = L·U` with unit-diagonal `U`
#[derive(Debug, Clone)]
pub struct CroutDecomposition<T: RealField> {
    l: Array2<T>,
    u: Array2<T>,
}

impl<T: RealField> CroutDecomposition<T> {
    /// Factor an m×n matrix (m ≥ n) as `A = L·U`.
    ///
    /// Column `j` of `L` is filled first; the pivot `L[j][j]` then scales
    /// row `j` of `U`. The recurrence divides by `L[j][j]` for every
    /// `j < n`, which is why inputs with fewer rows than columns are
    /// rejected up front.
    pub fn decompose(a: &Array2<T>) -> Result<Self, CroutError> {
        let (m, n) = a.dim();
        if m < n {
            return Err(CroutError::TooFewRows { rows: m, cols: n });
        }

        let mut l = Array2::<T>::zeros((m, n));
        let mut u = Array2::<T>::eye(n);

        for j in 0..n {
            // Column j of L
            for i in j..m {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += l[[i, k]] * u[[k, j]];
                }
                l[[i, j]] = a[[i, j]] - sum;
            }

            // Row j of U, scaled by the pivot
            let pivot = l[[j, j]];
            if pivot == T::zero() {
                return Err(CroutError::ZeroPivot { index: j });
            }
            for i in j..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += l[[j, k]] * u[[k, i]];
                }
                u[[j, i]] = (a[[j, i]] - sum) / pivot;
            }
        }

        Ok(Self { l, u })
    }

    /// The lower triangular factor `L` (m×n).
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper triangular factor `U` (n×n), unit diagonal.
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }
}
