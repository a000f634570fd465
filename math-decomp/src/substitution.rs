//! Forward and back substitution for triangular systems
//!
//! These routines are the building blocks of `LuDecomposition::solve`:
//! `Ly = Pb` is solved top-down with [`forward_substitution`], then
//! `Ux = y` bottom-up with [`back_substitution`]. A zero diagonal entry is
//! a hard error in both directions, since a triangular system with a zero
//! pivot has no unique solution.

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during triangular substitution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("division by zero: zero diagonal entry at row {row}")]
    DivisionByZero { row: usize },
    #[error("matrix dimensions mismatch: expected {expected}x{expected}, got {rows}x{cols}")]
    DimensionMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },
}

/// Solve `L·y = b` for a lower triangular `L` by forward substitution.
///
/// `y[0] = b[0]/L[0][0]`, then for increasing `i`:
/// `y[i] = (b[i] − Σ_{j<i} L[i][j]·y[j]) / L[i][i]`.
pub fn forward_substitution<T: RealField>(
    l: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SubstitutionError> {
    let n = b.len();
    let (rows, cols) = l.dim();
    if rows != n || cols != n {
        return Err(SubstitutionError::DimensionMismatch {
            expected: n,
            rows,
            cols,
        });
    }

    let mut y = Array1::<T>::zeros(n);
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        if l[[i, i]] == T::zero() {
            return Err(SubstitutionError::DivisionByZero { row: i });
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }
    Ok(y)
}

/// Solve `U·x = y` for an upper triangular `U` by back substitution.
///
/// `x[n−1] = y[n−1]/U[n−1][n−1]`, then for decreasing `i`:
/// `x[i] = (y[i] − Σ_{j>i} U[i][j]·x[j]) / U[i][i]`.
pub fn back_substitution<T: RealField>(
    u: &Array2<T>,
    y: &Array1<T>,
) -> Result<Array1<T>, SubstitutionError> {
    let n = y.len();
    let (rows, cols) = u.dim();
    if rows != n || cols != n {
        return Err(SubstitutionError::DimensionMismatch {
            expected: n,
            rows,
            cols,
        });
    }

    let mut x = Array1::<T>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += u[[i, j]] * x[j];
        }
        if u[[i, i]] == T::zero() {
            return Err(SubstitutionError::DivisionByZero { row: i });
        }
        x[i] = (y[i] - sum) / u[[i, i]];
    }
    Ok(x)
}
