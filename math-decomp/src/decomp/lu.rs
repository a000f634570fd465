//! LU decomposition with partial pivoting
//!
//! Doolittle's method: a square matrix `A` is factored as `P·A = L·U` where
//! `P` is a permutation matrix from partial pivoting, `L` is lower
//! triangular with unit diagonal and `U` is upper triangular. The
//! factorization backs the linear solve used by regression and
//! distribution code, and gives the determinant and inverse for free.

use crate::substitution::{SubstitutionError, back_substitution, forward_substitution};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during LU factorization and solve
#[derive(Error, Debug)]
pub enum LuError {
    #[error("LU decomposition requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("right-hand side length mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

/// LU factorization result
///
/// Owns the permutation matrix `P` and the triangular factors `L` (unit
/// diagonal) and `U`, with `P·A = L·U`. A zero pivot met while filling `L`
/// does not fail the construction: the affected entries are NaN and the
/// error surfaces later, when [`solve`](Self::solve) divides by the zero
/// diagonal of `U`.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    l: Array2<T>,
    u: Array2<T>,
    p: Array2<T>,
    /// Permutation parity (+1 or -1), for the determinant
    sign: T,
    n: usize,
}

impl<T: RealField> LuDecomposition<T> {
    /// Factor a square matrix as `P·A = L·U`.
    ///
    /// ```
    /// use math_decomp::LuDecomposition;
    /// use ndarray::array;
    ///
    /// let a = array![[1.0_f64, 3.0, 5.0], [2.0, 4.0, 7.0], [1.0, 1.0, 0.0]];
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// let pa = lu.p().dot(&a);
    /// let prod = lu.l().dot(lu.u());
    /// assert!((pa[[0, 0]] - prod[[0, 0]]).abs() < 1e-12);
    /// ```
    pub fn decompose(a: &Array2<T>) -> Result<Self, LuError> {
        let (rows, cols) = a.dim();
        if rows != cols {
            return Err(LuError::NotSquare { rows, cols });
        }
        let n = rows;

        let (p, sign) = pivotize(a);
        let pa = p.dot(a);

        let mut l = Array2::<T>::eye(n);
        let mut u = Array2::<T>::zeros((n, n));

        // Column-major fill: column i of U over rows 0..=i, then column i
        // of L over rows i..n. For a non-zero pivot the diagonal of L
        // recomputes to exactly 1.
        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += u[[k, i]] * l[[j, k]];
                }
                u[[j, i]] = pa[[j, i]] - sum;
            }

            let pivot = u[[i, i]];
            if pivot == T::zero() {
                log::warn!("zero pivot U[{i}][{i}]: filling column {i} of L with NaN");
            }
            for j in i..n {
                let mut sum = T::zero();
                for k in 0..i {
                    sum += u[[k, i]] * l[[j, k]];
                }
                l[[j, i]] = if pivot == T::zero() {
                    T::nan()
                } else {
                    (pa[[j, i]] - sum) / pivot
                };
            }
        }

        Ok(Self { l, u, p, sign, n })
    }

    /// The lower triangular factor `L`, unit diagonal.
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper triangular factor `U`.
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// The permutation matrix `P`.
    pub fn p(&self) -> &Array2<T> {
        &self.p
    }

    /// Solve `A·x = b` using the factorization.
    ///
    /// Applies the permutation (`Pb = P·b`), then forward substitution
    /// (`Ly = Pb`) and back substitution (`Ux = y`). A zero diagonal entry
    /// of `U` here is a hard error, unlike during construction: a zero
    /// pivot at solve time means the system has no unique solution along
    /// this path.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, LuError> {
        if b.len() != self.n {
            return Err(LuError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let pb = self.p.dot(b);
        let y = forward_substitution(&self.l, &pb)?;
        let x = back_substitution(&self.u, &y)?;
        Ok(x)
    }

    /// Determinant of `A`: the permutation parity times the product of the
    /// diagonal of `U`.
    pub fn det(&self) -> T {
        let mut d = self.sign;
        for i in 0..self.n {
            d *= self.u[[i, i]];
        }
        d
    }

    /// Inverse of `A`, computed by solving `A·X = I` column by column.
    pub fn inverse(&self) -> Result<Array2<T>, LuError> {
        let n = self.n;
        let mut inv = Array2::<T>::zeros((n, n));

        for col in 0..n {
            let mut e = Array1::<T>::zeros(n);
            e[col] = T::one();

            let x = self.solve(&e)?;
            for row in 0..n {
                inv[[row, col]] = x[row];
            }
        }

        Ok(inv)
    }
}

/// Build the permutation matrix for partial pivoting.
///
/// For each column `i`, rows `i..n` of `A` are scanned for the maximum
/// entry; when a row strictly greater than the running maximum is found,
/// that row is promoted by interchanging rows of `P` (never of `A`).
/// Replacement only happens on a strict `>`, so the first maximal row wins
/// ties. Also returns the permutation parity.
fn pivotize<T: RealField>(a: &Array2<T>) -> (Array2<T>, T) {
    let n = a.nrows();
    let mut p = Array2::<T>::eye(n);
    let mut sign = T::one();

    for i in 0..n {
        let mut max = a[[i, i]];
        let mut row = i;
        for j in i..n {
            if a[[j, i]] > max {
                max = a[[j, i]];
                row = j;
            }
        }
        if row != i {
            for k in 0..n {
                p.swap([i, k], [row, k]);
            }
            sign = -sign;
        }
    }

    (p, sign)
}
