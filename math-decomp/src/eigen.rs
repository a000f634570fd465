//! Symmetric eigendecomposition via cyclic Jacobi rotations
//!
//! Decomposes a real symmetric matrix `A` into `A = V·D·Vᵗ` where `V` is
//! orthogonal (columns are eigenvectors) and `D` is diagonal. This is the
//! solver the SVD consumes on the Gram products `M·Mᵗ` and `Mᵗ·M`, which
//! are symmetric by construction.
//!
//! Rotations are applied in sweeps over all off-diagonal pairs until the
//! off-diagonal norm falls below a tolerance relative to the input's
//! Frobenius norm.

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Jacobi sweep configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig<R> {
    /// Maximum number of sweeps over all off-diagonal pairs
    pub max_sweeps: usize,
    /// Relative tolerance on the off-diagonal norm
    pub tolerance: R,
}

impl<R: RealField> Default for JacobiConfig<R> {
    fn default() -> Self {
        Self {
            max_sweeps: 100,
            tolerance: R::sweep_tolerance(),
        }
    }
}

/// Errors that can occur during eigendecomposition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EigenError {
    #[error("eigendecomposition requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Jacobi iteration did not converge within {sweeps} sweeps")]
    NoConvergence { sweeps: usize },
}

/// Eigendecomposition result for a symmetric matrix: `A = V·D·Vᵗ`
#[derive(Debug, Clone)]
pub struct EigenDecomposition<T: RealField> {
    /// Eigenvalues in descending order
    pub values: Array1<T>,
    /// Orthogonal matrix whose columns are the eigenvectors, ordered to
    /// match `values`
    pub vectors: Array2<T>,
}

/// Compute the eigendecomposition of a symmetric matrix with the default
/// Jacobi settings.
pub fn eigen_symmetric<T: RealField>(a: &Array2<T>) -> Result<EigenDecomposition<T>, EigenError> {
    eigen_symmetric_with(a, &JacobiConfig::default())
}

/// Compute the eigendecomposition of a symmetric matrix.
///
/// The rotations assume `A[i][j] == A[j][i]`; only symmetric input is
/// meaningful. Eigenvectors are unique up to sign, and no particular sign
/// is promised here (the SVD's sign correction compensates downstream).
pub fn eigen_symmetric_with<T: RealField>(
    a: &Array2<T>,
    config: &JacobiConfig<T>,
) -> Result<EigenDecomposition<T>, EigenError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(EigenError::NotSquare { rows, cols });
    }
    let n = rows;

    let mut s = a.clone();
    let mut v = Array2::<T>::eye(n);

    // Thresholds scale with the input so convergence does not depend on the
    // matrix's magnitude.
    let norm = frobenius_norm(a);
    let threshold = config.tolerance * norm;
    let skip = T::epsilon() * norm;

    for sweep in 0..config.max_sweeps {
        let off = off_diagonal_norm(&s);
        log::debug!(
            "jacobi sweep {}: off-diagonal norm = {:.6e}",
            sweep,
            off.to_f64().unwrap_or(0.0)
        );
        if off <= threshold {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = s[[p, q]];
                if apq.abs() <= skip {
                    continue;
                }

                let app = s[[p, p]];
                let aqq = s[[q, q]];

                // Rotation angle via the stable tangent formula
                let theta = (aqq - app) / (apq + apq);
                let t = if theta >= T::zero() {
                    T::one() / (theta + (T::one() + theta * theta).sqrt())
                } else {
                    -(T::one() / (-theta + (T::one() + theta * theta).sqrt()))
                };
                let cs = T::one() / (T::one() + t * t).sqrt();
                let sn = t * cs;

                // S' = Gᵗ·S·G, touching only rows/columns p and q
                s[[p, p]] = app - t * apq;
                s[[q, q]] = aqq + t * apq;
                s[[p, q]] = T::zero();
                s[[q, p]] = T::zero();

                for r in 0..n {
                    if r == p || r == q {
                        continue;
                    }
                    let srp = s[[r, p]];
                    let srq = s[[r, q]];
                    s[[r, p]] = cs * srp - sn * srq;
                    s[[p, r]] = s[[r, p]];
                    s[[r, q]] = sn * srp + cs * srq;
                    s[[q, r]] = s[[r, q]];
                }

                // V' = V·G
                for i in 0..n {
                    let vp = v[[i, p]];
                    let vq = v[[i, q]];
                    v[[i, p]] = cs * vp - sn * vq;
                    v[[i, q]] = sn * vp + cs * vq;
                }
            }
        }
    }

    if off_diagonal_norm(&s) > threshold {
        return Err(EigenError::NoConvergence {
            sweeps: config.max_sweeps,
        });
    }

    // Sort eigenpairs by descending eigenvalue
    let eigenvalues: Vec<T> = (0..n).map(|i| s[[i, i]]).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        eigenvalues[j]
            .partial_cmp(&eigenvalues[i])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut values = Array1::<T>::zeros(n);
    let mut vectors = Array2::<T>::zeros((n, n));
    for (new_j, &old_j) in order.iter().enumerate() {
        values[new_j] = eigenvalues[old_j];
        for i in 0..n {
            vectors[[i, new_j]] = v[[i, old_j]];
        }
    }

    Ok(EigenDecomposition { values, vectors })
}

fn frobenius_norm<T: RealField>(a: &Array2<T>) -> T {
    let mut sum = T::zero();
    for &x in a.iter() {
        sum += x * x;
    }
    sum.sqrt()
}

fn off_diagonal_norm<T: RealField>(a: &Array2<T>) -> T {
    let n = a.nrows();
    let mut sum = T::zero();
    for i in 0..n {
        for j in (i + 1)..n {
            sum += a[[i, j]] * a[[i, j]] + a[[j, i]] * a[[j, i]];
        }
    }
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_mat_eq(a: &Array2<f64>, b: &Array2<f64>, eps: f64) {
        assert_eq!(a.dim(), b.dim());
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                assert_relative_eq!(a[[i, j]], b[[i, j]], epsilon = eps);
            }
        }
    }

    #[test]
    fn test_eigen_diagonal() {
        let a = array![[3.0_f64, 0.0], [0.0, 5.0]];
        let eig = eigen_symmetric(&a).unwrap();
        assert_relative_eq!(eig.values[0], 5.0, epsilon = 1e-10);
        assert_relative_eq!(eig.values[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_eigen_identity() {
        let eye = Array2::<f64>::eye(3);
        let eig = eigen_symmetric(&eye).unwrap();
        for i in 0..3 {
            assert_relative_eq!(eig.values[i], 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_eigen_2x2() {
        // [[2,1],[1,3]] eigenvalues: (5 ± sqrt(5))/2
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let eig = eigen_symmetric(&a).unwrap();
        let sqrt5 = 5.0_f64.sqrt();
        assert_relative_eq!(eig.values[0], 2.5 + 0.5 * sqrt5, epsilon = 1e-10);
        assert_relative_eq!(eig.values[1], 2.5 - 0.5 * sqrt5, epsilon = 1e-10);
    }

    #[test]
    fn test_eigen_negative_eigenvalue() {
        // [[1,2],[2,1]] has eigenvalues 3 and -1
        let a = array![[1.0_f64, 2.0], [2.0, 1.0]];
        let eig = eigen_symmetric(&a).unwrap();
        assert_relative_eq!(eig.values[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(eig.values[1], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_eigen_reconstruction() {
        let a = array![
            [4.0_f64, 2.0, 1.0],
            [2.0, 5.0, 3.0],
            [1.0, 3.0, 6.0]
        ];
        let eig = eigen_symmetric(&a).unwrap();

        // Reconstruct: A = V D V^T
        let mut d = Array2::<f64>::zeros((3, 3));
        for i in 0..3 {
            d[[i, i]] = eig.values[i];
        }
        let reconstructed = eig.vectors.dot(&d).dot(&eig.vectors.t());
        assert_mat_eq(&reconstructed, &a, 1e-8);
    }

    #[test]
    fn test_eigen_orthogonal_eigenvectors() {
        let a = array![
            [4.0_f64, 2.0, 1.0],
            [2.0, 5.0, 3.0],
            [1.0, 3.0, 6.0]
        ];
        let eig = eigen_symmetric(&a).unwrap();
        let vtv = eig.vectors.t().dot(&eig.vectors);
        assert_mat_eq(&vtv, &Array2::<f64>::eye(3), 1e-8);
    }

    #[test]
    fn test_eigen_zero_matrix() {
        let a = Array2::<f64>::zeros((3, 3));
        let eig = eigen_symmetric(&a).unwrap();
        for i in 0..3 {
            assert_relative_eq!(eig.values[i], 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_eigen_not_square() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let result = eigen_symmetric(&a);
        assert_eq!(result.unwrap_err(), EigenError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_eigen_no_convergence() {
        // Zero sweeps cannot diagonalize a matrix with off-diagonal mass
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let config = JacobiConfig {
            max_sweeps: 0,
            tolerance: <f64 as RealField>::sweep_tolerance(),
        };
        let result = eigen_symmetric_with(&a, &config);
        assert_eq!(result.unwrap_err(), EigenError::NoConvergence { sweeps: 0 });
    }
}
