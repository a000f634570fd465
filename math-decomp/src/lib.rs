//! Dense matrix factorizations for statistics and optimization code
//!
//! This crate provides the matrix decompositions used by regression, PCA,
//! and multivariate-distribution code, along with the triangular solvers
//! they are built from.
//!
//! # Features
//!
//! - **LU**: Doolittle's method with partial pivoting, exposing the
//!   `P`, `L`, `U` factors and a linear solve (plus determinant and inverse)
//! - **Crout**: the pivot-free LU variant with unit-diagonal `U`
//! - **SVD**: singular value decomposition built from eigendecompositions
//!   of the Gram products, with sign-corrected singular values
//! - **Substitution**: forward/back substitution for triangular systems
//! - **Eigensolver**: cyclic Jacobi for symmetric matrices
//! - **Generic Scalar Types**: works with f64 and f32 via [`RealField`]
//!
//! Matrices and vectors are `ndarray` arrays.
//!
//! # Example
//!
//! ```
//! use math_decomp::LuDecomposition;
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 3.0], [6.0, 3.0]];
//! let lu = LuDecomposition::decompose(&a)?;
//! let x = lu.solve(&array![1.0_f64, 1.0])?;
//! # Ok::<(), math_decomp::LuError>(())
//! ```

pub mod decomp;
pub mod eigen;
pub mod substitution;
pub mod traits;

// Re-export main types
pub use traits::RealField;

// Re-export decompositions
pub use decomp::{
    CroutDecomposition, CroutError, LuDecomposition, LuError, SvdDecomposition, SvdError,
};

// Re-export the eigensolver
pub use eigen::{EigenDecomposition, EigenError, JacobiConfig, eigen_symmetric, eigen_symmetric_with};

// Re-export substitution routines
pub use substitution::{SubstitutionError, back_substitution, forward_substitution};
