//! Matrix decompositions
//!
//! This module provides the factorization types:
//! - [`LuDecomposition`]: LU with partial pivoting, plus the linear solve
//! - [`CroutDecomposition`]: LU via the Crout recurrence, no pivoting
//! - [`SvdDecomposition`]: singular value decomposition

mod crout;
mod lu;
mod svd;

pub use crout::{CroutDecomposition, CroutError};
pub use lu::{LuDecomposition, LuError};
pub use svd::{SvdDecomposition, SvdError};
