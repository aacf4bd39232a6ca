//! This module contains building blocks for constructing initial tours.
//!
//! Two strategies are available: a uniformly random permutation and a greedy nearest neighbor
//! construction which typically produces much shorter tours and speeds up convergence.

mod initial;
pub use self::initial::*;
