//! Reverse-mode differentiation over the node arena.
//!
//! - [`backward_op`]: the tagged operation kinds and their local derivative rules.
//! - [`graph`]: topological ordering and the backward sweep.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
