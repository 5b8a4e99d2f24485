//! # Elementary Operations (`ops`)
//!
//! Every operation is a pure function from one or two existing variables (and possibly
//! an `f64` constant) to a brand-new node in the same graph. Each core function is named
//! `xxx_op`, computes the forward value, records the operands as parents and tags the
//! node with the [`Op`] whose rule the backward pass will apply.
//!
//! The same operations are exposed as methods on [`Var`] and, for arithmetic, through
//! the `std::ops` operator traits including mixed `Var`/`f64` operands.
//!
//! - [`arithmetic`]: add, mul, neg, sub, div, pow.
//! - [`math_elem`]: logarithms and trigonometric functions.
//! - [`activation`]: relu, tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, exp_base_op, exp_op, mul_op, neg_op,
    powf_op, rdiv_scalar_op, rsub_scalar_op, scale_op, sub_op, sub_scalar_op,
};
pub use math_elem::{cos_op, ln_op, log10_op, log2_op, log_op, sin_op, tan_op};

use crate::autograd::Op;
use crate::var::Var;

/// Appends a single-operand node computed from `a`.
pub(crate) fn unary_op<'g>(a: Var<'g>, value: f64, op: Op) -> Var<'g> {
    let graph = a.graph();
    let id = graph.derive(value, op, [Some(a.id()), None]);
    graph.var_unchecked(id)
}

/// Appends a two-operand node computed from `a` and `b`.
///
/// # Panics
/// If `a` and `b` belong to different graphs.
pub(crate) fn binary_op<'g>(a: Var<'g>, b: Var<'g>, value: f64, op: Op) -> Var<'g> {
    assert!(
        a.same_graph(&b),
        "operands of `{}` belong to different graphs",
        op.name()
    );
    let graph = a.graph();
    let id = graph.derive(value, op, [Some(a.id()), Some(b.id())]);
    graph.var_unchecked(id)
}
