use crate::autograd::Op;
use crate::ops::unary_op;
use crate::var::Var;

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: `a` receives `grad` when `a > 0`, otherwise nothing. The subgradient at
/// exactly zero is taken as 0.
pub fn relu_op(a: Var<'_>) -> Var<'_> {
    let x = a.value();
    unary_op(a, if x > 0.0 { x } else { 0.0 }, Op::Relu)
}

impl<'g> Var<'g> {
    pub fn relu(self) -> Var<'g> {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
