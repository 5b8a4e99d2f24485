use crate::autograd::Op;
use crate::ops::unary_op;
use crate::var::Var;

/// Hyperbolic tangent, `(e^{2a} - 1) / (e^{2a} + 1)`.
///
/// The forward value comes from [`f64::tanh`], which stays finite for large `|a|`
/// where the exponential form overflows. Backward: `a` receives `(1 - t^2) * grad`
/// with `t` the output value.
pub fn tanh_op(a: Var<'_>) -> Var<'_> {
    unary_op(a, a.value().tanh(), Op::Tanh)
}

impl<'g> Var<'g> {
    pub fn tanh(self) -> Var<'g> {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
