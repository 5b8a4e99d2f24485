use crate::autograd::Op;
use crate::ops::unary_op;
use crate::var::Var;

/// Backward: `a` receives `cos(a) * grad`.
pub fn sin_op(a: Var<'_>) -> Var<'_> {
    unary_op(a, a.value().sin(), Op::Sin)
}

/// Backward: `a` receives `-sin(a) * grad`.
pub fn cos_op(a: Var<'_>) -> Var<'_> {
    unary_op(a, a.value().cos(), Op::Cos)
}

/// Backward: `a` receives `sec^2(a) * grad`.
pub fn tan_op(a: Var<'_>) -> Var<'_> {
    unary_op(a, a.value().tan(), Op::Tan)
}

impl<'g> Var<'g> {
    pub fn sin(self) -> Var<'g> {
        sin_op(self)
    }

    pub fn cos(self) -> Var<'g> {
        cos_op(self)
    }

    pub fn tan(self) -> Var<'g> {
        tan_op(self)
    }
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
