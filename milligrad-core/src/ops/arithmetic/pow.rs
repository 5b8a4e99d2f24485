use crate::autograd::Op;
use crate::ops::unary_op;
use crate::var::Var;
use std::f64::consts::E;

/// Raises a variable to a constant power: `a ^ k`.
///
/// Backward: `a` receives `k * a^(k-1) * grad`.
pub fn powf_op(a: Var<'_>, k: f64) -> Var<'_> {
    unary_op(a, a.value().powf(k), Op::PowConst(k))
}

/// Raises a constant base to a variable power: `base ^ a`.
///
/// Backward: `a` receives `out * ln(base) * grad`.
pub fn exp_base_op(a: Var<'_>, base: f64) -> Var<'_> {
    unary_op(a, base.powf(a.value()), Op::ExpBase(base))
}

/// `e ^ a`.
pub fn exp_op(a: Var<'_>) -> Var<'_> {
    exp_base_op(a, E)
}

impl<'g> Var<'g> {
    /// `self ^ k` for a constant exponent.
    pub fn powf(self, k: f64) -> Var<'g> {
        powf_op(self, k)
    }

    /// `base ^ self` for a constant base.
    pub fn exp_base(self, base: f64) -> Var<'g> {
        exp_base_op(self, base)
    }

    pub fn exp(self) -> Var<'g> {
        exp_op(self)
    }

    pub fn square(self) -> Var<'g> {
        powf_op(self, 2.0)
    }

    pub fn sqrt(self) -> Var<'g> {
        powf_op(self, 0.5)
    }

    pub fn recip(self) -> Var<'g> {
        powf_op(self, -1.0)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
