use crate::autograd::Op;
use crate::ops::unary_op;
use crate::var::Var;
use std::f64::consts::E;

/// Logarithm of `a` in a constant `base`: `ln(a) / ln(base)`.
///
/// Backward: `a` receives `grad / (a * ln(base))`. A non-positive `a` yields NaN or
/// infinities, which propagate without error.
pub fn log_op(a: Var<'_>, base: f64) -> Var<'_> {
    unary_op(a, a.value().ln() / base.ln(), Op::Log(base))
}

/// Natural logarithm.
pub fn ln_op(a: Var<'_>) -> Var<'_> {
    log_op(a, E)
}

pub fn log2_op(a: Var<'_>) -> Var<'_> {
    log_op(a, 2.0)
}

pub fn log10_op(a: Var<'_>) -> Var<'_> {
    log_op(a, 10.0)
}

impl<'g> Var<'g> {
    pub fn log(self, base: f64) -> Var<'g> {
        log_op(self, base)
    }

    pub fn ln(self) -> Var<'g> {
        ln_op(self)
    }

    pub fn log2(self) -> Var<'g> {
        log2_op(self)
    }

    pub fn log10(self) -> Var<'g> {
        log10_op(self)
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
