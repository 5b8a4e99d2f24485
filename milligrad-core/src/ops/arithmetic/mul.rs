use crate::autograd::Op;
use crate::ops::{binary_op, unary_op};
use crate::var::Var;
use std::ops::{Mul, MulAssign};

/// Multiplies two variables: `a * b`.
///
/// Backward: `a` receives `b.value * grad`, `b` receives `a.value * grad`.
pub fn mul_op<'g>(a: Var<'g>, b: Var<'g>) -> Var<'g> {
    binary_op(a, b, a.value() * b.value(), Op::Mul)
}

/// Multiplies by a constant: `a * c`. `a` receives `c * grad`.
pub fn scale_op(a: Var<'_>, c: f64) -> Var<'_> {
    unary_op(a, a.value() * c, Op::Scale(c))
}

impl<'g> Mul for Var<'g> {
    type Output = Var<'g>;

    fn mul(self, rhs: Var<'g>) -> Var<'g> {
        mul_op(self, rhs)
    }
}

impl<'g> Mul<f64> for Var<'g> {
    type Output = Var<'g>;

    fn mul(self, rhs: f64) -> Var<'g> {
        scale_op(self, rhs)
    }
}

impl<'g> Mul<Var<'g>> for f64 {
    type Output = Var<'g>;

    fn mul(self, rhs: Var<'g>) -> Var<'g> {
        scale_op(rhs, self)
    }
}

impl<'g> MulAssign for Var<'g> {
    fn mul_assign(&mut self, rhs: Var<'g>) {
        *self = mul_op(*self, rhs);
    }
}

impl MulAssign<f64> for Var<'_> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = scale_op(*self, rhs);
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
