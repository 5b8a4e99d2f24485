use crate::ops::arithmetic::mul::{mul_op, scale_op};
use crate::ops::arithmetic::pow::powf_op;
use crate::var::Var;
use std::ops::{Div, DivAssign};

/// Divides two variables, expressed as `a * b^-1`.
///
/// Division by a zero-valued `b` yields infinities rather than an error.
pub fn div_op<'g>(a: Var<'g>, b: Var<'g>) -> Var<'g> {
    mul_op(a, powf_op(b, -1.0))
}

/// `a / c` for a constant `c`, expressed as `a * c^-1`.
pub fn div_scalar_op(a: Var<'_>, c: f64) -> Var<'_> {
    scale_op(a, c.powi(-1))
}

/// `c / a` for a constant `c`, expressed as `c * a^-1`.
pub fn rdiv_scalar_op(c: f64, a: Var<'_>) -> Var<'_> {
    scale_op(powf_op(a, -1.0), c)
}

impl<'g> Div for Var<'g> {
    type Output = Var<'g>;

    fn div(self, rhs: Var<'g>) -> Var<'g> {
        div_op(self, rhs)
    }
}

impl<'g> Div<f64> for Var<'g> {
    type Output = Var<'g>;

    fn div(self, rhs: f64) -> Var<'g> {
        div_scalar_op(self, rhs)
    }
}

impl<'g> Div<Var<'g>> for f64 {
    type Output = Var<'g>;

    fn div(self, rhs: Var<'g>) -> Var<'g> {
        rdiv_scalar_op(self, rhs)
    }
}

impl<'g> DivAssign for Var<'g> {
    fn div_assign(&mut self, rhs: Var<'g>) {
        *self = div_op(*self, rhs);
    }
}

impl DivAssign<f64> for Var<'_> {
    fn div_assign(&mut self, rhs: f64) {
        *self = div_scalar_op(*self, rhs);
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
