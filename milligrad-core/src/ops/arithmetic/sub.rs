use crate::ops::arithmetic::add::{add_op, add_scalar_op};
use crate::ops::arithmetic::neg::neg_op;
use crate::var::Var;
use std::ops::{Sub, SubAssign};

/// Subtracts two variables, expressed as `a + (-1 * b)`.
pub fn sub_op<'g>(a: Var<'g>, b: Var<'g>) -> Var<'g> {
    add_op(a, neg_op(b))
}

/// `a - c` for a constant `c`.
pub fn sub_scalar_op(a: Var<'_>, c: f64) -> Var<'_> {
    add_scalar_op(a, -c)
}

/// `c - a` for a constant `c`.
pub fn rsub_scalar_op(c: f64, a: Var<'_>) -> Var<'_> {
    add_scalar_op(neg_op(a), c)
}

impl<'g> Sub for Var<'g> {
    type Output = Var<'g>;

    fn sub(self, rhs: Var<'g>) -> Var<'g> {
        sub_op(self, rhs)
    }
}

impl<'g> Sub<f64> for Var<'g> {
    type Output = Var<'g>;

    fn sub(self, rhs: f64) -> Var<'g> {
        sub_scalar_op(self, rhs)
    }
}

impl<'g> Sub<Var<'g>> for f64 {
    type Output = Var<'g>;

    fn sub(self, rhs: Var<'g>) -> Var<'g> {
        rsub_scalar_op(self, rhs)
    }
}

impl<'g> SubAssign for Var<'g> {
    fn sub_assign(&mut self, rhs: Var<'g>) {
        *self = sub_op(*self, rhs);
    }
}

impl SubAssign<f64> for Var<'_> {
    fn sub_assign(&mut self, rhs: f64) {
        *self = sub_scalar_op(*self, rhs);
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
