use crate::autograd::Op;
use crate::ops::{binary_op, unary_op};
use crate::var::Var;
use std::ops::{Add, AddAssign};

/// Adds two variables: `a + b`.
///
/// Backward pushes the output gradient unchanged to both operands. `add_op(x, x)` is a
/// valid node whose single parent receives the gradient twice.
pub fn add_op<'g>(a: Var<'g>, b: Var<'g>) -> Var<'g> {
    binary_op(a, b, a.value() + b.value(), Op::Add)
}

/// Adds a constant: `a + c`. Only `a` receives a gradient.
pub fn add_scalar_op(a: Var<'_>, c: f64) -> Var<'_> {
    unary_op(a, a.value() + c, Op::Add)
}

impl<'g> Add for Var<'g> {
    type Output = Var<'g>;

    fn add(self, rhs: Var<'g>) -> Var<'g> {
        add_op(self, rhs)
    }
}

impl<'g> Add<f64> for Var<'g> {
    type Output = Var<'g>;

    fn add(self, rhs: f64) -> Var<'g> {
        add_scalar_op(self, rhs)
    }
}

impl<'g> Add<Var<'g>> for f64 {
    type Output = Var<'g>;

    fn add(self, rhs: Var<'g>) -> Var<'g> {
        add_scalar_op(rhs, self)
    }
}

impl<'g> AddAssign for Var<'g> {
    fn add_assign(&mut self, rhs: Var<'g>) {
        *self = add_op(*self, rhs);
    }
}

impl AddAssign<f64> for Var<'_> {
    fn add_assign(&mut self, rhs: f64) {
        *self = add_scalar_op(*self, rhs);
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
