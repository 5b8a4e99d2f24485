use crate::ops::arithmetic::mul::scale_op;
use crate::var::Var;
use std::ops::Neg;

/// Negates a variable, expressed as `a * -1`.
pub fn neg_op(a: Var<'_>) -> Var<'_> {
    scale_op(a, -1.0)
}

impl<'g> Neg for Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
