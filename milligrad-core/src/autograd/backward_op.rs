/// The operation that produced a node.
///
/// Each variant carries only the constants its derivative needs; operand values are
/// read from the parent nodes when the backward pass runs. Leaves are tagged
/// [`Op::Leaf`] and push nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    /// `a + b`, or `a + c` with a single parent.
    Add,
    /// `a * b`.
    Mul,
    /// `a * c` for a constant `c`.
    Scale(f64),
    /// `a ^ k` for a constant exponent `k`.
    PowConst(f64),
    /// `k ^ a` for a constant base `k`.
    ExpBase(f64),
    /// `log_k(a)` for a constant base `k`.
    Log(f64),
    Sin,
    Cos,
    Tan,
    Relu,
    Tanh,
}

impl Op {
    /// Short lowercase name, used in logs and `Debug` output of variables.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Scale(_) => "scale",
            Op::PowConst(_) => "pow",
            Op::ExpBase(_) => "exp_base",
            Op::Log(_) => "log",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Relu => "relu",
            Op::Tanh => "tanh",
        }
    }

    /// Number of node operands the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            _ => 1,
        }
    }

    /// Computes the contribution pushed to each parent slot.
    ///
    /// Implements the chain rule for this operation:
    /// \\( \frac{dL}{d\text{in}_i} = \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{d\text{in}_i} \\).
    ///
    /// # Arguments
    /// * `out_value`: the value of the node this operation produced.
    /// * `out_grad`: the node's accumulated gradient, already final when this runs.
    /// * `inputs`: the parents' values by slot; an absent slot reads as `0.0`.
    ///
    /// # Returns
    /// The gradient contribution for each slot. Contributions for absent parents are
    /// ignored by the caller.
    pub fn local_backward(&self, out_value: f64, out_grad: f64, inputs: [f64; 2]) -> [f64; 2] {
        let [a, b] = inputs;
        match *self {
            Op::Leaf => [0.0, 0.0],
            Op::Add => [out_grad, out_grad],
            Op::Mul => [b * out_grad, a * out_grad],
            Op::Scale(c) => [c * out_grad, 0.0],
            Op::PowConst(k) => [k * a.powf(k - 1.0) * out_grad, 0.0],
            Op::ExpBase(k) => [out_value * k.ln() * out_grad, 0.0],
            Op::Log(k) => [1.0 / (a * k.ln()) * out_grad, 0.0],
            Op::Sin => [a.cos() * out_grad, 0.0],
            Op::Cos => [-a.sin() * out_grad, 0.0],
            Op::Tan => [out_grad / (a.cos() * a.cos()), 0.0],
            Op::Relu => [if a > 0.0 { out_grad } else { 0.0 }, 0.0],
            Op::Tanh => [(1.0 - out_value * out_value) * out_grad, 0.0],
        }
    }
}
