use milligrad_core::{Graph, MilligradError};

/// Common interface of parameter update rules.
///
/// An optimizer owns the handles of the parameters it updates; the graph holding their
/// values and gradients is passed to every call.
pub trait Optimizer {
    /// Updates every managed parameter from its accumulated gradient.
    fn step(&mut self, graph: &Graph) -> Result<(), MilligradError>;

    /// Resets the gradient of every managed parameter to `0.0`.
    fn zero_grad(&mut self, graph: &Graph) -> Result<(), MilligradError>;
}
