use crate::optim::Optimizer;
use milligrad_core::{Graph, MilligradError, NodeId};

/// Plain gradient descent: `value -= lr * grad` for every parameter.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    params: Vec<NodeId>,
    lr: f64,
}

fn check_lr(lr: f64) -> Result<(), MilligradError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(MilligradError::InvalidArgument(format!(
            "learning rate must be finite and non-negative, got {}",
            lr
        )));
    }
    Ok(())
}

impl GradientDescent {
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, MilligradError> {
        check_lr(lr)?;
        Ok(GradientDescent {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), MilligradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self, graph: &Graph) -> Result<(), MilligradError> {
        for &id in &self.params {
            let value = graph.value(id)?;
            let grad = graph.grad(id)?;
            graph.set_value(id, value - self.lr * grad)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self, graph: &Graph) -> Result<(), MilligradError> {
        for &id in &self.params {
            graph.set_grad(id, 0.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
