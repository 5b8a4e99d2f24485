use crate::nn::init::he_normal_values;
use crate::nn::module::Module;
use crate::nn::Parameter;
use milligrad_core::{Graph, MilligradError, Var};
use rand::Rng;

/// A single neuron: `dot(weights, input) + bias`, optionally followed by `tanh`.
///
/// Not `Clone`, as a copy would share the parameter leaves.
#[derive(Debug)]
pub struct Unit {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Unit {
    /// Creates a unit with `num_inputs` weights and a bias, all He-initialised from `rng`.
    ///
    /// # Errors
    /// `InvalidArgument` if `num_inputs` is zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        num_inputs: usize,
        rng: &mut R,
    ) -> Result<Self, MilligradError> {
        let values = he_normal_values(rng, num_inputs, num_inputs + 1)?;
        let (bias, weights) = values
            .split_last()
            .ok_or_else(|| MilligradError::Initialization("no values drawn".to_string()))?;
        Self::from_values(graph, weights, *bias)
    }

    /// Creates a unit with explicit weight and bias values.
    pub fn from_values(graph: &Graph, weights: &[f64], bias: f64) -> Result<Self, MilligradError> {
        if weights.is_empty() {
            return Err(MilligradError::InvalidArgument(
                "a unit needs at least one weight".to_string(),
            ));
        }
        Ok(Unit {
            weights: weights.iter().map(|&w| Parameter::new(graph, w)).collect(),
            bias: Parameter::new(graph, bias),
        })
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Builds the unit's output node for `input`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input.len()` differs from the number of weights.
    pub fn forward<'g>(
        &self,
        graph: &'g Graph,
        input: &[Var<'g>],
        activation: bool,
    ) -> Result<Var<'g>, MilligradError> {
        if input.len() != self.weights.len() {
            return Err(MilligradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }

        let mut products = self
            .weights
            .iter()
            .zip(input)
            .map(|(w, &x)| w.var(graph).map(|w| w * x));
        let first = products.next().ok_or_else(|| {
            MilligradError::InvalidArgument("a unit needs at least one weight".to_string())
        })??;
        let dot = products.try_fold(first, |acc, term| term.map(|t| acc + t))?;
        let out = dot + self.bias.var(graph)?;

        Ok(if activation { out.tanh() } else { out })
    }
}

impl Module for Unit {
    fn params(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_params(&self) -> Vec<(String, &Parameter)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(k, w)| (format!("weight{}", k), w))
            .chain(std::iter::once(("bias".to_string(), &self.bias)))
            .collect()
    }
}

#[cfg(test)]
#[path = "unit_test.rs"]
mod tests;
