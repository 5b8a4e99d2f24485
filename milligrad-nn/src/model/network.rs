use crate::nn::layers::Layer;
use crate::nn::module::{prefixed, Module};
use crate::nn::Parameter;
use log::debug;
use milligrad_core::{Graph, MilligradError, Var};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fully connected regression network: `tanh` layers followed by a linear output layer.
///
/// The network owns the generator used for its initialisation, and the trainer keeps
/// drawing mini-batches from it, so one seed fixes an entire training run.
///
/// A network is not `Clone`: its parameters are leaves of a graph, and a copy would
/// update the same leaves as the original.
///
/// ```compile_fail
/// fn requires_clone<T: Clone>() {}
/// requires_clone::<milligrad_nn::Network>();
/// ```
#[derive(Debug)]
pub struct Network {
    layers: Vec<Layer>,
    input_width: usize,
    rng: StdRng,
}

impl Network {
    /// Builds a network taking `input_width` inputs, with one layer per entry of
    /// `widths`, initialised from a generator seeded with `seed`.
    ///
    /// # Errors
    /// `InvalidArgument` if `widths` is empty or `input_width` or any width is zero.
    pub fn new(
        graph: &Graph,
        input_width: usize,
        widths: &[usize],
        seed: u64,
    ) -> Result<Self, MilligradError> {
        Self::from_rng(graph, input_width, widths, StdRng::seed_from_u64(seed))
    }

    /// As [`Network::new`], with an explicit generator.
    pub fn from_rng(
        graph: &Graph,
        input_width: usize,
        widths: &[usize],
        mut rng: StdRng,
    ) -> Result<Self, MilligradError> {
        if widths.is_empty() {
            return Err(MilligradError::InvalidArgument(
                "a network needs at least one layer".to_string(),
            ));
        }
        if input_width == 0 || widths.contains(&0) {
            return Err(MilligradError::InvalidArgument(format!(
                "layer widths must be positive, got input {} and layers {:?}",
                input_width, widths
            )));
        }

        let mut layers = Vec::with_capacity(widths.len());
        let mut fan_in = input_width;
        for &width in widths {
            layers.push(Layer::new(graph, fan_in, width, &mut rng)?);
            fan_in = width;
        }

        let network = Network {
            layers,
            input_width,
            rng,
        };
        debug!(
            "Network built: {} -> {:?}, {} parameters",
            input_width,
            widths,
            network.num_params()
        );
        Ok(network)
    }

    /// Applies every layer in order, with `tanh` on all but the last.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input.len()` differs from [`Network::input_width`].
    pub fn forward<'g>(
        &self,
        graph: &'g Graph,
        input: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, MilligradError> {
        let last = self.layers.len().saturating_sub(1);
        let mut current = input.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            current = layer.forward(graph, &current, i != last)?;
        }
        Ok(current)
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, Layer::num_outputs)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The network's generator, shared with mini-batch sampling.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Module for Network {
    fn params(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.params()).collect()
    }

    fn named_params(&self) -> Vec<(String, &Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layer{}", i), l.named_params()))
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
