use crate::nn::layers::Unit;
use crate::nn::module::{prefixed, Module};
use crate::nn::Parameter;
use milligrad_core::{Graph, MilligradError, Var};
use rand::Rng;

/// Units sharing the same input; output `j` is unit `j` applied to the whole input.
///
/// Not `Clone`, as a copy would share the parameter leaves.
#[derive(Debug)]
pub struct Layer {
    units: Vec<Unit>,
}

impl Layer {
    /// Creates `num_outputs` freshly initialised units of width `num_inputs`.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        num_inputs: usize,
        num_outputs: usize,
        rng: &mut R,
    ) -> Result<Self, MilligradError> {
        if num_outputs == 0 {
            return Err(MilligradError::InvalidArgument(
                "a layer needs at least one unit".to_string(),
            ));
        }
        let units = (0..num_outputs)
            .map(|_| Unit::new(graph, num_inputs, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { units })
    }

    /// Assembles a layer from existing units, which must all share one input width.
    pub fn from_units(units: Vec<Unit>) -> Result<Self, MilligradError> {
        let first = units.first().ok_or_else(|| {
            MilligradError::InvalidArgument("a layer needs at least one unit".to_string())
        })?;
        let width = first.num_inputs();
        if let Some(unit) = units.iter().find(|u| u.num_inputs() != width) {
            return Err(MilligradError::DimensionMismatch {
                expected: width,
                actual: unit.num_inputs(),
            });
        }
        Ok(Layer { units })
    }

    pub fn num_inputs(&self) -> usize {
        self.units.first().map_or(0, Unit::num_inputs)
    }

    pub fn num_outputs(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn forward<'g>(
        &self,
        graph: &'g Graph,
        input: &[Var<'g>],
        activation: bool,
    ) -> Result<Vec<Var<'g>>, MilligradError> {
        self.units
            .iter()
            .map(|unit| unit.forward(graph, input, activation))
            .collect()
    }
}

impl Module for Layer {
    fn params(&self) -> Vec<&Parameter> {
        self.units.iter().flat_map(|u| u.params()).collect()
    }

    fn named_params(&self) -> Vec<(String, &Parameter)> {
        self.units
            .iter()
            .enumerate()
            .flat_map(|(j, u)| prefixed(&format!("unit{}", j), u.named_params()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
