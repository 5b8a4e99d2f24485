//! The gradient-descent training loop.

use crate::data::VecDataset;
use crate::model::Network;
use crate::nn::losses::{mse_loss, mse_loss_batch};
use crate::nn::Module;
use crate::optim::{GradientDescent, Optimizer};
use log::{debug, info};
use milligrad_core::{Checkpoint, Graph, MilligradError, Var};

/// Hyper-parameters of [`train`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// `None` trains on the summed loss over every example; `Some(n)` on the mean loss of
    /// a random mini-batch of `n` examples (`0` meaning all of them).
    pub batch_size: Option<usize>,
    /// Log every `log_every` epochs; `0` disables logging.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            learning_rate: 0.05,
            batch_size: None,
            log_every: 5,
        }
    }
}

impl TrainConfig {
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn batch_size(mut self, batch_size: Option<usize>) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}

/// Loss and predictions of one epoch, read before the parameter update.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochRecord {
    pub epoch: usize,
    pub loss: f64,
    pub predictions: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainHistory {
    pub records: Vec<EpochRecord>,
}

impl TrainHistory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_loss(&self) -> Option<f64> {
        self.records.first().map(|r| r.loss)
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.records.last().map(|r| r.loss)
    }

    pub fn losses(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.loss).collect()
    }
}

fn validate(
    network: &Network,
    dataset: &VecDataset,
    config: &TrainConfig,
) -> Result<(), MilligradError> {
    if dataset.is_empty() {
        return Err(MilligradError::InvalidArgument(
            "cannot train on an empty dataset".to_string(),
        ));
    }
    if network.output_width() != 1 {
        return Err(MilligradError::DimensionMismatch {
            expected: 1,
            actual: network.output_width(),
        });
    }
    if network.input_width() != dataset.input_width() {
        return Err(MilligradError::DimensionMismatch {
            expected: network.input_width(),
            actual: dataset.input_width(),
        });
    }
    if let Some(batch_size) = config.batch_size {
        if batch_size > dataset.len() {
            return Err(MilligradError::InvalidArgument(format!(
                "batch size {} exceeds dataset size {}",
                batch_size,
                dataset.len()
            )));
        }
    }
    Ok(())
}

/// Trains `network` on `dataset` for exactly `config.epochs` epochs.
///
/// Each epoch forwards every example, builds the loss, zeroes the parameter gradients,
/// back-propagates and applies one gradient-descent step. Nodes created during the
/// epoch are discarded afterwards, so the graph only grows by the leaves that existed
/// before the call.
///
/// # Errors
/// - `DimensionMismatch` if the network does not have exactly one output or its input
///   width differs from the dataset's.
/// - `InvalidArgument` for an empty dataset, an oversized batch or a bad learning rate.
/// - `StaleNode` if the network or dataset leaves belong to another graph. Nodes built
///   before the failure are discarded as usual.
pub fn train(
    graph: &mut Graph,
    network: &mut Network,
    dataset: &VecDataset,
    config: &TrainConfig,
) -> Result<TrainHistory, MilligradError> {
    validate(network, dataset, config)?;
    let mut optimizer = GradientDescent::new(
        network.params().into_iter().map(|p| p.id()),
        config.learning_rate,
    )?;

    let checkpoint: Checkpoint = graph.checkpoint();
    let mut history = TrainHistory::default();
    for epoch in 0..config.epochs {
        let outcome = run_epoch(graph, network, dataset, config, &mut optimizer, epoch);
        let discarded = graph.rewind(checkpoint)?;
        let record = outcome?;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            info!("Epoch {}: loss = {:.6}", epoch, record.loss);
            debug!(
                "Epoch {}: predictions = {:?} ({} nodes discarded)",
                epoch, record.predictions, discarded
            );
        }
        history.records.push(record);
    }
    Ok(history)
}

fn run_epoch(
    graph: &Graph,
    network: &mut Network,
    dataset: &VecDataset,
    config: &TrainConfig,
    optimizer: &mut GradientDescent,
    epoch: usize,
) -> Result<EpochRecord, MilligradError> {
    let mut predictions: Vec<Var<'_>> = Vec::with_capacity(dataset.len());
    let mut labels: Vec<Var<'_>> = Vec::with_capacity(dataset.len());
    for (inputs, label) in dataset.iter() {
        let x = inputs
            .iter()
            .map(|&id| graph.var(id))
            .collect::<Result<Vec<_>, _>>()?;
        let output = network.forward(graph, &x)?;
        let prediction = output.first().copied().ok_or(MilligradError::DimensionMismatch {
            expected: 1,
            actual: 0,
        })?;
        predictions.push(prediction);
        labels.push(graph.var(label)?);
    }

    let loss = match config.batch_size {
        None => mse_loss(&labels, &predictions)?,
        Some(batch_size) => mse_loss_batch(&labels, &predictions, batch_size, network.rng_mut())?,
    };

    optimizer.zero_grad(graph)?;
    loss.backward();
    optimizer.step(graph)?;

    Ok(EpochRecord {
        epoch,
        loss: loss.value(),
        predictions: predictions.iter().map(Var::value).collect(),
    })
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
