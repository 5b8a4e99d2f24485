//! Fits a `3 -> 4 -> 4 -> 1` network to four labelled points.
//!
//! Run with `RUST_LOG=info` (or `debug` to also see the predictions).

use log::info;
use milligrad_core::{Graph, MilligradError};
use milligrad_nn::{train, Module, Network, TrainConfig, VecDataset};

fn main() -> Result<(), MilligradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut graph = Graph::new();
    let rows = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = [1.0, -1.0, -1.0, 1.0];
    let dataset = VecDataset::from_rows(&graph, &rows, &targets)?;
    let mut network = Network::new(&graph, 3, &[4, 4, 1], 42)?;
    info!("Training a network with {} parameters", network.num_params());

    let history = train(&mut graph, &mut network, &dataset, &TrainConfig::default())?;

    if let Some(last) = history.records.last() {
        info!("Final loss after {} epochs: {:.6}", history.len(), last.loss);
        for (prediction, target) in last.predictions.iter().zip(targets) {
            info!("  target {:+.1}  prediction {:+.4}", target, prediction);
        }
    }
    Ok(())
}
