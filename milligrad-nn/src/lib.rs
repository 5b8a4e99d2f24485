//! # milligrad-nn
//!
//! A small multilayer perceptron and its gradient-descent trainer, built on the scalar
//! autodiff engine of `milligrad-core`.
//!
//! Parameters, inputs and labels are leaves created once in a [`Graph`]; [`train`]
//! rebuilds the forward graph every epoch on top of them and discards it afterwards.
//!
//! ```
//! use milligrad_core::Graph;
//! use milligrad_nn::{train, Network, TrainConfig, VecDataset};
//!
//! let mut graph = Graph::new();
//! let rows = vec![vec![0.0], vec![1.0]];
//! let dataset = VecDataset::from_rows(&graph, &rows, &[1.0, -1.0]).unwrap();
//! let mut network = Network::new(&graph, 1, &[3, 1], 0).unwrap();
//!
//! let config = TrainConfig::default().epochs(20).log_every(0);
//! let history = train(&mut graph, &mut network, &dataset, &config).unwrap();
//! assert_eq!(history.len(), 20);
//! ```
//!
//! [`Graph`]: milligrad_core::Graph

pub mod data;
pub mod model;
pub mod nn;
pub mod optim;
pub mod train;

pub use data::{RandomSampler, VecDataset};
pub use model::Network;
pub use nn::{mse_loss, mse_loss_batch, Layer, Module, Parameter, Unit};
pub use optim::{GradientDescent, Optimizer};
pub use train::{train, EpochRecord, TrainConfig, TrainHistory};
