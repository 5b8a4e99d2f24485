use milligrad_core::{Graph, MilligradError};
use milligrad_nn::{Network, VecDataset};

#[allow(dead_code)]
pub const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
#[allow(dead_code)]
pub const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// The four-example regression problem as leaves of `graph`.
#[allow(dead_code)]
pub fn toy_dataset(graph: &Graph) -> Result<VecDataset, MilligradError> {
    let rows: Vec<Vec<f64>> = INPUTS.iter().map(|r| r.to_vec()).collect();
    VecDataset::from_rows(graph, &rows, &TARGETS)
}

/// A `3 -> 4 -> 4 -> 1` network seeded with `seed`.
#[allow(dead_code)]
pub fn toy_network(graph: &Graph, seed: u64) -> Result<Network, MilligradError> {
    Network::new(graph, 3, &[4, 4, 1], seed)
}
