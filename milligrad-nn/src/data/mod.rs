pub mod dataset;
pub mod sampler;

pub use dataset::VecDataset;
pub use sampler::RandomSampler;
