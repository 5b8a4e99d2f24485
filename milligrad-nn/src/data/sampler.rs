use milligrad_core::MilligradError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Samples indices of a dataset in random order without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomSampler {
    num_samples: Option<usize>,
}

impl RandomSampler {
    /// Creates a sampler yielding `num_samples` indices, or every index when `None`.
    pub fn new(num_samples: Option<usize>) -> Self {
        RandomSampler { num_samples }
    }

    /// Number of indices [`RandomSampler::sample`] yields for a dataset of `len` items.
    pub fn len(&self, len: usize) -> usize {
        self.num_samples.unwrap_or(len)
    }

    /// Draws a random permutation of `0..len` from `rng` and keeps its first
    /// `num_samples` entries.
    ///
    /// # Errors
    /// `InvalidArgument` if more samples are requested than `len`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, MilligradError> {
        let count = self.len(len);
        if count > len {
            return Err(MilligradError::InvalidArgument(format!(
                "cannot draw {} samples from {} items",
                count, len
            )));
        }
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(rng);
        indices.truncate(count);
        Ok(indices)
    }
}
