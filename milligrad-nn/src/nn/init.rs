use milligrad_core::MilligradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Standard deviation of He initialisation for a unit with `fan_in` inputs:
/// `sqrt(2 / fan_in)`.
pub fn he_std(fan_in: usize) -> Result<f64, MilligradError> {
    if fan_in == 0 {
        return Err(MilligradError::InvalidArgument(
            "He initialisation requires at least one input".to_string(),
        ));
    }
    Ok((2.0 / fan_in as f64).sqrt())
}

/// Zero-mean normal distribution with the He standard deviation for `fan_in`.
pub fn he_normal(fan_in: usize) -> Result<Normal<f64>, MilligradError> {
    let std = he_std(fan_in)?;
    Normal::new(0.0, std).map_err(|e| MilligradError::Initialization(e.to_string()))
}

/// Draws `count` He-initialised values for a unit with `fan_in` inputs from `rng`.
///
/// Every draw comes from the caller's generator, so a seeded generator reproduces the
/// same values.
pub fn he_normal_values<R: Rng + ?Sized>(
    rng: &mut R,
    fan_in: usize,
    count: usize,
) -> Result<Vec<f64>, MilligradError> {
    let dist = he_normal(fan_in)?;
    Ok((0..count).map(|_| dist.sample(rng)).collect())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
