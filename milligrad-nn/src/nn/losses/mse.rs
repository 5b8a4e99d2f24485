use crate::data::RandomSampler;
use milligrad_core::{MilligradError, Var};
use rand::Rng;

fn check_pairs(ytrue: &[Var<'_>], ypred: &[Var<'_>], operation: &str) -> Result<(), MilligradError> {
    if ytrue.len() != ypred.len() {
        return Err(MilligradError::LengthMismatch {
            operation: operation.to_string(),
            left: ytrue.len(),
            right: ypred.len(),
        });
    }
    if ytrue.is_empty() {
        return Err(MilligradError::InvalidArgument(format!(
            "{} requires at least one target",
            operation
        )));
    }
    Ok(())
}

fn sum_squared_errors<'g>(
    ytrue: &[Var<'g>],
    ypred: &[Var<'g>],
    indices: impl IntoIterator<Item = usize>,
) -> Option<Var<'g>> {
    indices
        .into_iter()
        .map(|i| (ytrue[i] - ypred[i]).powf(2.0))
        .reduce(|acc, term| acc + term)
}

/// Sum of squared errors over every `(ytrue[i], ypred[i])` pair.
///
/// # Errors
/// `LengthMismatch` if the slices differ in length, `InvalidArgument` if they are empty.
pub fn mse_loss<'g>(ytrue: &[Var<'g>], ypred: &[Var<'g>]) -> Result<Var<'g>, MilligradError> {
    check_pairs(ytrue, ypred, "mse_loss")?;
    sum_squared_errors(ytrue, ypred, 0..ytrue.len())
        .ok_or_else(|| MilligradError::InvalidArgument("mse_loss on empty input".to_string()))
}

/// Mean squared error over a random mini-batch of `batch_size` pairs.
///
/// The batch is the first `batch_size` indices of a permutation drawn from `rng`.
/// A `batch_size` of `0` selects every pair.
///
/// # Errors
/// As [`mse_loss`], plus `InvalidArgument` if `batch_size` exceeds the number of pairs.
pub fn mse_loss_batch<'g, R: Rng + ?Sized>(
    ytrue: &[Var<'g>],
    ypred: &[Var<'g>],
    batch_size: usize,
    rng: &mut R,
) -> Result<Var<'g>, MilligradError> {
    check_pairs(ytrue, ypred, "mse_loss_batch")?;
    let batch_size = if batch_size == 0 { ytrue.len() } else { batch_size };

    let indices = RandomSampler::new(Some(batch_size)).sample(ytrue.len(), rng)?;
    let sum = sum_squared_errors(ytrue, ypred, indices).ok_or_else(|| {
        MilligradError::InvalidArgument("mse_loss_batch on empty batch".to_string())
    })?;
    Ok(sum / batch_size as f64)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
