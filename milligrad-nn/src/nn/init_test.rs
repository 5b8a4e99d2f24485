use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_he_std() -> Result<(), MilligradError> {
    assert_relative_eq!(he_std(2)?, 1.0);
    assert_relative_eq!(he_std(8)?, 0.5);
    assert!(matches!(he_std(0), Err(MilligradError::InvalidArgument(_))));
    Ok(())
}

#[test]
fn test_he_normal_values_reproducible() -> Result<(), MilligradError> {
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);

    let a = he_normal_values(&mut rng1, 3, 16)?;
    let b = he_normal_values(&mut rng2, 3, 16)?;

    assert_eq!(a.len(), 16);
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_he_normal_values_spread() -> Result<(), MilligradError> {
    let mut rng = StdRng::seed_from_u64(11);
    let fan_in = 4;
    let values = he_normal_values(&mut rng, fan_in, 20_000)?;

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    assert!(mean.abs() < 0.05, "mean {}", mean);
    assert_relative_eq!(var.sqrt(), he_std(fan_in)?, epsilon = 0.05);
    Ok(())
}
