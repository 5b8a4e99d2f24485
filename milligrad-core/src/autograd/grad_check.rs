use crate::graph::Graph;
use crate::var::Var;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Finite-difference step must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` is evaluated once on fresh leaves built from `inputs` and back-propagated to
/// obtain the analytical gradients. Each input is then perturbed by `±epsilon` in a
/// fresh graph to estimate \\( \frac{f(x+\epsilon) - f(x-\epsilon)}{2\epsilon} \\).
///
/// An input passes when `|analytical - numerical| <= abs_tol + rel_tol * max(|analytical|, |numerical|)`.
///
/// # Errors
/// The first failing input is reported; see [`GradCheckError`].
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&[Var<'g>]) -> Var<'g>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&leaves);
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Var::grad).collect();

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(&func, inputs, input_index, epsilon);
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let tolerance = abs_tol + rel_tol * analytical_grad.abs().max(numerical_grad.abs());
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

fn evaluate_perturbed<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> f64
where
    F: for<'g> Fn(&[Var<'g>]) -> Var<'g>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    let graph = Graph::new();
    let leaves = graph.leaves(&perturbed);
    func(&leaves).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_gradient() {
        let result = check_grad(|x| x[0] * x[1] + x[0], &[1.5, -2.0], 1e-6, 1e-7, 1e-5);
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let result = check_grad(|x| x[0], &[1.0], 0.0, 1e-7, 1e-5);
        assert_eq!(result, Err(GradCheckError::InvalidEpsilon(0.0)));
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical() {
        // d/dx ln(x) at 0 is infinite
        let result = check_grad(|x| x[0].ln(), &[0.0], 1e-6, 1e-7, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_detects_kink_mismatch() {
        // Central difference straddles the relu kink at 0 and averages to 0.5.
        let result = check_grad(|x| x[0].relu(), &[0.0], 1e-3, 1e-7, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }
}
