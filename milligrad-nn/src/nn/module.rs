use crate::nn::Parameter;
use milligrad_core::{Graph, MilligradError};

/// The capability shared by every network building block: listing its learnable
/// parameters and resetting their gradients.
///
/// Composites (layers, networks) implement `params` by concatenating their children's
/// parameters in order; `zero_grad` then needs no per-type code.
pub trait Module: std::fmt::Debug {
    /// Returns every learnable parameter of the module, including those of sub-modules,
    /// in a stable order.
    fn params(&self) -> Vec<&Parameter>;

    /// Returns every parameter together with a hierarchical name such as
    /// `"layer0.unit1.weight2"`, in the same order as [`Module::params`].
    fn named_params(&self) -> Vec<(String, &Parameter)>;

    fn num_params(&self) -> usize {
        self.params().len()
    }

    /// Resets the gradient of every parameter to `0.0`.
    ///
    /// Must run before each backward pass, as gradients accumulate.
    fn zero_grad(&self, graph: &Graph) -> Result<(), MilligradError> {
        for param in self.params() {
            graph.set_grad(param.id(), 0.0)?;
        }
        Ok(())
    }
}

/// Prefixes every name in `named` with `prefix.`.
pub(crate) fn prefixed<'a>(
    prefix: &str,
    named: Vec<(String, &'a Parameter)>,
) -> impl Iterator<Item = (String, &'a Parameter)> + 'a {
    let prefix = prefix.to_string();
    named
        .into_iter()
        .map(move |(name, param)| (format!("{}.{}", prefix, name), param))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockModule {
        a: Parameter,
        b: Parameter,
    }

    impl Module for MockModule {
        fn params(&self) -> Vec<&Parameter> {
            vec![&self.a, &self.b]
        }

        fn named_params(&self) -> Vec<(String, &Parameter)> {
            vec![("a".to_string(), &self.a), ("b".to_string(), &self.b)]
        }
    }

    #[test]
    fn test_default_zero_grad() -> Result<(), MilligradError> {
        let graph = Graph::new();
        let module = MockModule {
            a: Parameter::new(&graph, 1.0),
            b: Parameter::new(&graph, 2.0),
        };
        graph.set_grad(module.a.id(), 5.0)?;
        graph.set_grad(module.b.id(), -3.0)?;

        module.zero_grad(&graph)?;

        assert_eq!(module.a.grad(&graph)?, 0.0);
        assert_eq!(module.b.grad(&graph)?, 0.0);
        assert_eq!(module.num_params(), 2);
        Ok(())
    }

    #[test]
    fn test_prefixed_names() {
        let graph = Graph::new();
        let module = MockModule {
            a: Parameter::new(&graph, 1.0),
            b: Parameter::new(&graph, 2.0),
        };
        let names: Vec<String> = prefixed("outer", module.named_params())
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["outer.a", "outer.b"]);
    }
}
