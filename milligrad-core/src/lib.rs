//! # milligrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Nodes live in a [`Graph`] arena. [`Var`] handles build new nodes through the
//! elementary operations in [`ops`] (also available as operators and methods), and
//! [`Var::backward`] fills in the gradient of every node the root depends on.
//!
//! ```
//! use milligrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(-1.0);
//! let b = graph.leaf(2.0);
//! let c = graph.leaf(3.0);
//! let d = a.relu() + b * c - 5.0;
//! d.backward();
//!
//! assert_eq!(d.value(), 1.0);
//! assert_eq!((a.grad(), b.grad(), c.grad()), (0.0, 3.0, 2.0));
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub(crate) mod node;
pub mod ops;
pub mod var;

pub use autograd::{check_grad, GradCheckError, Op};
pub use error::MilligradError;
pub use graph::{Checkpoint, Graph, NodeId};
pub use var::Var;
