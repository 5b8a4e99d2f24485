// Foundational arithmetic operations.
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add_op, add_scalar_op};
pub use div::{div_op, div_scalar_op, rdiv_scalar_op};
pub use mul::{mul_op, scale_op};
pub use neg::neg_op;
pub use pow::{exp_base_op, exp_op, powf_op};
pub use sub::{rsub_scalar_op, sub_op, sub_scalar_op};
