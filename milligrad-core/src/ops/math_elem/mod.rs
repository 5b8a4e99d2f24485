pub mod log;
pub mod trig;

pub use log::{ln_op, log10_op, log2_op, log_op};
pub use trig::{cos_op, sin_op, tan_op};
