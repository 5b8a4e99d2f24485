pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::{Layer, Unit};
pub use losses::{mse_loss, mse_loss_batch};
pub use module::Module;
pub use parameter::Parameter;
