mod parameters;
mod products;
mod results;

pub use parameters::ClientParameters;
pub use products::Product;
pub use results::{Results, SensitivityPoint};
