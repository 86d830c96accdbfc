pub mod config;
pub mod options;
pub mod parsed;

pub use config::*;
pub use options::*;
pub use parsed::*;
