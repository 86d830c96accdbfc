pub mod generate;
pub mod parse;

pub use generate::*;
pub use parse::*;
