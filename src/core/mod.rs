pub mod client;
pub mod config;
pub mod presenter;
pub mod segmenter;

pub use client::*;
pub use config::*;
pub use presenter::*;
pub use segmenter::*;
