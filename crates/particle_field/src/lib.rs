pub mod config;
pub mod field;

pub use config::*;
pub use field::*;
