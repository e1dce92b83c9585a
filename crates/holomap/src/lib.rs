pub mod config;
pub mod hit_test;
pub mod renderer;

pub use config::*;
pub use hit_test::*;
pub use renderer::*;
