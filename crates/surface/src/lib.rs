pub mod command;
pub mod recording;
pub mod viewport;

pub use command::*;
pub use recording::*;
pub use viewport::*;
