pub mod event_bus;
pub mod frame_loop;
pub mod metrics;

pub use event_bus::*;
pub use frame_loop::*;
pub use metrics::*;
