pub mod oracle;
pub mod record;
pub mod seed;
pub mod store;

pub use oracle::*;
pub use record::*;
pub use seed::*;
pub use store::*;
