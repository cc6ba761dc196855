pub mod errors;
pub mod id;

pub use errors::{ConfigError, ParleyError};
pub use id::new_correlation_id;
