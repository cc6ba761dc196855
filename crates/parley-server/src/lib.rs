//! HTTP hosting for the Parley skill.
//!
//! Exposes the skill endpoint and a health check on an axum router, plus the
//! startup helpers used by the `parley` binary.

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
