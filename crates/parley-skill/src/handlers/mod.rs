mod exception;
mod launch;
mod query;
mod session_ended;
mod stop;

pub use exception::CatchAllExceptionHandler;
pub use launch::LaunchHandler;
pub use query::QueryHandler;
pub use session_ended::SessionEndedHandler;
pub use stop::{CancelOrStopHandler, CANCEL_INTENT, STOP_INTENT};
