mod logging;
mod timeout;

pub use logging::logging_middleware;
pub use timeout::timeout_middleware;
