use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under one target, so a
/// subscriber can filter them with `RUST_LOG=shopping_list=debug`.
pub struct TracingLogger;

impl TracingLogger {
    pub const TARGET: &'static str = "shopping_list";
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TracingLogger::TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TracingLogger::TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TracingLogger::TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TracingLogger::TARGET, "{}", message);
    }
}
