mod app;
mod config;
mod exec;
mod metrics;
mod value;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use exec::ExecError;
pub use metrics::MetricsError;
pub use value::{ValueError, ValueKind};
