use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Variable consulted before `RUST_LOG` for the log filter.
pub const LOG_ENV: &str = "FUZZ_AB_LOG";

fn log_filter(verbose: bool) -> EnvFilter {
    std::env::var(LOG_ENV)
        .or_else(|_missing| std::env::var("RUST_LOG"))
        .map_or_else(
            |_missing| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_invalid| EnvFilter::new("info")),
        )
}

/// Installs the global subscriber. Logs go to stderr so the report on
/// stdout stays clean.
pub fn init_logging(verbose: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
