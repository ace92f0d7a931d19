use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static LIBRARY_LOG_DIR: &str = "LIBRARY_LOG_DIR";
static DEFAULT_FILTER: &str = "driver=debug,application=debug";

fn filter() -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()))
}

/// Installs the global subscriber. When `LIBRARY_LOG_DIR` is set, a daily
/// rolling `debug.log` is written there as well; keep the returned guard alive
/// for as long as lines should be flushed to it.
pub fn init() -> Option<WorkerGuard> {
    let stdout = tracing_subscriber::fmt::layer().with_filter(filter());
    match dotenvy::var(LIBRARY_LOG_DIR).ok().map(PathBuf::from) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "debug.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let file = tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter());
            tracing_subscriber::registry().with(stdout).with(file).init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stdout).init();
            None
        }
    }
}
