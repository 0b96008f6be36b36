//! Logging setup shared by the binaries.
//!
//! Logs go to stderr so stdout carries only the JSON result. `RUST_LOG`
//! controls the filter (default: `music_tagger=info`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "music_tagger=info";

pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
