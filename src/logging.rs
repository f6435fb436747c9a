//! Logging setup.
//!
//! Diagnostics are emitted through `tracing` and written to stderr, so they
//! never mix with report output on stdout. `KWGIT_LOG` takes an
//! `EnvFilter` directive and overrides `--log-level`.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive such as `kwgit=debug`.
pub const LOG_ENV: &str = "KWGIT_LOG";

/// Log verbosity selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only error conditions
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings, and deletions performed
    Info,
    /// All above plus every git invocation
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level.into()).into())
    })
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(level: LogLevel) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(layer)
        .try_init();
}
