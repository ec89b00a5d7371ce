use crate::cli::Args;
use consts::DEFAULT_LOG_FILTER;
use std::io;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;

/// Logs go to stderr; stdout is left to command output.
pub fn init(args: &Args) {
    let env_filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|err| {
        eprintln!(
            "Ignoring invalid log filter `{}` ({err}), using `{DEFAULT_LOG_FILTER}`.",
            args.log_filter
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
