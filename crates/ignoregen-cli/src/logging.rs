use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so `--stdout` output stays clean. `RUST_LOG` controls
/// the level, defaulting to `warn`; `--verbose` forces `debug`.
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}
