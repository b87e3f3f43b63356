//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// `RUST_LOG` wins when set. Otherwise library logs are shown at `warn`, or
/// `debug` with `--verbose`. Logs go to stderr so `--json` output on stdout
/// stays parseable; with `--json` the logs are JSON too.
pub fn init(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Subsequent calls are no-ops.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
