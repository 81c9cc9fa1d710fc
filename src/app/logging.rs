//! Diagnostic tracing for the `ipex` binary.
//!
//! stdout carries only command results (the export summary, dry-run plan and
//! `list` lines), so it can be piped or diffed. Every tracing event goes to
//! stderr: `info` for the selected workspace and the final count, `debug` for
//! each discovered descriptor and copy, `warn` for destination collisions.
//! The library never installs a subscriber; only `cli::run` calls [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` directive used when the variable is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "ipex=debug" } else { "warn" }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();
}
