//! Tracing setup for the `forge` binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the summary and `forge formulas` output.
///
/// Reads `FORGE_LOG` for per-module levels, e.g.
/// `FORGE_LOG=forge_core::report=debug,forge_cli=info`. Falls back to
/// `forge=info`, or `forge=debug` when `verbose` is set.
///
/// Idempotent; only the first call has any effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default_directive = if verbose { "forge=debug" } else { "forge=info" };
        let filter = EnvFilter::try_from_env("FORGE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .with_line_number(verbose),
            )
            .with(filter)
            .init();
    });
}
