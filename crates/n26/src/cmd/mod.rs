//! Command implementations for CLI tools.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by thin wrapper binaries.

pub mod args;
pub mod extract_cmd;
pub mod identify_cmd;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crates log at `info`, or at
/// `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "n26=debug,n26_importer=debug"
    } else {
        "n26=info,n26_importer=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout stays valid beancount.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
