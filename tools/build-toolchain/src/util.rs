// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics and logging setup shared by the launcher binary.
//!
//! User-facing diagnostics go through [`error`] and [`warning`]; everything else is a `tracing`
//! event, filtered by the `BUILD_TOOLCHAIN_LOG` environment variable.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV_VAR;

/// Log directives used when `BUILD_TOOLCHAIN_LOG` is not set.
const DEFAULT_LOG_DIRECTIVES: &str = "warn";

/// Initialize the logger using the BUILD_TOOLCHAIN_LOG environment variable.
/// Logs go to stderr so they interleave with the step echo and never with the driver's stdout.
pub fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    // Only fails if a global subscriber is already installed, which is fine to keep.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Print a warning message. This will add a "warning:" tag before the message and style
/// accordingly.
pub fn warning(msg: &str) {
    let warning = console::style("warning:").bold().yellow();
    let msg_fmt = console::style(msg).bold();
    eprintln!("{warning} {msg_fmt}")
}

/// Print an error message. This will add an "error:" tag before the message and style accordingly.
pub fn error(msg: &str) {
    let error = console::style("error:").bold().red();
    let msg_fmt = console::style(msg).bold();
    eprintln!("{error} {msg_fmt}")
}
