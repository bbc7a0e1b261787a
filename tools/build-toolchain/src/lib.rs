// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Launcher for the stage 1 toolchain build.
//!
//! Detects the host platform, optionally removes the LLVM build marker so LLVM gets rebuilt,
//! and runs the build driver for the host target and `bpfel-unknown-unknown`.

pub mod cmd;
pub mod config;
pub mod host;
pub mod launcher;
pub mod parser;
pub mod platform;
pub mod trace;
pub mod util;

pub use config::LauncherConfig;
pub use host::{Host, SystemHost};
pub use launcher::{failure_exit_code, Launcher, Outcome};
pub use platform::{HostPlatform, SECONDARY_TARGET};
pub use trace::{StderrTrace, Trace};
