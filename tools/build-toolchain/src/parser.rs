// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This file contains the small argument parser of our build launcher.
//!
//! Only the first argument is inspected. Anything we don't recognize (including
//! a missing argument) means "just build".

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Name used in the usage line when argv0 is missing or unusable.
const DEFAULT_PROGRAM: &str = "build-toolchain";

/// What the first command-line argument asks the launcher to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LaunchFlag {
    /// `--help` or `-h`: print the usage line and stop.
    Help,
    /// `--llvm`: remove the LLVM build marker before building.
    RebuildLlvm,
    /// No flag, or one we don't know about.
    None,
}

impl LaunchFlag {
    pub fn from_first_arg(arg: Option<&OsStr>) -> Self {
        match arg.and_then(OsStr::to_str) {
            Some("--help" | "-h") => LaunchFlag::Help,
            Some("--llvm") => LaunchFlag::RebuildLlvm,
            _ => LaunchFlag::None,
        }
    }
}

/// The one-line usage message printed for `--help`.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} [--llvm]  (--llvm: remove the LLVM build marker so LLVM is rebuilt)")
}

/// Extract the program name from argv0. e.g. "/path/foo -> foo" "./foo.exe -> foo"
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|path| Path::new(path).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
