// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Launcher configuration, read from the environment.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Directory of the toolchain checkout. The build driver runs from here.
pub const ROOT_ENV_VAR: &str = "BUILD_TOOLCHAIN_ROOT";
/// Build driver to invoke. Relative paths are resolved against the root.
pub const DRIVER_ENV_VAR: &str = "BUILD_TOOLCHAIN_DRIVER";
/// Print the steps instead of running them.
pub const DRY_RUN_ENV_VAR: &str = "BUILD_TOOLCHAIN_DRY_RUN";
/// Environment variable used to control the launcher log tracing.
pub const LOG_ENV_VAR: &str = "BUILD_TOOLCHAIN_LOG";

const DEFAULT_DRIVER: &str = "x.py";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LauncherConfig {
    pub root: PathBuf,
    pub driver: PathBuf,
    pub dry_run: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfig {
            root: PathBuf::from("."),
            driver: PathBuf::from(DEFAULT_DRIVER),
            dry_run: false,
        }
    }
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the configuration from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = LauncherConfig::default();
        LauncherConfig {
            root: var(ROOT_ENV_VAR).map(PathBuf::from).unwrap_or(defaults.root),
            driver: var(DRIVER_ENV_VAR).map(PathBuf::from).unwrap_or(defaults.driver),
            dry_run: var(DRY_RUN_ENV_VAR).is_some_and(|value| !is_false(&value)),
        }
    }

    /// The program handed to `Command::new`: the driver, joined to the root when relative.
    /// Always absolute, since the child changes into the root before the program is resolved.
    pub fn driver_path(&self) -> io::Result<PathBuf> {
        std::path::absolute(self.root.join(&self.driver))
    }

    /// `<root>/build/<triple>/llvm/llvm-finished-building`
    pub fn llvm_marker(&self, triple: &str) -> PathBuf {
        llvm_marker(&self.root, triple)
    }
}

macro_rules! path_buf {
    // The arguments are expressions that can be pushed to the PathBuf.
    ($base_path:expr, $($extra_path:expr),+) => {{
        let mut path_buf = PathBuf::from($base_path);
        $(path_buf.push($extra_path);)+
        path_buf
    }};
}

/// The sentinel the build driver leaves behind once LLVM is built for `triple`.
/// Removing it forces the driver to rebuild LLVM.
pub fn llvm_marker(root: &Path, triple: &str) -> PathBuf {
    path_buf!(root, "build", triple, "llvm", "llvm-finished-building")
}

const FALSE_VALUES: &[&str] = &["0", "false", "no", "off"];

fn is_false(value: &OsString) -> bool {
    value.to_str().is_some_and(|value| FALSE_VALUES.iter().any(|f| value.eq_ignore_ascii_case(f)))
}
