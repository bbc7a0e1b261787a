// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Everything the launcher needs from the machine it runs on.
//!
//! The launcher never touches the OS directly; it goes through [`Host`] so that each host
//! platform can be simulated in tests.

use std::io;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::cmd::{exit_code, render_command};

pub trait Host {
    /// The kernel name, as `uname -s` reports it (e.g. `Linux`, `Darwin`).
    fn kernel_name(&mut self) -> Result<String>;

    /// Remove a file. Callers decide whether a missing file matters.
    fn remove_file(&mut self, path: &Path) -> io::Result<()>;

    /// Run a command to completion with inherited stdio and return its exit code.
    fn run(&mut self, cmd: &mut Command) -> io::Result<i32>;
}

/// The host we are actually running on.
#[derive(Debug, Default)]
pub struct SystemHost;

/// The command used to query the kernel name.
pub fn uname_command() -> Command {
    let mut cmd = Command::new("uname");
    cmd.arg("-s");
    cmd
}

impl Host for SystemHost {
    fn kernel_name(&mut self) -> Result<String> {
        let mut cmd = uname_command();
        let output = cmd.output().with_context(|| {
            format!("Failed to invoke {}", render_command(&cmd).to_string_lossy())
        })?;
        if !output.status.success() {
            bail!(
                "{} exited with status {}",
                render_command(&cmd).to_string_lossy(),
                output.status
            );
        }
        let kernel = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(kernel)
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn run(&mut self, cmd: &mut Command) -> io::Result<i32> {
        cmd.status().map(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn uname_reports_linux() {
        let kernel = SystemHost.kernel_name().unwrap();
        assert!(kernel.starts_with("Linux"), "unexpected kernel name {kernel:?}");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn uname_reports_darwin() {
        let kernel = SystemHost.kernel_name().unwrap();
        assert!(kernel.starts_with("Darwin"), "unexpected kernel name {kernel:?}");
    }

    #[test]
    fn remove_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemHost.remove_file(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn run_missing_program_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = Command::new(dir.path().join("no-such-driver"));
        let err = SystemHost.run(&mut cmd).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_child_exit_code() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 7"]);
        assert_eq!(SystemHost.run(&mut cmd).unwrap(), 7);
    }
}
