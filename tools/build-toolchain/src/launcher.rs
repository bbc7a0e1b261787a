// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The launcher itself: work out the host platform, optionally force an LLVM rebuild, and hand
//! over to the build driver.

use std::ffi::OsString;
use std::io;
use std::process::Command;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::cmd::{render_command, spawn_failure_code};
use crate::config::LauncherConfig;
use crate::host::{uname_command, Host};
use crate::parser::{usage, LaunchFlag};
use crate::platform::HostPlatform;
use crate::trace::Trace;

/// Stage of the toolchain bootstrap we ask the driver for.
const STAGE: &str = "1";

/// What a launcher run ended up doing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// `--help` was requested. Nothing was run.
    Help { usage: String },
    /// Steps were echoed but nothing was removed or spawned.
    DryRun,
    /// The build driver ran and exited with this code.
    Finished(i32),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Help { .. } | Outcome::DryRun => 0,
            Outcome::Finished(code) => *code,
        }
    }
}

/// The build driver could not be started at all.
#[derive(Debug, Error)]
#[error("Failed to invoke {program}")]
pub struct SpawnError {
    program: String,
    #[source]
    source: io::Error,
}

impl SpawnError {
    pub fn exit_code(&self) -> i32 {
        spawn_failure_code(&self.source)
    }
}

/// The exit code for a launcher that failed before the driver could report one.
pub fn failure_exit_code(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<SpawnError>().map_or(1, SpawnError::exit_code)
}

pub struct Launcher<H: Host, T: Trace> {
    config: LauncherConfig,
    program: String,
    host: H,
    trace: T,
}

impl<H: Host, T: Trace> Launcher<H, T> {
    /// `program` is only used for the usage line.
    pub fn new(config: LauncherConfig, program: impl Into<String>, host: H, trace: T) -> Self {
        Launcher { config, program: program.into(), host, trace }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Run the launcher. `args` excludes argv0; only the first one is looked at.
    pub fn run<I>(&mut self, args: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = OsString>,
    {
        let first = args.into_iter().next();
        let flag = LaunchFlag::from_first_arg(first.as_deref());
        debug!(?flag, "launch");

        if flag == LaunchFlag::Help {
            return Ok(Outcome::Help { usage: usage(&self.program) });
        }

        let platform = self.detect_platform()?;
        let triple = platform.triple();
        debug!(?platform, triple, "host platform");

        if flag == LaunchFlag::RebuildLlvm {
            self.clear_llvm_marker(triple)?;
        }

        let mut cmd = self.build_command(platform)?;
        self.trace.step(&render_command(&cmd).to_string_lossy());
        if self.config.dry_run {
            return Ok(Outcome::DryRun);
        }
        let code = self.host.run(&mut cmd).map_err(|source| SpawnError {
            program: cmd.get_program().to_string_lossy().into_owned(),
            source,
        })?;
        debug!(code, "build driver finished");
        Ok(Outcome::Finished(code))
    }

    /// The build driver invocation for `platform`.
    pub fn build_command(&self, platform: HostPlatform) -> Result<Command> {
        let driver = self.config.driver_path().with_context(|| {
            format!("Failed to resolve the build driver {}", self.config.driver.display())
        })?;
        let mut cmd = Command::new(driver);
        cmd.args(["build", "--stage", STAGE, "--target"])
            .arg(platform.target_list())
            .current_dir(&self.config.root);
        Ok(cmd)
    }

    fn detect_platform(&mut self) -> Result<HostPlatform> {
        self.trace.step(&render_command(&uname_command()).to_string_lossy());
        let kernel = self.host.kernel_name().context("Failed to determine the host kernel name")?;
        Ok(HostPlatform::from_kernel_name(&kernel))
    }

    /// Remove the LLVM marker so the driver rebuilds LLVM. A marker that isn't there is fine.
    fn clear_llvm_marker(&mut self, triple: &str) -> Result<()> {
        let marker = self.config.llvm_marker(triple);
        // Only rendered, never spawned: the removal goes through the host.
        let mut rm = Command::new("rm");
        rm.arg("-f").arg(&marker);
        self.trace.step(&render_command(&rm).to_string_lossy());
        if self.config.dry_run {
            return Ok(());
        }
        match self.host.remove_file(&marker) {
            Ok(()) => debug!(marker = %marker.display(), "removed LLVM marker"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(marker = %marker.display(), "no LLVM marker to remove")
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to remove {}", marker.display()));
            }
        }
        Ok(())
    }
}
