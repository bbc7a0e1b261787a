// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This module contains small helper functions for rendering and running Commands.

use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus};

/// Exit code a shell reports when the program could not be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;
/// Exit code a shell reports when the program exists but could not be executed.
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;

/// Render a Command as a string, to log it
pub fn render_command(cmd: &Command) -> OsString {
    let mut str = OsString::new();

    for (k, v) in cmd.get_envs() {
        if let Some(v) = v {
            str.push(k);
            str.push("=\"");
            str.push(v);
            str.push("\" ");
        }
    }

    str.push(cmd.get_program());

    for a in cmd.get_args() {
        str.push(" ");
        if a.to_string_lossy().contains(' ') {
            str.push("\"");
            str.push(a);
            str.push("\"");
        } else {
            str.push(a);
        }
    }

    str
}

/// The exit code of a finished child, as a shell would report it.
/// A child killed by a signal reports `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// The exit code a shell reports when it fails to start a program.
pub fn spawn_failure_code(error: &io::Error) -> i32 {
    match error.kind() {
        io::ErrorKind::NotFound => NOT_FOUND_EXIT_CODE,
        io::ErrorKind::PermissionDenied => NOT_EXECUTABLE_EXIT_CODE,
        _ => 1,
    }
}
