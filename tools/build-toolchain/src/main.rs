// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::process::ExitCode;

use build_toolchain::parser::program_name;
use build_toolchain::{
    failure_exit_code, util, Launcher, LauncherConfig, Outcome, StderrTrace, SystemHost,
};
use tracing::debug;

fn main() -> ExitCode {
    util::init_logger();

    let mut args = std::env::args_os();
    let program = program_name(args.next().as_ref());
    let mut launcher = Launcher::new(LauncherConfig::from_env(), program, SystemHost, StderrTrace);

    let code = match launcher.run(args) {
        Ok(Outcome::Help { usage }) => {
            println!("{usage}");
            0
        }
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            // We are using the debug format for now to print the all the context.
            debug!(?error, "main_failure");
            util::error(&format!("{error:#}"));
            failure_exit_code(&error)
        }
    };

    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => {
            util::warning(&format!("exit code {code} cannot be reported as is, exiting with 1"));
            ExitCode::FAILURE
        }
    }
}
