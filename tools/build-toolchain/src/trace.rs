// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Echo of every step before it runs, in the style of `set -x`.

use std::io::Write;

use tracing::debug;

pub trait Trace {
    /// Called with the rendered step right before it is executed.
    fn step(&mut self, step: &str);
}

/// Writes `+ <step>` lines to stderr.
#[derive(Debug, Default)]
pub struct StderrTrace;

impl Trace for StderrTrace {
    fn step(&mut self, step: &str) {
        debug!(step, "execute");
        // Nothing sensible to do if stderr is gone; the step still runs.
        let _ = writeln!(std::io::stderr().lock(), "+ {step}");
    }
}

/// Collects the steps, mostly useful for tests.
impl Trace for Vec<String> {
    fn step(&mut self, step: &str) {
        self.push(step.to_string());
    }
}
