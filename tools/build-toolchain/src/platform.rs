// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host platform detection.
//!
//! The host is identified by its kernel name, as reported by `uname -s`, and mapped to the
//! target triple the toolchain is built for. We only build x86_64 hosts.

use tracing::debug;

/// The freestanding target that is always built next to the host target.
pub const SECONDARY_TARGET: &str = "bpfel-unknown-unknown";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HostPlatform {
    Linux,
    MacOs,
    Windows,
}

/// Kernel name prefixes we recognize, checked in order.
const KERNEL_PREFIXES: &[(&str, HostPlatform)] = &[
    ("Linux", HostPlatform::Linux),
    ("Darwin", HostPlatform::MacOs),
    ("MINGW", HostPlatform::Windows),
];

impl HostPlatform {
    /// Map a kernel name to a host platform. Unknown kernels are treated as Linux.
    pub fn from_kernel_name(kernel: &str) -> Self {
        KERNEL_PREFIXES
            .iter()
            .find(|(prefix, _)| kernel.starts_with(*prefix))
            .map(|(_, platform)| *platform)
            .unwrap_or_else(|| {
                debug!(kernel, "unrecognized kernel name, defaulting to Linux");
                HostPlatform::Linux
            })
    }

    pub fn triple(self) -> &'static str {
        match self {
            HostPlatform::Linux => "x86_64-unknown-linux-gnu",
            HostPlatform::MacOs => "x86_64-apple-darwin",
            HostPlatform::Windows => "x86_64-pc-windows-msvc",
        }
    }

    /// The `--target` value handed to the build driver: host first, then the BPF target.
    pub fn target_list(self) -> String {
        format!("{},{}", self.triple(), SECONDARY_TARGET)
    }
}
