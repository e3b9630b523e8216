// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Platform detection and platform-specific helpers.
//!
//! Discovery code is parameterized by [`OperatingSystem`] rather than reading
//! `cfg!` directly, so each platform's directory layout can be exercised from
//! any host.

pub mod file_ops;

mod constants;

pub use constants::{executable_extension, path_separator, with_executable_extension};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating systems with distinct JDK installation layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    /// The operating system this binary was compiled for.
    ///
    /// Unix flavours other than macOS share the Linux layout.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OperatingSystem::Windows
        } else if cfg!(target_os = "macos") {
            OperatingSystem::MacOs
        } else {
            OperatingSystem::Linux
        }
    }

    /// File name of the Java launcher on this operating system.
    pub fn java_executable(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "java.exe",
            OperatingSystem::MacOs | OperatingSystem::Linux => "java",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
        };
        write!(f, "{name}")
    }
}
