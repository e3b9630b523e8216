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

//! Environment inputs read once per discovery pass.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
pub const JDK_HOME_VAR: &str = "JDK_HOME";
pub const PATH_VAR: &str = "PATH";
pub const GRADLE_USER_HOME_VAR: &str = "GRADLE_USER_HOME";

/// A snapshot of the environment variables discovery depends on.
///
/// Empty variables are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryEnv {
    pub java_home: Option<PathBuf>,
    pub jdk_home: Option<PathBuf>,
    pub path: Option<OsString>,
    pub gradle_user_home: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub current_dir: Option<PathBuf>,
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}

impl DiscoveryEnv {
    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self {
            java_home: non_empty(env::var_os(JAVA_HOME_VAR)).map(PathBuf::from),
            jdk_home: non_empty(env::var_os(JDK_HOME_VAR)).map(PathBuf::from),
            path: non_empty(env::var_os(PATH_VAR)),
            gradle_user_home: non_empty(env::var_os(GRADLE_USER_HOME_VAR)).map(PathBuf::from),
            home_dir: dirs::home_dir(),
            current_dir: env::current_dir().ok(),
        }
    }

    /// An environment with nothing set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_java_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.java_home = Some(path.into());
        self
    }

    pub fn with_jdk_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.jdk_home = Some(path.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<OsString>) -> Self {
        self.path = non_empty(Some(path.into()));
        self
    }

    pub fn with_gradle_user_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.gradle_user_home = Some(path.into());
        self
    }

    pub fn with_home_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(path.into());
        self
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Resolves `executable` against this environment's `PATH`.
    ///
    /// Returns the first executable match, or `None` when `PATH` is unset.
    pub fn find_on_path(&self, executable: &str) -> Option<PathBuf> {
        let search_path = self.path.as_ref()?;
        let cwd = self
            .current_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        match which::which_in(executable, Some(search_path), cwd) {
            Ok(found) => Some(found),
            Err(e) => {
                log::trace!("{executable} not found on PATH: {e}");
                None
            }
        }
    }
}
