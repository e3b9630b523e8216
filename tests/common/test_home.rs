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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory holding a `.jdkscout` config directory.
///
/// Everything is removed when the guard is dropped.
#[allow(dead_code)]
pub struct TestHomeGuard {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        fs::create_dir_all(dir.path().join(".jdkscout"))
            .expect("Failed to create .jdkscout directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn scout_home(&self) -> PathBuf {
        self.path().join(".jdkscout")
    }

    pub fn write_config(&self, contents: &str) -> &Self {
        fs::write(self.scout_home().join("config.toml"), contents)
            .expect("Failed to write config.toml");
        self
    }

    /// A TOML string literal for `path`, safe for Windows separators.
    pub fn toml_path(path: &Path) -> String {
        format!("'{}'", path.display())
    }
}
