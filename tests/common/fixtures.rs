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

//! Shared fixtures for building fake JDK installations on disk.

use std::fs;
use std::path::{Path, PathBuf};

fn write_launcher(home: &Path) -> PathBuf {
    let bin = home.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let launcher = bin.join(if cfg!(windows) { "java.exe" } else { "java" });
    fs::write(&launcher, "#!/bin/sh\nexit 0\n").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755)).unwrap();
    }
    launcher
}

/// Creates `<parent>/<name>` with an executable `bin/java` and a `release`
/// file declaring `version`.
///
/// # Returns
/// The installation directory
#[allow(dead_code)]
pub fn create_fake_jdk(parent: &Path, name: &str, version: &str) -> PathBuf {
    let home = parent.join(name);
    write_launcher(&home);
    fs::write(
        home.join("release"),
        format!("JAVA_VERSION=\"{version}\"\nIMPLEMENTOR=\"Test Vendor\"\n"),
    )
    .unwrap();
    home
}

/// Creates a macOS-style bundle `<parent>/<name>/Contents/Home`.
///
/// # Returns
/// The `Contents/Home` directory
#[allow(dead_code)]
pub fn create_fake_bundle(parent: &Path, name: &str, version: &str) -> PathBuf {
    let contents = parent.join(name).join("Contents");
    create_fake_jdk(&contents, "Home", version)
}

/// The launcher inside an installation created by [`create_fake_jdk`].
#[allow(dead_code)]
pub fn launcher_of(home: &Path) -> PathBuf {
    home.join("bin")
        .join(if cfg!(windows) { "java.exe" } else { "java" })
}
