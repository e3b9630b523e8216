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

//! Turns a candidate path into a [`JdkDescriptor`].

use super::outcome::SkipReason;
use crate::models::{DiscoverySource, JdkDescriptor};
use crate::platform::OperatingSystem;
use crate::platform::file_ops::is_executable_file;
use crate::version::Version;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const RELEASE_FILE: &str = "release";
const BUNDLE_HOME: &[&str] = &["Contents", "Home"];

/// Decides whether a path is a usable JDK and describes it.
pub trait JdkProber: Send + Sync {
    /// `candidate` is either an installation directory or a launcher
    /// executable; `source` is recorded on the resulting descriptor.
    fn probe(
        &self,
        candidate: &Path,
        source: DiscoverySource,
    ) -> Result<JdkDescriptor, SkipReason>;
}

fn bundle_home(dir: &Path) -> PathBuf {
    BUNDLE_HOME.iter().fold(dir.to_path_buf(), |p, s| p.join(s))
}

/// Finds the installation root and launcher inside `dir`.
///
/// macOS tries the `Contents/Home` bundle layout before the flat `bin/`
/// layout; other platforms only use the flat layout.
pub fn resolve_launcher(
    dir: &Path,
    os: OperatingSystem,
) -> Result<(PathBuf, PathBuf), SkipReason> {
    let exe_name = os.java_executable();
    let layouts = match os {
        OperatingSystem::MacOs => vec![bundle_home(dir), dir.to_path_buf()],
        _ => vec![dir.to_path_buf()],
    };

    let mut saw_launcher = false;
    for home in layouts {
        let launcher = home.join("bin").join(exe_name);
        if is_executable_file(&launcher) {
            return Ok((home, launcher));
        }
        saw_launcher |= launcher.exists();
    }

    if saw_launcher {
        Err(SkipReason::NotExecutable)
    } else {
        Err(SkipReason::NotAJdk(format!("no bin/{exe_name}")))
    }
}

/// Display name of an installation: the bundle directory for macOS bundles,
/// otherwise the installation directory itself.
pub fn installation_name(home: &Path) -> String {
    let named = if home.ends_with(BUNDLE_HOME.iter().collect::<PathBuf>()) {
        home.parent().and_then(Path::parent).unwrap_or(home)
    } else {
        home
    };
    named
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| named.display().to_string())
}

/// Parses `KEY="value"` lines of a JDK `release` file.
pub fn parse_release_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            (
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            )
        })
        .filter(|(key, _)| !key.is_empty() && !key.starts_with('#'))
        .collect()
}

/// Extracts the quoted version and the line after it from `java -version`
/// output, e.g. `openjdk version "21.0.2" 2024-01-16`.
pub fn parse_version_output(output: &str) -> Option<(String, Option<String>)> {
    let mut lines = output.lines().skip_while(|line| !line.contains("version \""));
    let version_line = lines.next()?;
    let start = version_line.find('"')? + 1;
    let len = version_line[start..].find('"')?;
    let brand = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string);
    Some((version_line[start..start + len].to_string(), brand))
}

/// Reads the `release` file, falling back to running `java -version`.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseFileProber {
    os: OperatingSystem,
    run_launcher: bool,
}

impl ReleaseFileProber {
    pub fn new(os: OperatingSystem) -> Self {
        Self {
            os,
            run_launcher: true,
        }
    }

    /// Never executes launchers; installations without a usable `release`
    /// file are skipped.
    pub fn release_file_only(mut self) -> Self {
        self.run_launcher = false;
        self
    }

    fn locate(&self, candidate: &Path) -> Result<(PathBuf, PathBuf), SkipReason> {
        if !candidate.exists() {
            return Err(SkipReason::NotFound);
        }
        if candidate.is_dir() {
            return resolve_launcher(candidate, self.os);
        }

        let launcher = fs::canonicalize(candidate).unwrap_or_else(|_| candidate.to_path_buf());
        if !is_executable_file(&launcher) {
            return Err(SkipReason::NotExecutable);
        }
        let home = launcher
            .parent()
            .filter(|bin| bin.file_name().is_some_and(|name| name == "bin"))
            .and_then(Path::parent)
            .ok_or_else(|| {
                SkipReason::NotAJdk("launcher is not inside a bin directory".to_string())
            })?;
        Ok((home.to_path_buf(), launcher))
    }

    fn read_release(&self, home: &Path) -> Option<HashMap<String, String>> {
        let release = home.join(RELEASE_FILE);
        match fs::read_to_string(&release) {
            Ok(contents) => Some(parse_release_file(&contents)),
            Err(e) => {
                log::trace!("No readable release file at {}: {e}", release.display());
                None
            }
        }
    }

    fn run_version(&self, launcher: &Path) -> Result<(Version, Option<String>), SkipReason> {
        log::debug!("Running {} -version", launcher.display());
        let output = Command::new(launcher)
            .arg("-version")
            .output()
            .map_err(|e| SkipReason::NotAJdk(format!("failed to run launcher: {e}")))?;

        // Java prints version information to stderr
        let stderr = String::from_utf8_lossy(&output.stderr);
        let (raw, brand) = parse_version_output(&stderr).ok_or_else(|| {
            SkipReason::UnparsableVersion(stderr.lines().next().unwrap_or_default().to_string())
        })?;
        let version = Version::parse_java(&raw).map_err(|_| SkipReason::UnparsableVersion(raw))?;
        Ok((version, brand))
    }
}

impl JdkProber for ReleaseFileProber {
    fn probe(
        &self,
        candidate: &Path,
        source: DiscoverySource,
    ) -> Result<JdkDescriptor, SkipReason> {
        let (home, launcher) = self.locate(candidate)?;

        let release = self.read_release(&home);
        let from_release = release.as_ref().and_then(|fields| {
            fields.get("JAVA_VERSION").map(|raw| {
                let brand = fields
                    .get("IMPLEMENTOR")
                    .or_else(|| fields.get("JAVA_RUNTIME_VERSION"))
                    .cloned();
                Version::parse_java(raw)
                    .map(|version| (version, brand))
                    .map_err(|_| SkipReason::UnparsableVersion(raw.clone()))
            })
        });

        let (version, brand) = match from_release {
            Some(result) => result?,
            // A bare launcher such as the macOS /usr/bin/java stub
            None if release.is_none() && !home.join("lib").is_dir() => {
                return Err(SkipReason::NotAJdk(
                    "no release file or lib directory".to_string(),
                ));
            }
            None if self.run_launcher => self.run_version(&launcher)?,
            None => {
                return Err(SkipReason::NotAJdk(
                    "release file has no JAVA_VERSION".to_string(),
                ));
            }
        };

        let canonical = fs::canonicalize(&home).unwrap_or_else(|_| home.clone());
        let name = installation_name(&canonical);
        log::debug!("Probed {name} {version} at {}", home.display());
        Ok(JdkDescriptor::new(home, name, version, source).with_brand(brand))
    }
}
