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

//! Candidate directories that may hold JDK installations.
//!
//! Each platform contributes its own [`CandidateDirectoryProvider`];
//! [`PlatformPathProvider`] chains them with the per-user version manager
//! caches and the configured scan paths.

use super::environment::DiscoveryEnv;
use super::normalize_path;
use crate::platform::OperatingSystem;
use indexmap::IndexSet;
use std::path::PathBuf;

const PROGRAM_FILES_DIRS: &[&str] = &["Program Files", "Program Files (x86)"];

const WINDOWS_VENDOR_DIRS: &[&str] = &[
    "Java",
    "Eclipse Adoptium",
    "Eclipse Foundation",
    "AdoptOpenJDK",
    "Amazon Corretto",
    "Microsoft",
    "Zulu",
    "BellSoft",
    "Semeru",
    "RedHat",
    "SapMachine",
];

const MACOS_SYSTEM_JVM_DIR: &str = "/Library/Java/JavaVirtualMachines";
const MACOS_HOMEBREW_DIRS: &[&str] = &["/opt/homebrew/opt", "/usr/local/opt"];

const LINUX_JVM_DIRS: &[&str] = &[
    "/usr/lib/jvm",
    "/usr/lib64/jvm",
    "/usr/java",
    "/usr/local/java",
    "/opt/java",
    "/opt/jdk",
];

const USER_MANAGER_DIRS: &[&[&str]] = &[
    &[".sdkman", "candidates", "java"],
    &[".asdf", "installs", "java"],
    &[".jdks"],
    &[".jabba", "jdk"],
    &[".kopi", "jdks"],
];

/// A source of directories whose immediate children may be JDKs.
pub trait CandidateDirectoryProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Directories in scan order; they need not exist.
    fn candidate_directories(&self, env: &DiscoveryEnv) -> Vec<PathBuf>;
}

/// Vendor directories under both Program Files trees on every drive.
#[derive(Debug, Clone, Default)]
pub struct WindowsDirectories {
    drives: Option<Vec<char>>,
}

impl WindowsDirectories {
    /// Probes drive letters C through Z on each call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a fixed set of drive letters instead of probing.
    pub fn with_drives(drives: impl IntoIterator<Item = char>) -> Self {
        Self {
            drives: Some(drives.into_iter().collect()),
        }
    }

    fn drive_root(letter: char) -> PathBuf {
        PathBuf::from(format!("{letter}:\\"))
    }

    fn drives(&self) -> Vec<char> {
        match &self.drives {
            Some(drives) => drives.clone(),
            None => ('C'..='Z')
                .filter(|letter| Self::drive_root(*letter).exists())
                .collect(),
        }
    }
}

impl CandidateDirectoryProvider for WindowsDirectories {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn candidate_directories(&self, _env: &DiscoveryEnv) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for letter in self.drives() {
            let root = Self::drive_root(letter);
            for program_files in PROGRAM_FILES_DIRS {
                for vendor in WINDOWS_VENDOR_DIRS {
                    dirs.push(root.join(program_files).join(vendor));
                }
            }
        }
        dirs
    }
}

/// System and per-user JVM bundle directories plus both Homebrew prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsDirectories;

impl CandidateDirectoryProvider for MacOsDirectories {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn candidate_directories(&self, env: &DiscoveryEnv) -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from(MACOS_SYSTEM_JVM_DIR)];
        if let Some(home) = env.home_dir() {
            dirs.push(home.join("Library").join("Java").join("JavaVirtualMachines"));
        }
        dirs.extend(MACOS_HOMEBREW_DIRS.iter().map(PathBuf::from));
        dirs
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxDirectories;

impl CandidateDirectoryProvider for LinuxDirectories {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn candidate_directories(&self, _env: &DiscoveryEnv) -> Vec<PathBuf> {
        LINUX_JVM_DIRS.iter().map(PathBuf::from).collect()
    }
}

/// Install roots of per-user version managers and the Gradle toolchain cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserManagerDirectories;

impl CandidateDirectoryProvider for UserManagerDirectories {
    fn name(&self) -> &'static str {
        "user-managers"
    }

    fn candidate_directories(&self, env: &DiscoveryEnv) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(home) = env.home_dir() {
            for segments in USER_MANAGER_DIRS {
                dirs.push(segments.iter().fold(home.to_path_buf(), |p, s| p.join(s)));
            }
        }

        // GRADLE_USER_HOME replaces ~/.gradle entirely when set
        let gradle_home = env
            .gradle_user_home
            .clone()
            .or_else(|| env.home_dir().map(|home| home.join(".gradle")));
        if let Some(gradle_home) = gradle_home {
            dirs.push(gradle_home.join("jdks"));
        }
        dirs
    }
}

/// Additional scan directories from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredDirectories {
    dirs: Vec<PathBuf>,
}

impl ConfiguredDirectories {
    pub fn new(dirs: &[PathBuf]) -> Self {
        Self {
            dirs: dirs.to_vec(),
        }
    }
}

impl CandidateDirectoryProvider for ConfiguredDirectories {
    fn name(&self) -> &'static str {
        "configured"
    }

    fn candidate_directories(&self, _env: &DiscoveryEnv) -> Vec<PathBuf> {
        self.dirs.clone()
    }
}

/// Ordered, duplicate-free union of several candidate providers.
pub struct PlatformPathProvider {
    strategies: Vec<Box<dyn CandidateDirectoryProvider>>,
}

impl PlatformPathProvider {
    pub fn new(strategies: Vec<Box<dyn CandidateDirectoryProvider>>) -> Self {
        Self { strategies }
    }

    /// The standard chain for `os`: platform directories, then version
    /// manager caches, then `scan_paths`.
    pub fn for_os(os: OperatingSystem, scan_paths: &[PathBuf]) -> Self {
        let platform: Box<dyn CandidateDirectoryProvider> = match os {
            OperatingSystem::Windows => Box::new(WindowsDirectories::new()),
            OperatingSystem::MacOs => Box::new(MacOsDirectories),
            OperatingSystem::Linux => Box::new(LinuxDirectories),
        };
        Self::new(vec![
            platform,
            Box::new(UserManagerDirectories),
            Box::new(ConfiguredDirectories::new(scan_paths)),
        ])
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Every strategy's directories, normalized, first occurrence kept.
    pub fn candidate_directories(&self, env: &DiscoveryEnv) -> IndexSet<PathBuf> {
        let mut dirs = IndexSet::new();
        for strategy in &self.strategies {
            for dir in strategy.candidate_directories(env) {
                let normalized = normalize_path(&dir);
                log::trace!("Candidate from {}: {}", strategy.name(), normalized.display());
                dirs.insert(normalized);
            }
        }
        dirs
    }
}

impl Default for PlatformPathProvider {
    fn default() -> Self {
        Self::for_os(OperatingSystem::current(), &[])
    }
}

impl std::fmt::Debug for PlatformPathProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformPathProvider")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
