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

//! JDK discovery pipeline.
//!
//! Data flows one way: [`PlatformPathProvider`] produces candidate
//! directories, the [`Scanner`] probes them together with the explicit
//! sources, and [`dedup`] collapses the raw results into one descriptor per
//! canonical installation path. [`Discovery`] wires the stages together and
//! is what the registry runs on every refresh.

pub mod candidates;
pub mod dedup;
pub mod environment;
pub mod exclusion;
pub mod outcome;
pub mod probe;
pub mod scanner;
pub mod warnings;

pub use candidates::{CandidateDirectoryProvider, PlatformPathProvider};
pub use dedup::dedup;
pub use environment::DiscoveryEnv;
pub use exclusion::ExclusionSet;
pub use outcome::{RawDiscovery, ScanOutcome, ScanReport, SkipReason};
pub use probe::{JdkProber, ReleaseFileProber};
pub use scanner::{DirectoryLister, FsDirectoryLister, Scanner};
pub use warnings::{CollectingWarningSink, LogWarningSink, WarningSink};

use crate::config::DiscoveryConfig;
use crate::models::JdkDescriptor;
use crate::platform::OperatingSystem;
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Normalizes a path to an absolute, symlink-free form when possible.
///
/// A missing path keeps its missing tail on top of its deepest resolvable
/// ancestor; otherwise it falls back to a lexically absolute path, then to the
/// path as given, so it never fails.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut missing_tail = Vec::new();
    let mut current = absolute.as_path();
    while let (Some(parent), Some(name)) = (current.parent(), current.file_name()) {
        missing_tail.push(name);
        if let Ok(mut resolved) = fs::canonicalize(parent) {
            resolved.extend(missing_tail.iter().rev());
            return resolved;
        }
        current = parent;
    }
    absolute
}

/// Where each pass reads its environment from.
#[derive(Debug, Clone)]
pub enum EnvSource {
    /// Re-read the process environment on every pass.
    Process,
    /// Use a fixed snapshot.
    Fixed(DiscoveryEnv),
}

impl EnvSource {
    fn capture(&self) -> DiscoveryEnv {
        match self {
            EnvSource::Process => DiscoveryEnv::from_process(),
            EnvSource::Fixed(env) => env.clone(),
        }
    }
}

/// Result of one complete discovery pass.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    pub jdks: Vec<JdkDescriptor>,
    pub scan: ScanReport,
}

/// A configured discovery pipeline.
pub struct Discovery {
    os: OperatingSystem,
    env: EnvSource,
    config: DiscoveryConfig,
    prober: Arc<dyn JdkProber>,
    warnings: Arc<dyn WarningSink>,
    lister: Arc<dyn DirectoryLister>,
    path_provider: Option<PlatformPathProvider>,
}

impl Discovery {
    /// A pipeline for the current platform reading the live environment.
    pub fn new(config: DiscoveryConfig) -> Self {
        let os = OperatingSystem::current();
        Self {
            os,
            env: EnvSource::Process,
            config,
            prober: Arc::new(ReleaseFileProber::new(os)),
            warnings: Arc::new(LogWarningSink),
            lister: Arc::new(FsDirectoryLister),
            path_provider: None,
        }
    }

    /// Targets a specific platform layout; the default prober follows it.
    pub fn with_os(mut self, os: OperatingSystem) -> Self {
        self.os = os;
        self.prober = Arc::new(ReleaseFileProber::new(os));
        self
    }

    pub fn with_env(mut self, env: DiscoveryEnv) -> Self {
        self.env = EnvSource::Fixed(env);
        self
    }

    pub fn with_prober(mut self, prober: Arc<dyn JdkProber>) -> Self {
        self.prober = prober;
        self
    }

    pub fn with_warning_sink(mut self, warnings: Arc<dyn WarningSink>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_directory_lister(mut self, lister: Arc<dyn DirectoryLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Replaces the platform candidate directories entirely.
    pub fn with_path_provider(mut self, provider: PlatformPathProvider) -> Self {
        self.path_provider = Some(provider);
        self
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Candidate directories for the given environment, in scan order.
    pub fn candidate_directories(&self, env: &DiscoveryEnv) -> IndexSet<PathBuf> {
        match &self.path_provider {
            Some(provider) => provider.candidate_directories(env),
            None => PlatformPathProvider::for_os(self.os, &self.config.scan_paths)
                .candidate_directories(env),
        }
    }

    /// Candidate directories for the environment this pipeline would read now.
    pub fn current_candidate_directories(&self) -> IndexSet<PathBuf> {
        self.candidate_directories(&self.env.capture())
    }

    /// Runs one full pass: candidates, scan, dedup.
    pub fn run(&self) -> DiscoveryReport {
        let env = self.env.capture();
        let exclusions = ExclusionSet::new(&self.config.excluded_paths);
        let candidates = self.candidate_directories(&env);
        log::debug!("Scanning {} candidate directories", candidates.len());

        let scanner = Scanner::new(
            self.prober.as_ref(),
            &exclusions,
            self.os,
            self.warnings.as_ref(),
        )
        .with_lister(self.lister.as_ref());
        let scan = scanner.scan(&env, &candidates, &self.config.jdk_paths);
        let jdks = dedup(scan.found().cloned().collect(), &exclusions);

        log::info!(
            "Discovery found {} JDK(s) from {} probe result(s), {} skipped",
            jdks.len(),
            scan.found().count(),
            scan.skipped().count()
        );

        DiscoveryReport { jdks, scan }
    }
}
