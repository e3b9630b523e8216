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

//! Probes explicit sources and one level of every candidate directory.

use super::environment::DiscoveryEnv;
use super::exclusion::ExclusionSet;
use super::outcome::{RawDiscovery, ScanOutcome, ScanReport, SkipReason};
use super::probe::JdkProber;
use super::warnings::WarningSink;
use crate::models::DiscoverySource;
use crate::platform::OperatingSystem;
use indexmap::IndexSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the entries of a candidate directory.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Lists directories through `fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(fs::read_dir(dir)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::debug!("Unreadable entry in {}: {e}", dir.display());
                    None
                }
            })
            .collect())
    }
}

/// One scan pass over borrowed collaborators.
pub struct Scanner<'a> {
    prober: &'a dyn JdkProber,
    exclusions: &'a ExclusionSet,
    os: OperatingSystem,
    warnings: &'a dyn WarningSink,
    lister: &'a dyn DirectoryLister,
}

impl<'a> Scanner<'a> {
    pub fn new(
        prober: &'a dyn JdkProber,
        exclusions: &'a ExclusionSet,
        os: OperatingSystem,
        warnings: &'a dyn WarningSink,
    ) -> Self {
        Self {
            prober,
            exclusions,
            os,
            warnings,
            lister: &FsDirectoryLister,
        }
    }

    pub fn with_lister(mut self, lister: &'a dyn DirectoryLister) -> Self {
        self.lister = lister;
        self
    }

    /// Probes every source in priority order and records each outcome.
    ///
    /// Order: `JAVA_HOME`, `JDK_HOME`, the first `java` on `PATH`, the
    /// children of each candidate directory, then `manual` paths. No single
    /// failure stops the scan.
    pub fn scan(
        &self,
        env: &DiscoveryEnv,
        candidates: &IndexSet<PathBuf>,
        manual: &[PathBuf],
    ) -> ScanReport {
        let mut report = ScanReport::default();

        if let Some(java_home) = &env.java_home {
            self.probe_into(java_home, DiscoverySource::JavaHome, &mut report);
        }
        if let Some(jdk_home) = &env.jdk_home {
            self.probe_into(jdk_home, DiscoverySource::JdkHome, &mut report);
        }
        if let Some(launcher) = env.find_on_path(self.os.java_executable()) {
            self.probe_into(&launcher, DiscoverySource::PathLookup, &mut report);
        }

        for dir in candidates {
            self.scan_directory(dir, &mut report);
        }

        for path in manual {
            self.probe_into(path, DiscoverySource::Configured, &mut report);
        }

        report
    }

    fn scan_directory(&self, dir: &Path, report: &mut ScanReport) {
        if !dir.is_dir() {
            log::trace!("Candidate directory {} does not exist", dir.display());
            return;
        }
        if self.exclusions.is_excluded(dir) {
            self.skip(dir, SkipReason::Excluded, report);
            return;
        }

        let mut children = match self.lister.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.skip(dir, SkipReason::ListingFailed(e.to_string()), report);
                return;
            }
        };
        children.retain(|path| path.is_dir());
        children.sort();

        log::debug!(
            "Probing {} entries under {}",
            children.len(),
            dir.display()
        );
        for child in children {
            self.probe_into(&child, DiscoverySource::CommonDirectory, report);
        }
    }

    fn probe_into(&self, path: &Path, source: DiscoverySource, report: &mut ScanReport) {
        if self.exclusions.is_excluded(path) {
            self.skip(path, SkipReason::Excluded, report);
            return;
        }

        match self.prober.probe(path, source) {
            Ok(descriptor) => {
                log::debug!("Found {descriptor} via {source}");
                report.push(ScanOutcome::Found(RawDiscovery {
                    probed: path.to_path_buf(),
                    descriptor,
                }));
            }
            Err(reason) => self.skip(path, reason, report),
        }
    }

    fn skip(&self, path: &Path, reason: SkipReason, report: &mut ScanReport) {
        if reason.is_warning() {
            self.warnings.warn(path, &reason);
        } else {
            log::debug!("Skipping {}: {reason}", path.display());
        }
        report.push(ScanOutcome::Skipped {
            path: path.to_path_buf(),
            reason,
        });
    }
}
