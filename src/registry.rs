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

//! In-memory registry of discovered JDKs.
//!
//! The registry holds one immutable [`Snapshot`] behind an `Arc`. A refresh
//! builds a complete new snapshot off to the side and swaps the pointer, so
//! readers see either the old list or the new one, never a mixture, and a
//! snapshot obtained before a swap stays valid for as long as it is held.

use crate::discovery::{Discovery, ScanReport};
use crate::error::{JdkScoutError, Result};
use crate::models::JdkDescriptor;
use crate::version::{Version, VersionRange};
use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::SystemTime;

/// The complete result of one discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    jdks: Vec<JdkDescriptor>,
    generation: u64,
    refreshed_at: Option<SystemTime>,
}

impl Snapshot {
    /// The snapshot visible before the first refresh.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn jdks(&self) -> &[JdkDescriptor] {
        &self.jdks
    }

    /// Number of completed refreshes that led to this snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn refreshed_at(&self) -> Option<SystemTime> {
        self.refreshed_at
    }
}

impl Deref for Snapshot {
    type Target = [JdkDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.jdks
    }
}

/// Rejects a pattern that is not itself a version prefix.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    pattern
        .parse::<Version>()
        .map(|_| ())
        .map_err(|_| JdkScoutError::InvalidVersionFormat(pattern.to_string()))
}

pub struct JdkRegistry {
    discovery: Discovery,
    current: RwLock<Arc<Snapshot>>,
    refresh_lock: Mutex<()>,
}

impl JdkRegistry {
    pub fn new(discovery: Discovery) -> Self {
        Self {
            discovery,
            current: RwLock::new(Arc::new(Snapshot::empty())),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Re-runs discovery and publishes the result.
    ///
    /// Blocks for the whole pass. Concurrent refreshes run one after another
    /// and the last to finish stays visible. Readers are never blocked.
    pub fn refresh(&self) -> Arc<Snapshot> {
        self.refresh_with_report().0
    }

    /// Like [`refresh`](Self::refresh), also returning every scan outcome.
    pub fn refresh_with_report(&self) -> (Arc<Snapshot>, ScanReport) {
        let _guard = self
            .refresh_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let report = self.discovery.run();
        let snapshot = Arc::new(Snapshot {
            jdks: report.jdks,
            generation: self.current_snapshot().generation + 1,
            refreshed_at: Some(SystemTime::now()),
        });

        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = Arc::clone(&snapshot);
        }
        log::debug!(
            "Published snapshot generation {} with {} JDK(s)",
            snapshot.generation,
            snapshot.len()
        );

        (snapshot, report.scan)
    }

    pub fn current_snapshot(&self) -> Arc<Snapshot> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Every JDK of the current snapshot, in discovery priority order.
    pub fn available_jdks(&self) -> Arc<Snapshot> {
        self.current_snapshot()
    }

    /// JDKs whose version lies in `range`, bounds inclusive.
    pub fn jdks_in_range(&self, range: &VersionRange) -> Vec<JdkDescriptor> {
        let snapshot = self.current_snapshot();
        if range.is_unbounded() {
            return snapshot.to_vec();
        }
        snapshot
            .iter()
            .filter(|jdk| range.contains(&jdk.version))
            .cloned()
            .collect()
    }

    /// Fails with [`JdkScoutError::InvalidVersionRange`] when `min` is above `max`.
    pub fn jdks_in_version_range(
        &self,
        min: Option<&Version>,
        max: Option<&Version>,
    ) -> Result<Vec<JdkDescriptor>> {
        let range = VersionRange::new(min.cloned(), max.cloned())?;
        Ok(self.jdks_in_range(&range))
    }

    /// Parses the bounds first; a malformed bound is an error.
    pub fn jdks_in_version_range_str(
        &self,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<Vec<JdkDescriptor>> {
        let range = VersionRange::parse(min, max)?;
        Ok(self.jdks_in_range(&range))
    }

    /// JDKs whose version matches a prefix pattern such as `17` or `21.0`.
    pub fn find_by_pattern(&self, pattern: &str) -> Result<Vec<JdkDescriptor>> {
        self.query(&VersionRange::unbounded(), Some(pattern))
    }

    /// JDKs inside `range` that also match `pattern`, read from one snapshot.
    pub fn query(
        &self,
        range: &VersionRange,
        pattern: Option<&str>,
    ) -> Result<Vec<JdkDescriptor>> {
        if let Some(pattern) = pattern {
            validate_pattern(pattern)?;
        }
        Ok(self
            .current_snapshot()
            .iter()
            .filter(|jdk| range.contains(&jdk.version))
            .filter(|jdk| pattern.is_none_or(|p| jdk.version.matches_pattern(p)))
            .cloned()
            .collect())
    }

    /// Highest version in the current snapshot; the earliest wins a tie.
    pub fn latest(&self) -> Option<JdkDescriptor> {
        self.current_snapshot()
            .iter()
            .rev()
            .max_by(|a, b| a.version.cmp(&b.version))
            .cloned()
    }
}
