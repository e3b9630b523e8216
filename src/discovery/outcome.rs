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

//! Per-candidate results threaded through a scan.

use crate::models::JdkDescriptor;
use std::fmt;
use std::path::PathBuf;

/// Why a candidate produced no descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Excluded,
    NotExecutable,
    NotAJdk(String),
    UnparsableVersion(String),
    ListingFailed(String),
}

impl SkipReason {
    /// Listing failures hide whole directories and deserve a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, SkipReason::ListingFailed(_))
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "path does not exist"),
            SkipReason::Excluded => write!(f, "excluded by configuration"),
            SkipReason::NotExecutable => write!(f, "java launcher is not executable"),
            SkipReason::NotAJdk(why) => write!(f, "not a JDK: {why}"),
            SkipReason::UnparsableVersion(raw) => write!(f, "unparsable version '{raw}'"),
            SkipReason::ListingFailed(err) => write!(f, "failed to list directory: {err}"),
        }
    }
}

/// A probe that produced a descriptor, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiscovery {
    /// The path handed to the prober.
    pub probed: PathBuf,
    pub descriptor: JdkDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(RawDiscovery),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Every outcome of a scan, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub outcomes: Vec<ScanOutcome>,
}

impl ScanReport {
    pub fn push(&mut self, outcome: ScanOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn found(&self) -> impl Iterator<Item = &RawDiscovery> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ScanOutcome::Found(raw) => Some(raw),
            ScanOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &SkipReason)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ScanOutcome::Found(_) => None,
            ScanOutcome::Skipped { path, reason } => Some((path, reason)),
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = (&PathBuf, &SkipReason)> {
        self.skipped().filter(|(_, reason)| reason.is_warning())
    }
}
