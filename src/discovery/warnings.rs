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

//! Side channel for recoverable discovery problems.

use super::outcome::SkipReason;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Receives problems that were recovered from but should reach a human.
pub trait WarningSink: Send + Sync {
    fn warn(&self, path: &Path, reason: &SkipReason);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarningSink;

impl WarningSink for LogWarningSink {
    fn warn(&self, path: &Path, reason: &SkipReason) {
        log::warn!("Skipping {}: {reason}", path.display());
    }
}

/// Keeps warnings in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingWarningSink {
    warnings: Mutex<Vec<(PathBuf, SkipReason)>>,
}

impl CollectingWarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<(PathBuf, SkipReason)> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take(&self) -> Vec<(PathBuf, SkipReason)> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl WarningSink for CollectingWarningSink {
    fn warn(&self, path: &Path, reason: &SkipReason) {
        log::debug!("Collected warning for {}: {reason}", path.display());
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), reason.clone()));
    }
}
