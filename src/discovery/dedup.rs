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

use super::exclusion::ExclusionSet;
use super::outcome::RawDiscovery;
use crate::models::JdkDescriptor;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fs;
use std::path::PathBuf;

/// Collapses raw results into one descriptor per canonical installation path.
///
/// Paths that cannot be canonicalized are kept as given. Excluded paths are
/// dropped whatever their source, and the first descriptor seen for a path
/// wins, so the scan order decides priority.
pub fn dedup(raw: Vec<RawDiscovery>, exclusions: &ExclusionSet) -> Vec<JdkDescriptor> {
    let mut unique: IndexMap<PathBuf, JdkDescriptor> = IndexMap::new();

    for RawDiscovery { probed, descriptor } in raw {
        let canonical = match fs::canonicalize(&descriptor.path) {
            Ok(canonical) => canonical,
            Err(e) => {
                log::debug!(
                    "Cannot canonicalize {}: {e}; using it as given",
                    descriptor.path.display()
                );
                descriptor.path.clone()
            }
        };

        if exclusions.is_excluded(&canonical) || exclusions.is_excluded(&descriptor.path) {
            log::debug!("Dropping excluded {} (probed {})", canonical.display(), probed.display());
            continue;
        }

        match unique.entry(canonical) {
            Entry::Occupied(existing) => {
                log::trace!(
                    "{} already found via {}; ignoring {} result",
                    existing.key().display(),
                    existing.get().source,
                    descriptor.source
                );
            }
            Entry::Vacant(slot) => {
                let relocated = descriptor.relocated(slot.key().clone());
                slot.insert(relocated);
            }
        }
    }

    unique.into_values().collect()
}
