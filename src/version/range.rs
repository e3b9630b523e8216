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

//! Inclusive version ranges used by registry queries.

use crate::error::{JdkScoutError, Result};
use crate::version::Version;
use std::cmp::Ordering;
use std::str::FromStr;

/// An inclusive range with optional bounds.
///
/// An omitted bound places no constraint on that side, so the default range
/// contains every version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Option<Version>,
    pub max: Option<Version>,
}

impl VersionRange {
    /// Builds a range, rejecting a minimum above the maximum.
    pub fn new(min: Option<Version>, max: Option<Version>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (&min, &max) {
            if lo.precedence_cmp(hi) == Ordering::Greater {
                return Err(JdkScoutError::InvalidVersionRange {
                    min: lo.to_string(),
                    max: hi.to_string(),
                });
            }
        }
        Ok(Self { min, max })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parses optional textual bounds, failing fast on malformed input.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self> {
        let min = min.map(Version::from_str).transpose()?;
        let max = max.map(Version::from_str).transpose()?;
        Self::new(min, max)
    }

    pub fn contains(&self, version: &Version) -> bool {
        let above_min = self
            .min
            .as_ref()
            .is_none_or(|min| version.precedence_cmp(min) != Ordering::Less);
        let below_max = self
            .max
            .as_ref()
            .is_none_or(|max| version.precedence_cmp(max) != Ordering::Greater);
        above_min && below_max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}
