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

use crate::error::{JdkScoutError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub mod range;

pub use range::VersionRange;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub components: Vec<u32>,        // All numeric components
    pub build: Option<Vec<u32>>,     // Build numbers as numeric array
    pub pre_release: Option<String>, // Pre-release string
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![major, minor, patch],
            build: None,
            pre_release: None,
        }
    }

    pub fn from_components(major: u32, minor: Option<u32>, patch: Option<u32>) -> Self {
        let mut components = vec![major];
        if let Some(minor) = minor {
            components.push(minor);
            if let Some(patch) = patch {
                components.push(patch);
            }
        }
        Self {
            components,
            build: None,
            pre_release: None,
        }
    }

    pub fn with_build(mut self, build: String) -> Self {
        // Parse build string into numeric components if possible
        let build_parts: Vec<u32> = build
            .split('.')
            .filter_map(|s| s.parse::<u32>().ok())
            .collect();

        if !build_parts.is_empty() {
            self.build = Some(build_parts);
        } else {
            // If build is not numeric, store it as pre-release
            self.pre_release = Some(build);
        }
        self
    }

    pub fn major(&self) -> u32 {
        self.components.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> Option<u32> {
        self.components.get(1).copied()
    }

    pub fn patch(&self) -> Option<u32> {
        self.components.get(2).copied()
    }

    /// Parses a version string as reported by a Java launcher or a `release` file.
    ///
    /// Handles the legacy `1.x` scheme (`1.8.0_392-b08` becomes `8.0.392+8`),
    /// surrounding quotes, and the `-bNN` build suffix used before JDK 9.
    pub fn parse_java(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_matches('"');
        if trimmed.is_empty() {
            return Err(JdkScoutError::InvalidVersionFormat(raw.to_string()));
        }

        let suffix_pos = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
        let (numeric, suffix) = trimmed.split_at(suffix_pos);

        let mut numeric = numeric.replace('_', ".");
        if let Some(rest) = numeric.strip_prefix("1.") {
            let legacy_major = rest.split('.').next().and_then(|m| m.parse::<u32>().ok());
            if matches!(legacy_major, Some(m) if m <= 8) {
                numeric = rest.to_string();
            }
        }

        let suffix = match suffix.strip_prefix("-b") {
            Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                let build = digits.trim_start_matches('0');
                format!("+{}", if build.is_empty() { "0" } else { build })
            }
            _ => suffix.to_string(),
        };

        Version::from_str(&format!("{numeric}{suffix}"))
            .map_err(|_| JdkScoutError::InvalidVersionFormat(raw.to_string()))
    }

    /// Compares release precedence against a range bound.
    ///
    /// Missing components count as zero, a pre-release sorts before its release,
    /// and build numbers are only compared when the bound names one.
    pub fn precedence_cmp(&self, bound: &Version) -> Ordering {
        match self.cmp_components(bound) {
            Ordering::Equal => {}
            other => return other,
        }
        match cmp_pre_release(&self.pre_release, &bound.pre_release) {
            Ordering::Equal => {}
            other => return other,
        }
        match &bound.build {
            Some(bound_build) => self
                .build
                .as_deref()
                .unwrap_or_default()
                .cmp(bound_build.as_slice()),
            None => Ordering::Equal,
        }
    }

    fn cmp_components(&self, other: &Version) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let left = self.components.get(i).copied().unwrap_or(0);
            let right = other.components.get(i).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Matches a version string against this version.
    /// When the user specifies "21", it matches entries like "21.0" and "21.0.0".
    /// When the user specifies "21.0.0", it does NOT match entries like "21".
    /// When the user specifies "21.0", it matches entries like "21.0.0" and "21.0+32".
    pub fn matches_pattern(&self, pattern: &str) -> bool {
        let Ok(pattern_version) = Version::from_str(pattern) else {
            return false;
        };

        // Compare components up to the length specified in pattern
        for (i, pattern_comp) in pattern_version.components.iter().enumerate() {
            match self.components.get(i) {
                Some(self_comp) if self_comp == pattern_comp => {}
                _ => return false,
            }
        }

        if let Some(pattern_build) = &pattern_version.build {
            if self.build.as_ref() != Some(pattern_build) {
                return false;
            }
        }

        if let Some(pattern_pre) = &pattern_version.pre_release {
            if self.pre_release.as_ref() != Some(pattern_pre) {
                return false;
            }
        }

        true
    }
}

fn cmp_pre_release(left: &Option<String>, right: &Option<String>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => l.cmp(r),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_components(other)
            .then_with(|| cmp_pre_release(&self.pre_release, &other.pre_release))
            .then_with(|| self.build.cmp(&other.build))
            .then_with(|| self.components.len().cmp(&other.components.len()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits a `+` build suffix into numeric build parts, or a pre-release when not numeric.
fn parse_build_suffix(
    original: &str,
    build_str: &str,
) -> Result<(Option<Vec<u32>>, Option<String>)> {
    if build_str.is_empty() {
        return Err(JdkScoutError::InvalidVersionFormat(original.to_string()));
    }

    let parts: Vec<&str> = build_str.split('.').collect();
    let numeric = parts
        .iter()
        .map(|part| {
            if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
                part.parse::<u32>().ok()
            } else {
                None
            }
        })
        .collect::<Option<Vec<u32>>>();

    match numeric {
        Some(build_parts) => Ok((Some(build_parts), None)),
        None => Ok((None, Some(build_str.to_string()))),
    }
}

impl FromStr for Version {
    type Err = JdkScoutError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(JdkScoutError::InvalidVersionFormat(s.to_string()));
        }

        let mut remaining = s;
        let mut pre_release = None;
        let mut build = None;

        // Whichever of '+' or '-' comes first owns the rest of the string
        match (s.find('+'), s.find('-')) {
            (Some(p), d) if d.is_none_or(|d| p < d) => {
                let (before_plus, after_plus) = s.split_at(p);
                remaining = before_plus;
                (build, pre_release) = parse_build_suffix(s, &after_plus[1..])?;
            }
            (_, Some(d)) => {
                let (before_dash, after_dash) = s.split_at(d);
                remaining = before_dash;
                let pre_str = &after_dash[1..];

                if pre_str.is_empty() {
                    return Err(JdkScoutError::InvalidVersionFormat(s.to_string()));
                }

                pre_release = Some(pre_str.to_string());
            }
            _ => {}
        }

        let components = remaining
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| JdkScoutError::InvalidVersionFormat(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Version {
            components,
            build,
            pre_release,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }

        if let Some(build) = &self.build {
            write!(f, "+")?;
            for (i, component) in build.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{component}")?;
            }
        }

        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{pre_release}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        assert_eq!(
            Version::from_str("21").unwrap(),
            Version::from_components(21, None, None)
        );
        assert_eq!(Version::from_str("17.0.9").unwrap(), Version::new(17, 0, 9));

        let v = Version::from_str("11.0.2+9").unwrap();
        assert_eq!(v.components, vec![11, 0, 2]);
        assert_eq!(v.build, Some(vec![9]));

        // Corretto style extended components
        let v = Version::from_str("21.0.7.6.1").unwrap();
        assert_eq!(v.components, vec![21, 0, 7, 6, 1]);
        assert_eq!(v.build, None);

        let v = Version::from_str("21.0.7-ea").unwrap();
        assert_eq!(v.components, vec![21, 0, 7]);
        assert_eq!(v.pre_release, Some("ea".to_string()));

        // GraalVM: '+' before '-' keeps the whole tail as pre-release
        let v = Version::from_str("21.0.5+11-jvmci-24.1-b01").unwrap();
        assert_eq!(v.build, None);
        assert_eq!(v.pre_release, Some("11-jvmci-24.1-b01".to_string()));

        // '-' before '+'
        let v = Version::from_str("21.0.5-ea+11").unwrap();
        assert_eq!(v.pre_release, Some("ea+11".to_string()));
    }

    #[test]
    fn test_invalid_formats() {
        assert!(Version::from_str("").is_err());
        assert!(Version::from_str("abc").is_err());
        assert!(Version::from_str("21.x.0").is_err());
        assert!(Version::from_str("21_0_7").is_err());
        assert!(Version::from_str(".21.0.7").is_err());
        assert!(Version::from_str("21.0.7.").is_err());
        assert!(Version::from_str("21..0").is_err());
        assert!(Version::from_str("21.0.7+").is_err());
        assert!(Version::from_str("21.0.7-").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::from_components(21, None, None).to_string(), "21");
        assert_eq!(Version::new(17, 0, 9).to_string(), "17.0.9");
        assert_eq!(Version::from_str("11.0.2+9").unwrap().to_string(), "11.0.2+9");
        assert_eq!(
            Version::from_str("21.0.7+9.1.3").unwrap().to_string(),
            "21.0.7+9.1.3"
        );
        assert_eq!(Version::from_str("21.0.7-ea").unwrap().to_string(), "21.0.7-ea");
    }

    #[test]
    fn test_parse_java_modern() {
        assert_eq!(Version::parse_java("21.0.2").unwrap(), Version::new(21, 0, 2));
        assert_eq!(
            Version::parse_java("\"17.0.9\"").unwrap(),
            Version::new(17, 0, 9)
        );
        assert_eq!(
            Version::parse_java("21").unwrap(),
            Version::from_components(21, None, None)
        );
        let v = Version::parse_java("22-ea").unwrap();
        assert_eq!(v.major(), 22);
        assert_eq!(v.pre_release, Some("ea".to_string()));
    }

    #[test]
    fn test_parse_java_legacy_scheme() {
        let v = Version::parse_java("1.8.0_392").unwrap();
        assert_eq!(v.components, vec![8, 0, 392]);
        assert_eq!(v.major(), 8);

        let v = Version::parse_java("1.8.0_392-b08").unwrap();
        assert_eq!(v.components, vec![8, 0, 392]);
        assert_eq!(v.build, Some(vec![8]));
        assert_eq!(v.pre_release, None);

        let v = Version::parse_java("1.7.0").unwrap();
        assert_eq!(v.components, vec![7, 0]);

        assert!(Version::parse_java("").is_err());
        assert!(Version::parse_java("unknown").is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::from_str("21").unwrap() < Version::from_str("22").unwrap());
        assert!(Version::from_str("21.0.0").unwrap() < Version::from_str("21.0.1").unwrap());
        assert!(Version::from_str("21.0.7.6").unwrap() < Version::from_str("21.0.7.6.1").unwrap());
        assert!(Version::from_str("21.0.5+9").unwrap() < Version::from_str("21.0.5+10").unwrap());
        assert!(Version::from_str("21.0.5").unwrap() < Version::from_str("21.0.5+1").unwrap());

        // Padded comparison puts 8.0.392 well below 11
        assert!(Version::from_str("8.0.392").unwrap() < Version::from_str("11").unwrap());

        // Pre-release sorts before the release it precedes
        assert!(Version::from_str("21-ea").unwrap() < Version::from_str("21").unwrap());
        assert!(Version::from_str("21-ea").unwrap() > Version::from_str("17.0.9").unwrap());

        // Same precedence, different component count stays deterministic
        assert!(Version::from_str("21").unwrap() < Version::from_str("21.0").unwrap());
        assert_ne!(
            Version::from_str("21").unwrap(),
            Version::from_str("21.0").unwrap()
        );
    }

    #[test]
    fn test_precedence_cmp() {
        let v = Version::from_str("17.0.0").unwrap();
        let bound = Version::from_str("17").unwrap();
        assert_eq!(v.precedence_cmp(&bound), Ordering::Equal);

        let v = Version::from_str("17.0.9+9").unwrap();
        assert_eq!(
            v.precedence_cmp(&Version::from_str("17.0.9").unwrap()),
            Ordering::Equal
        );
        assert_eq!(
            v.precedence_cmp(&Version::from_str("17.0.9+10").unwrap()),
            Ordering::Less
        );
        assert_eq!(
            v.precedence_cmp(&Version::from_str("17").unwrap()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_version_matching() {
        let v17_0_9 = Version::new(17, 0, 9);
        assert!(v17_0_9.matches_pattern("17"));
        assert!(v17_0_9.matches_pattern("17.0"));
        assert!(v17_0_9.matches_pattern("17.0.9"));
        assert!(!v17_0_9.matches_pattern("17.0.8"));
        assert!(!v17_0_9.matches_pattern("17.1"));

        let v21 = Version::from_components(21, None, None);
        assert!(v21.matches_pattern("21"));
        assert!(!v21.matches_pattern("21.0"));

        let v_build = Version::new(21, 0, 7).with_build("9".to_string());
        assert!(v_build.matches_pattern("21.0.7+9"));
        assert!(!v_build.matches_pattern("21.0.7+10"));

        let v_pre = Version::from_str("21.0.5-ea").unwrap();
        assert!(v_pre.matches_pattern("21.0.5-ea"));
        assert!(!v_pre.matches_pattern("21.0.5-beta"));

        assert!(!v17_0_9.matches_pattern("not-a-version"));
    }
}
