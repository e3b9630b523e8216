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

use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a JDK was first seen during a discovery pass.
///
/// Variants are declared in priority order: when two sources report the same
/// installation, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverySource {
    JavaHome,
    JdkHome,
    PathLookup,
    CommonDirectory,
    Configured,
}

impl DiscoverySource {
    pub fn label(self) -> &'static str {
        match self {
            DiscoverySource::JavaHome => "JAVA_HOME",
            DiscoverySource::JdkHome => "JDK_HOME",
            DiscoverySource::PathLookup => "PATH",
            DiscoverySource::CommonDirectory => "scan",
            DiscoverySource::Configured => "config",
        }
    }
}

impl fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered JDK installation.
///
/// `path` is the installation root that owns `bin/`, never the launcher itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdkDescriptor {
    pub path: PathBuf,
    pub name: String,
    pub version: Version,
    pub brand: Option<String>,
    pub source: DiscoverySource,
}

impl JdkDescriptor {
    pub fn new(path: PathBuf, name: String, version: Version, source: DiscoverySource) -> Self {
        Self {
            path,
            name,
            version,
            brand: None,
            source,
        }
    }

    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand.filter(|b| !b.trim().is_empty());
        self
    }

    /// Returns a copy that points at `path`, keeping every other field.
    pub fn relocated(&self, path: PathBuf) -> Self {
        Self {
            path,
            ..self.clone()
        }
    }

    /// The launcher under `bin/` of this installation.
    pub fn java_executable(&self) -> PathBuf {
        self.path
            .join("bin")
            .join(crate::platform::with_executable_extension("java"))
    }
}

impl fmt::Display for JdkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)?;
        if let Some(brand) = &self.brand {
            write!(f, " [{brand}]")?;
        }
        write!(f, " at {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::str::FromStr;

    fn descriptor() -> JdkDescriptor {
        JdkDescriptor::new(
            PathBuf::from("/usr/lib/jvm/temurin-21"),
            "temurin-21".to_string(),
            Version::from_str("21.0.2").unwrap(),
            DiscoverySource::CommonDirectory,
        )
    }

    #[test]
    fn test_source_priority_order() {
        assert!(DiscoverySource::JavaHome < DiscoverySource::JdkHome);
        assert!(DiscoverySource::JdkHome < DiscoverySource::PathLookup);
        assert!(DiscoverySource::PathLookup < DiscoverySource::CommonDirectory);
        assert!(DiscoverySource::CommonDirectory < DiscoverySource::Configured);
    }

    #[test]
    fn test_blank_brand_is_dropped() {
        let jdk = descriptor().with_brand(Some("  ".to_string()));
        assert_eq!(jdk.brand, None);

        let jdk = descriptor().with_brand(Some("Eclipse Adoptium".to_string()));
        assert_eq!(jdk.brand.as_deref(), Some("Eclipse Adoptium"));
    }

    #[test]
    fn test_relocated_keeps_metadata() {
        let jdk = descriptor().with_brand(Some("Eclipse Adoptium".to_string()));
        let moved = jdk.relocated(PathBuf::from("/opt/jdk21"));

        assert_eq!(moved.path, PathBuf::from("/opt/jdk21"));
        assert_eq!(moved.name, jdk.name);
        assert_eq!(moved.version, jdk.version);
        assert_eq!(moved.brand, jdk.brand);
        assert_eq!(moved.source, jdk.source);
    }

    #[test]
    fn test_java_executable_is_under_bin() {
        let launcher = descriptor().java_executable();
        assert_eq!(launcher.parent(), Some(Path::new("/usr/lib/jvm/temurin-21/bin")));
        assert!(launcher.file_stem().is_some_and(|stem| stem == "java"));
    }

    #[test]
    fn test_display() {
        let jdk = descriptor().with_brand(Some("Eclipse Adoptium".to_string()));
        assert_eq!(
            jdk.to_string(),
            "temurin-21 (21.0.2) [Eclipse Adoptium] at /usr/lib/jvm/temurin-21"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(json["name"], "temurin-21");
        assert_eq!(json["version"]["components"][0], 21);
        assert!(json["brand"].is_null());
        assert_eq!(json["source"], "common_directory");
    }
}
