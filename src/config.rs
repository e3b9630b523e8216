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
use crate::platform::path_separator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HOME_ENV_VAR: &str = "JDKSCOUT_HOME";
const ENV_PREFIX: &str = "JDKSCOUT";
const DEFAULT_HOME_DIR_NAME: &str = ".jdkscout";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoutConfig {
    #[serde(skip)]
    home: PathBuf,

    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Paths supplied to every discovery pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Paths never reported, together with everything beneath them.
    #[serde(default)]
    pub excluded_paths: Vec<PathBuf>,

    /// Extra directories whose immediate children are scanned for JDKs.
    #[serde(default)]
    pub scan_paths: Vec<PathBuf>,

    /// JDK installations (or launchers) probed directly.
    #[serde(default)]
    pub jdk_paths: Vec<PathBuf>,
}

/// Resolves the jdkscout home directory.
///
/// `JDKSCOUT_HOME` wins when it holds an absolute path; otherwise `~/.jdkscout`.
pub fn resolve_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        let path = PathBuf::from(home);
        if path.is_absolute() {
            return Ok(path);
        }
        log::warn!(
            "Ignoring {HOME_ENV_VAR}={} because it is not an absolute path",
            path.display()
        );
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR_NAME))
        .ok_or(JdkScoutError::HomeDirectoryNotFound)
}

/// Loads the configuration from the default home directory.
pub fn new_scout_config() -> Result<ScoutConfig> {
    let home = resolve_home()?;
    ScoutConfig::load(&home)
}

impl ScoutConfig {
    /// An empty configuration anchored at `home`.
    pub fn new(home: PathBuf) -> Self {
        Self {
            home,
            discovery: DiscoveryConfig::default(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }

    /// Loads `config.toml` from `home`, then applies `JDKSCOUT_*` environment overrides.
    ///
    /// List values in the environment are separated by the platform path
    /// separator, e.g. `JDKSCOUT_DISCOVERY__EXCLUDED_PATHS=/opt/a:/opt/b`.
    /// Relative paths resolve against `home`, the directory holding the file.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        let list_separator = path_separator().to_string();

        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(
                config::File::from(config_path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(&list_separator)
                    .with_list_parse_key("discovery.excluded_paths")
                    .with_list_parse_key("discovery.scan_paths")
                    .with_list_parse_key("discovery.jdk_paths")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ScoutConfig = settings.try_deserialize()?;
        config.home = home.to_path_buf();
        config.discovery.resolve_against(home);

        log::debug!(
            "Discovery config: {} excluded, {} scan paths, {} manual JDKs",
            config.discovery.excluded_paths.len(),
            config.discovery.scan_paths.len(),
            config.discovery.jdk_paths.len()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JdkScoutError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }
}

impl DiscoveryConfig {
    fn resolve_against(&mut self, base: &Path) {
        for list in [
            &mut self.excluded_paths,
            &mut self.scan_paths,
            &mut self.jdk_paths,
        ] {
            list.retain(|p| !p.as_os_str().is_empty());
            for path in list.iter_mut() {
                *path = resolve_configured_path(path, base);
            }
        }
    }
}

/// Expands a leading `~` and anchors relative paths at `base`.
pub fn resolve_configured_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
