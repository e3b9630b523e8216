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

use crate::config::ScoutConfig;
use crate::discovery::Discovery;
use crate::error::Result;
use colored::*;
use std::path::Path;

pub struct PathsCommand<'a> {
    config: &'a ScoutConfig,
}

impl<'a> PathsCommand<'a> {
    pub fn new(config: &'a ScoutConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Prints the directories a discovery pass would scan, in order.
    pub fn execute(&self) -> Result<()> {
        let discovery = Discovery::new(self.config.discovery.clone());

        println!("Candidate directories ({}):", discovery.os());
        for dir in discovery.current_candidate_directories() {
            println!("  {}", describe(&dir));
        }

        let discovery_config = discovery.config();
        if !discovery_config.jdk_paths.is_empty() {
            println!();
            println!("Configured JDKs:");
            for path in &discovery_config.jdk_paths {
                println!("  {}", describe(path));
            }
        }

        if !discovery_config.excluded_paths.is_empty() {
            println!();
            println!("Excluded:");
            for path in &discovery_config.excluded_paths {
                println!("  {} {}", "-".yellow(), path.display());
            }
        }
        Ok(())
    }
}

fn describe(path: &Path) -> String {
    if path.exists() {
        format!("{} {}", "✓".green(), path.display())
    } else {
        format!("{} {} {}", "✗".red(), path.display(), "(missing)".dimmed())
    }
}
