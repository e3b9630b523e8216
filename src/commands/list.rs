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

use crate::commands::registry_for;
use crate::config::ScoutConfig;
use crate::error::Result;
use crate::models::JdkDescriptor;
use crate::registry::{JdkRegistry, validate_pattern};
use crate::version::VersionRange;
use comfy_table::{Cell, Table};
use log::debug;

pub struct ListCommand<'a> {
    config: &'a ScoutConfig,
}

impl<'a> ListCommand<'a> {
    pub fn new(config: &'a ScoutConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        min: Option<&str>,
        max: Option<&str>,
        pattern: Option<&str>,
        json: bool,
    ) -> Result<()> {
        let registry = registry_for(self.config);
        let jdks = select(&registry, min, max, pattern)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&jdks)?);
            return Ok(());
        }

        if jdks.is_empty() {
            println!("No JDKs found");
            return Ok(());
        }

        println!("{}", render_table(&jdks));
        println!(
            "{} JDK{} found",
            jdks.len(),
            if jdks.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }
}

/// Validates the filters, refreshes `registry`, and applies them.
pub fn select(
    registry: &JdkRegistry,
    min: Option<&str>,
    max: Option<&str>,
    pattern: Option<&str>,
) -> Result<Vec<JdkDescriptor>> {
    // Bad arguments fail before any filesystem work
    let range = VersionRange::parse(min, max)?;
    if let Some(pattern) = pattern {
        validate_pattern(pattern)?;
    }

    let snapshot = registry.refresh();
    debug!("Snapshot {} holds {} JDK(s)", snapshot.generation(), snapshot.len());

    registry.query(&range, pattern)
}

pub fn render_table(jdks: &[JdkDescriptor]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Version"),
        Cell::new("Brand"),
        Cell::new("Source"),
        Cell::new("Path"),
    ]);

    for jdk in jdks {
        table.add_row(vec![
            Cell::new(&jdk.name),
            Cell::new(jdk.version.to_string()),
            Cell::new(jdk.brand.as_deref().unwrap_or("-")),
            Cell::new(jdk.source.label()),
            Cell::new(jdk.path.display()),
        ]);
    }
    table
}
