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

//! Runs discovery against the real machine. Results depend on what is
//! installed, so only structural properties are checked.

use jdkscout::config::DiscoveryConfig;
use jdkscout::discovery::Discovery;
use jdkscout::registry::JdkRegistry;
use std::collections::HashSet;

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_host_discovery_is_consistent() {
    let registry = JdkRegistry::new(Discovery::new(DiscoveryConfig::default()));
    let first = registry.refresh();
    let second = registry.refresh();

    let unique: HashSet<_> = first.iter().map(|jdk| &jdk.path).collect();
    assert_eq!(unique.len(), first.len());
    assert!(first.iter().all(|jdk| jdk.path.is_absolute()));
    assert!(first.iter().all(|jdk| jdk.java_executable().exists()));

    let first_paths: HashSet<_> = first.iter().map(|jdk| jdk.path.clone()).collect();
    let second_paths: HashSet<_> = second.iter().map(|jdk| jdk.path.clone()).collect();
    assert_eq!(first_paths, second_paths);

    for jdk in first.iter() {
        println!("{jdk} via {}", jdk.source);
    }
}
