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

use super::normalize_path;
use std::path::{Path, PathBuf};

/// Paths that must never appear in discovery results.
///
/// A path is excluded when it equals an entry or lies beneath one. Matching is
/// component-wise, so `/opt/jdk17` does not exclude `/opt/jdk17-fx`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    roots: Vec<PathBuf>,
}

impl ExclusionSet {
    /// Builds the set, normalizing every entry once.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut roots: Vec<PathBuf> = Vec::new();
        for path in paths {
            let normalized = normalize_path(path.as_ref());
            if !roots.contains(&normalized) {
                roots.push(normalized);
            }
        }
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Checks a path that is already normalized.
    pub fn contains_normalized(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root))
    }

    /// Checks `path` both as given and in normalized form.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.roots.is_empty() {
            return false;
        }
        self.contains_normalized(path) || self.contains_normalized(&normalize_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::empty();
        assert!(set.is_empty());
        assert!(!set.is_excluded(Path::new("/usr/lib/jvm")));
    }

    #[test]
    fn test_equal_and_descendant_paths_are_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let excluded = temp_dir.path().join("jdk17");
        fs::create_dir_all(excluded.join("bin")).unwrap();

        let set = ExclusionSet::new([&excluded]);
        assert!(set.is_excluded(&excluded));
        assert!(set.is_excluded(&excluded.join("bin")));
        assert!(set.is_excluded(&excluded.join("bin").join("java")));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_not_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let excluded = temp_dir.path().join("jdk17");
        let sibling = temp_dir.path().join("jdk17-fx");
        fs::create_dir_all(&excluded).unwrap();
        fs::create_dir_all(&sibling).unwrap();

        let set = ExclusionSet::new([&excluded]);
        assert!(!set.is_excluded(&sibling));
        assert!(!set.is_excluded(temp_dir.path()));
    }

    #[test]
    fn test_unnormalized_spelling_is_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let excluded = temp_dir.path().join("jdk17");
        fs::create_dir_all(excluded.join("bin")).unwrap();

        let set = ExclusionSet::new([&excluded]);
        let dotted = excluded.join("bin").join("..");
        assert!(set.is_excluded(&dotted));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_into_excluded_tree_is_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let excluded = temp_dir.path().join("jdk17");
        fs::create_dir_all(&excluded).unwrap();
        let link = temp_dir.path().join("current");
        std::os::unix::fs::symlink(&excluded, &link).unwrap();

        let set = ExclusionSet::new([&excluded]);
        assert!(set.is_excluded(&link));
    }

    #[test]
    fn test_duplicate_entries_collapse() {
        let temp_dir = TempDir::new().unwrap();
        let excluded = temp_dir.path().join("jdk17");
        fs::create_dir_all(&excluded).unwrap();

        let set = ExclusionSet::new([excluded.clone(), excluded.join(".")]);
        assert_eq!(set.roots().len(), 1);
    }
}
