// Copyright 2025 OPPO.
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

use crate::key::KeyCodec;
use crate::store::{ObjectMeta, ObjectStore};
use std::collections::BTreeMap;
use swiftfs_common::fs::Path;
use swiftfs_common::FsResult;

/// One synthesized directory-view entry: a concrete object, or a
/// pseudo-directory inferred from a shared key prefix. Never persisted;
/// rebuilt from the current key set on every listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub key: String,
    pub is_dir: bool,
    pub size: i64,
    pub mtime: i64,
}

/// Emulates directory listings over the flat key namespace.
#[derive(Clone)]
pub struct ListingEmulator<S> {
    store: S,
    codec: KeyCodec,
}

impl<S: ObjectStore> ListingEmulator<S> {
    pub fn new(store: S, codec: KeyCodec) -> Self {
        Self { store, codec }
    }

    /// Lists everything under `path`'s key prefix. Non-recursive mode emits
    /// first-level files and pseudo-directories; recursive mode emits every
    /// concrete key and no pseudo-directories. No matching keys is an empty
    /// result, not an error.
    pub async fn list(&self, path: &Path, recursive: bool) -> FsResult<Vec<DirEntry>> {
        let prefix = self.codec.to_key(path)?;
        self.list_prefix(&prefix, recursive).await
    }

    /// Same as [`list`](Self::list), for an already-resolved key prefix.
    pub async fn list_prefix(&self, prefix: &str, recursive: bool) -> FsResult<Vec<DirEntry>> {
        let objects = self.store.list(prefix).await?;
        Ok(synthesize_entries(prefix, objects, recursive))
    }
}

/// Grouping pass over a flat key set. Runs after the whole set has been
/// observed so each pseudo-directory is emitted exactly once, however many
/// keys share it; output is sorted by key, so repeated calls over an
/// unchanged key set are identical.
pub fn synthesize_entries(
    prefix: &str,
    objects: Vec<ObjectMeta>,
    recursive: bool,
) -> Vec<DirEntry> {
    if recursive {
        let mut entries: Vec<DirEntry> = objects
            .into_iter()
            .map(|meta| DirEntry {
                key: meta.key,
                is_dir: false,
                size: meta.size,
                mtime: meta.mtime,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        return entries;
    }

    let mut entries: BTreeMap<String, DirEntry> = BTreeMap::new();
    for meta in objects {
        let rest = &meta.key[prefix.len()..];
        let offset = usize::from(rest.starts_with('/'));
        match rest[offset..].find('/') {
            // Terminates within one segment of the prefix: a concrete file.
            // A file wins over a pseudo-directory inferred at the same key.
            None => {
                entries.insert(
                    meta.key.clone(),
                    DirEntry {
                        key: meta.key,
                        is_dir: false,
                        size: meta.size,
                        mtime: meta.mtime,
                    },
                );
            }
            // Extends past one segment boundary: an inferred directory.
            Some(pos) => {
                let dir_key = meta.key[..prefix.len() + offset + pos].to_string();
                entries.entry(dir_key.clone()).or_insert(DirEntry {
                    key: dir_key,
                    is_dir: true,
                    size: 0,
                    mtime: 0,
                });
            }
        }
    }
    entries.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(key: &str) -> ObjectMeta {
        ObjectMeta {
            key: key.to_string(),
            size: 8,
            mtime: 1,
        }
    }

    #[test]
    fn flat_prefix_listing() {
        let objects: Vec<ObjectMeta> = (0..3)
            .map(|i| meta(&format!("testFile0{}", i)))
            .chain((0..6).map(|i| meta(&format!("testFile1{}", i))))
            .collect();

        let all = synthesize_entries("testFile", objects.clone(), false);
        assert_eq!(all.len(), 9);
        assert!(all.iter().all(|e| !e.is_dir));

        let zeros = synthesize_entries("testFile0", objects.into_iter().filter(|m| m.key.starts_with("testFile0")).collect(), false);
        assert_eq!(zeros.len(), 3);
    }

    #[test]
    fn pseudo_directories_deduplicated() {
        let objects = vec![
            meta("data/sub1/one"),
            meta("data/sub1/two"),
            meta("data/sub1/deep/three"),
            meta("data/sub2/four"),
            meta("data/top"),
        ];

        let entries = synthesize_entries("data", objects, false);
        let keys: Vec<(&str, bool)> = entries.iter().map(|e| (e.key.as_str(), e.is_dir)).collect();
        assert_eq!(
            keys,
            vec![("data/sub1", true), ("data/sub2", true), ("data/top", false)]
        );
    }

    #[test]
    fn recursive_emits_concrete_keys_only() {
        let objects = vec![
            meta("data/sub1/one"),
            meta("data/sub1/deep/three"),
            meta("data/top"),
        ];

        let entries = synthesize_entries("data", objects, true);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| !e.is_dir));
        assert_eq!(entries[0].key, "data/sub1/deep/three");
    }

    #[test]
    fn empty_key_set_is_empty_listing() {
        assert!(synthesize_entries("missing", Vec::new(), false).is_empty());
        assert!(synthesize_entries("missing", Vec::new(), true).is_empty());
    }

    #[test]
    fn exact_key_is_a_file_entry() {
        let entries = synthesize_entries("data/top", vec![meta("data/top")], false);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].size, 8);
    }

    #[test]
    fn idempotent_over_unchanged_keys() {
        let objects = vec![meta("d/a/x"), meta("d/a/y"), meta("d/b")];
        let first = synthesize_entries("d", objects.clone(), false);
        let second = synthesize_entries("d", objects, false);
        assert_eq!(first, second);
    }

    #[test]
    fn root_prefix_lists_top_level() {
        let objects = vec![meta("alpha"), meta("dir/nested")];
        let entries = synthesize_entries("", objects, false);
        let keys: Vec<(&str, bool)> = entries.iter().map(|e| (e.key.as_str(), e.is_dir)).collect();
        assert_eq!(keys, vec![("alpha", false), ("dir", true)]);
    }
}
