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

use super::{ObjectMeta, ObjectStore};
use bytes::Bytes;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use swiftfs_common::error::FsError;
use swiftfs_common::FsResult;

#[derive(Debug, Clone)]
struct MemoryObject {
    data: Bytes,
    mtime: i64,
}

/// In-memory object store; the backend for tests and local runs. Keys are
/// kept sorted so listings are deterministic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<Mutex<BTreeMap<String, MemoryObject>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw key check, bypassing any path translation. Test hook.
    pub fn contains_key(&self, key: &str) -> bool {
        self.objects
            .lock()
            .map(|m| m.contains_key(key))
            .unwrap_or(false)
    }

    fn lock(&self) -> FsResult<MutexGuard<'_, BTreeMap<String, MemoryObject>>> {
        self.objects
            .lock()
            .map_err(|_| FsError::common("memory store lock poisoned"))
    }
}

impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, data: Bytes) -> FsResult<()> {
        let mut objects = self.lock()?;
        objects.insert(
            key.to_string(),
            MemoryObject {
                data,
                mtime: Utc::now().timestamp_millis(),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> FsResult<Bytes> {
        let objects = self.lock()?;
        match objects.get(key) {
            Some(obj) => Ok(obj.data.clone()),
            None => Err(FsError::file_not_found(key)),
        }
    }

    async fn head(&self, key: &str) -> FsResult<Option<ObjectMeta>> {
        let objects = self.lock()?;
        Ok(objects.get(key).map(|obj| ObjectMeta {
            key: key.to_string(),
            size: obj.data.len() as i64,
            mtime: obj.mtime,
        }))
    }

    async fn list(&self, prefix: &str) -> FsResult<Vec<ObjectMeta>> {
        let objects = self.lock()?;
        Ok(objects
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, obj)| ObjectMeta {
                key: k.clone(),
                size: obj.data.len() as i64,
                mtime: obj.mtime,
            })
            .collect())
    }

    async fn delete(&self, key: &str) -> FsResult<()> {
        let mut objects = self.lock()?;
        objects.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_head_delete() {
        let store = MemoryStore::new();
        store.put("a/b", Bytes::from_static(b"data")).await.unwrap();

        let meta = store.head("a/b").await.unwrap().unwrap();
        assert_eq!(meta.size, 4);
        assert!(meta.mtime > 0);
        assert_eq!(store.get("a/b").await.unwrap(), Bytes::from_static(b"data"));

        store.delete("a/b").await.unwrap();
        assert!(store.head("a/b").await.unwrap().is_none());
        assert!(store.get("a/b").await.is_err());

        // Deleting an absent key is not an error.
        store.delete("a/b").await.unwrap();
    }

    #[tokio::test]
    async fn list_by_prefix() {
        let store = MemoryStore::new();
        for key in ["a/1", "a/2", "ab", "b/1"] {
            store.put(key, Bytes::new()).await.unwrap();
        }

        let keys: Vec<String> = store
            .list("a")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.key)
            .collect();
        assert_eq!(keys, vec!["a/1", "a/2", "ab"]);

        assert!(store.list("zzz").await.unwrap().is_empty());
    }
}
