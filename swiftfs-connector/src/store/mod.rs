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

mod memory;
pub use memory::MemoryStore;

use bytes::Bytes;
use swiftfs_common::FsResult;

/// Metadata for one stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub key: String,
    pub size: i64,
    pub mtime: i64,
}

/// Narrow object-store client interface. Connections, retries, timeouts and
/// auth all live behind implementations of this trait, never above it.
#[trait_variant::make(Send)]
pub trait ObjectStore: Clone + Send + Sync + 'static {
    /// Stores `data` under `key`, replacing any existing object.
    async fn put(&self, key: &str, data: Bytes) -> FsResult<()>;

    /// Fetches the object; `FileNotFound` when the key is absent.
    async fn get(&self, key: &str) -> FsResult<Bytes>;

    /// Metadata probe; `None` when the key is absent.
    async fn head(&self, key: &str) -> FsResult<Option<ObjectMeta>>;

    /// All keys sharing `prefix`, in one fully buffered pass. Continuation
    /// or paging against the backend is an implementation detail.
    async fn list(&self, prefix: &str) -> FsResult<Vec<ObjectMeta>>;

    /// Removes the object; absent keys are not an error.
    async fn delete(&self, key: &str) -> FsResult<()>;
}
