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

use crate::store::ObjectStore;
use bytes::Bytes;
use swiftfs_common::error::FsError;
use swiftfs_common::fs::{Path, Reader};
use swiftfs_common::state::FileStatus;
use swiftfs_common::FsResult;

/// Reads one object. The body is fetched from the store on the first read
/// and held until `complete`; seeks reposition within the fetched body.
pub struct SwiftReader<S> {
    store: S,
    path: Path,
    key: String,
    status: FileStatus,
    pos: i64,
    data: Option<Bytes>,
}

impl<S: ObjectStore> SwiftReader<S> {
    pub(crate) fn new(store: S, path: Path, key: String, status: FileStatus) -> Self {
        Self {
            store,
            path,
            key,
            status,
            pos: 0,
            data: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: ObjectStore> Reader for SwiftReader<S> {
    fn status(&self) -> &FileStatus {
        &self.status
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn len(&self) -> i64 {
        self.status.len
    }

    fn pos(&self) -> i64 {
        self.pos
    }

    async fn read(&mut self, buf: &mut [u8]) -> FsResult<usize> {
        if !self.has_remaining() || buf.is_empty() {
            return Ok(0);
        }

        let data = match self.data.as_ref() {
            Some(data) => data.clone(),
            None => {
                let fetched = self.store.get(&self.key).await?;
                self.data.get_or_insert(fetched).clone()
            }
        };

        let start = (self.pos.min(data.len() as i64)).max(0) as usize;
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        self.pos += n as i64;
        Ok(n)
    }

    async fn seek(&mut self, pos: i64) -> FsResult<()> {
        if pos < 0 {
            return Err(FsError::common("invalid seek position"));
        }

        // Seeking past EOF behaves as EOF instead of an error.
        self.pos = pos.min(self.len());
        Ok(())
    }

    async fn complete(&mut self) -> FsResult<()> {
        self.data = None;
        Ok(())
    }
}
