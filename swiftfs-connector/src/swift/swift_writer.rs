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
use bytes::BytesMut;
use swiftfs_common::error::FsError;
use swiftfs_common::fs::{Path, Writer};
use swiftfs_common::state::{FileStatus, FileType};
use swiftfs_common::FsResult;

/// Writes one object. Data accumulates locally and is pushed to the store in
/// a single `put` on `complete`, which is where a staged write lands on its
/// committed key. A create with zero writes still materializes an empty
/// object.
pub struct SwiftWriter<S> {
    store: S,
    path: Path,
    key: String,
    status: FileStatus,
    buf: BytesMut,
    pos: i64,
    cancelled: bool,
}

impl<S: ObjectStore> SwiftWriter<S> {
    pub(crate) fn new(store: S, path: Path, key: String) -> Self {
        let status = FileStatus {
            path: path.full_path().to_string(),
            name: path.name().to_string(),
            is_dir: false,
            file_type: FileType::File,
            ..Default::default()
        };

        Self {
            store,
            path,
            key,
            status,
            buf: BytesMut::new(),
            pos: 0,
            cancelled: false,
        }
    }

    /// The object key this writer targets (after any staging rewrite).
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: ObjectStore> Writer for SwiftWriter<S> {
    fn status(&self) -> &FileStatus {
        &self.status
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn pos(&self) -> i64 {
        self.pos
    }

    async fn write(&mut self, chunk: &[u8]) -> FsResult<()> {
        if self.cancelled {
            return Err(FsError::common(format!(
                "writer for {} is cancelled",
                self.path
            )));
        }

        self.buf.extend_from_slice(chunk);
        self.pos += chunk.len() as i64;
        Ok(())
    }

    async fn flush(&mut self) -> FsResult<()> {
        // The store only accepts whole objects; data lands on complete().
        Ok(())
    }

    async fn complete(&mut self) -> FsResult<()> {
        if self.cancelled {
            return Ok(());
        }

        let data = self.buf.split().freeze();
        self.status.len = data.len() as i64;
        self.store.put(&self.key, data).await?;
        Ok(())
    }

    async fn cancel(&mut self) -> FsResult<()> {
        self.buf.clear();
        self.cancelled = true;
        Ok(())
    }
}
