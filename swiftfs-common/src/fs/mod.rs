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

mod path;
pub use path::{Path, PATH_SEPARATOR};

use crate::state::FileStatus;
use crate::FsResult;

/// Hadoop-style filesystem surface. Implementations are value types safe for
/// concurrent use; every call is an independent computation plus store IO.
#[trait_variant::make(Send)]
pub trait FileSystem<W, R>
where
    W: Writer,
    R: Reader,
{
    async fn mkdir(&self, path: &Path, create_parent: bool) -> FsResult<bool>;

    async fn create(&self, path: &Path, overwrite: bool) -> FsResult<W>;

    async fn append(&self, path: &Path) -> FsResult<W>;

    async fn exists(&self, path: &Path) -> FsResult<bool>;

    async fn open(&self, path: &Path) -> FsResult<R>;

    async fn rename(&self, src: &Path, dst: &Path) -> FsResult<bool>;

    /// Returns whether anything was removed.
    async fn delete(&self, path: &Path, recursive: bool) -> FsResult<bool>;

    async fn get_status(&self, path: &Path) -> FsResult<FileStatus>;

    async fn list_status(&self, path: &Path) -> FsResult<Vec<FileStatus>>;
}

/// Sequential reader over one file.
#[trait_variant::make(Send)]
pub trait Reader {
    fn status(&self) -> &FileStatus;

    fn path(&self) -> &Path;

    fn len(&self) -> i64;

    fn pos(&self) -> i64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_remaining(&self) -> bool {
        self.pos() < self.len()
    }

    /// Reads up to `buf.len()` bytes at the current position; 0 at EOF.
    async fn read(&mut self, buf: &mut [u8]) -> FsResult<usize>;

    async fn seek(&mut self, pos: i64) -> FsResult<()>;

    async fn complete(&mut self) -> FsResult<()>;
}

/// Sequential writer for one file; data becomes visible on `complete`.
#[trait_variant::make(Send)]
pub trait Writer {
    fn status(&self) -> &FileStatus;

    fn path(&self) -> &Path;

    fn pos(&self) -> i64;

    async fn write(&mut self, chunk: &[u8]) -> FsResult<()>;

    async fn flush(&mut self) -> FsResult<()>;

    async fn complete(&mut self) -> FsResult<()>;

    async fn cancel(&mut self) -> FsResult<()>;
}
