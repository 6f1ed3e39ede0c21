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

use crate::conf::SwiftConf;
use crate::key::KeyCodec;
use crate::listing::ListingEmulator;
use crate::staging::StagingResolver;
use crate::store::{ObjectMeta, ObjectStore};
use crate::swift::{SwiftReader, SwiftWriter, SCHEME};
use crate::FOLDER_SUFFIX;
use log::{debug, warn};
use std::collections::HashMap;
use swiftfs_common::error::FsError;
use swiftfs_common::fs::{FileSystem, Path};
use swiftfs_common::state::{FileStatus, FileType};
use swiftfs_common::FsResult;

/// Hadoop-style filesystem over a flat object store.
///
/// Holds no mutable state beyond the identity/marker configuration captured
/// at construction, so clones may be used concurrently across paths. Every
/// operation is one idempotent computation plus store IO.
#[derive(Clone)]
pub struct SwiftFileSystem<S> {
    store: S,
    conf: SwiftConf,
    codec: KeyCodec,
    resolver: StagingResolver,
    lister: ListingEmulator<S>,
}

impl<S: ObjectStore> SwiftFileSystem<S> {
    pub fn new(path: &Path, conf: &HashMap<String, String>, store: S) -> FsResult<Self> {
        match path.scheme() {
            Some(SCHEME) => {}
            Some(other) => {
                return Err(FsError::invalid_path(
                    path.full_path(),
                    format!("Expected scheme '{}', got '{}'", SCHEME, other),
                ));
            }
            None => {
                return Err(FsError::invalid_path(path.full_path(), "Missing scheme"));
            }
        }

        let conf = SwiftConf::with_map(path, conf)?;
        let codec = KeyCodec::new(&conf);
        let resolver = StagingResolver::new(&conf);
        let lister = ListingEmulator::new(store.clone(), codec.clone());

        Ok(Self {
            store,
            conf,
            codec,
            resolver,
            lister,
        })
    }

    pub fn conf(&self) -> &SwiftConf {
        &self.conf
    }

    /// Key a write-side operation targets: staged paths are rewritten to
    /// their committed object, everything else maps directly.
    fn write_key(&self, path: &Path) -> FsResult<String> {
        match self.resolver.resolve(path)? {
            Some(resolved) => Ok(resolved.trim_start_matches('/').to_string()),
            None => self.codec.to_key(path),
        }
    }

    fn file_status(&self, key: &str, size: i64, mtime: i64) -> FsResult<FileStatus> {
        let path = self.codec.to_path(key)?;
        Ok(FileStatus {
            path: path.full_path().to_string(),
            name: path.name().to_string(),
            is_dir: false,
            len: size,
            mtime,
            file_type: FileType::File,
        })
    }

    fn dir_status(&self, key: &str) -> FsResult<FileStatus> {
        let path = self.codec.to_path(key)?;
        Ok(FileStatus {
            path: path.full_path().to_string(),
            name: path.name().to_string(),
            is_dir: true,
            len: 0,
            mtime: 0,
            file_type: FileType::Dir,
        })
    }

    fn meta_status(&self, meta: &ObjectMeta) -> FsResult<FileStatus> {
        self.file_status(&meta.key, meta.size, meta.mtime)
    }

    // "<key>/" for non-root keys; the root's children share the empty prefix.
    fn child_prefix(key: &str) -> String {
        if key.is_empty() {
            String::new()
        } else {
            format!("{}{}", key, FOLDER_SUFFIX)
        }
    }

    /// Status for an already-resolved key: a concrete object wins, otherwise
    /// any key below it makes it a pseudo-directory, otherwise nothing.
    async fn status_for_key(&self, key: &str) -> FsResult<Option<FileStatus>> {
        if let Some(meta) = self.store.head(key).await? {
            return Ok(Some(self.meta_status(&meta)?));
        }

        let children = self.store.list(&Self::child_prefix(key)).await?;
        if !children.is_empty() {
            return Ok(Some(self.dir_status(key)?));
        }

        Ok(None)
    }
}

impl<S: ObjectStore> FileSystem<SwiftWriter<S>, SwiftReader<S>> for SwiftFileSystem<S> {
    // Directories are implied by the keys below them; nothing to materialize.
    async fn mkdir(&self, path: &Path, _create_parent: bool) -> FsResult<bool> {
        let key = self.codec.to_key(path)?;
        debug!("mkdir is a noop over a flat namespace, key '{}'", key);
        Ok(true)
    }

    async fn create(&self, path: &Path, overwrite: bool) -> FsResult<SwiftWriter<S>> {
        let key = self.write_key(path)?;

        if !overwrite && self.store.head(&key).await?.is_some() {
            return Err(FsError::file_already_exists(path.full_path()));
        }

        Ok(SwiftWriter::new(self.store.clone(), path.clone(), key))
    }

    async fn append(&self, path: &Path) -> FsResult<SwiftWriter<S>> {
        Err(FsError::unsupported(format!(
            "append is not supported for {}",
            path.full_path()
        )))
    }

    async fn exists(&self, path: &Path) -> FsResult<bool> {
        let key = self.write_key(path)?;
        Ok(self.status_for_key(&key).await?.is_some())
    }

    async fn open(&self, path: &Path) -> FsResult<SwiftReader<S>> {
        // Reads target final objects; no staging rewrite on this side.
        let key = self.codec.to_key(path)?;

        let meta = match self.store.head(&key).await? {
            Some(meta) => meta,
            None => return Err(FsError::file_not_found(path.full_path())),
        };

        let status = self.meta_status(&meta)?;
        Ok(SwiftReader::new(self.store.clone(), path.clone(), key, status))
    }

    // The store has no native rename: copy the object, then drop the source.
    async fn rename(&self, src: &Path, dst: &Path) -> FsResult<bool> {
        let src_key = self.codec.to_key(src)?;
        let dst_key = self.write_key(dst)?;

        if self.store.head(&src_key).await?.is_none() {
            let children = self.store.list(&Self::child_prefix(&src_key)).await?;
            if !children.is_empty() {
                return Err(FsError::unsupported(format!(
                    "rename of pseudo-directory {} is not supported",
                    src.full_path()
                )));
            }
            warn!("rename source {} does not exist", src);
            return Ok(false);
        }

        let data = self.store.get(&src_key).await?;
        self.store.put(&dst_key, data).await?;
        self.store.delete(&src_key).await?;
        Ok(true)
    }

    async fn delete(&self, path: &Path, recursive: bool) -> FsResult<bool> {
        let key = self.write_key(path)?;

        let children = self
            .lister
            .list_prefix(&Self::child_prefix(&key), true)
            .await?;
        if !children.is_empty() && !recursive {
            return Err(FsError::dir_not_empty(path.full_path()));
        }

        let mut deleted = false;
        if self.store.head(&key).await?.is_some() {
            self.store.delete(&key).await?;
            deleted = true;
        }
        for entry in &children {
            self.store.delete(&entry.key).await?;
            deleted = true;
        }

        if !deleted {
            debug!("delete: nothing under '{}'", key);
        }
        Ok(deleted)
    }

    async fn get_status(&self, path: &Path) -> FsResult<FileStatus> {
        let key = self.write_key(path)?;
        match self.status_for_key(&key).await? {
            Some(status) => Ok(status),
            None => Err(FsError::file_not_found(path.full_path())),
        }
    }

    async fn list_status(&self, path: &Path) -> FsResult<Vec<FileStatus>> {
        let entries = self.lister.list(path, false).await?;

        let mut statuses = Vec::with_capacity(entries.len());
        for entry in entries {
            let status = if entry.is_dir {
                self.dir_status(&entry.key)?
            } else {
                self.file_status(&entry.key, entry.size, entry.mtime)?
            };
            statuses.push(status);
        }
        Ok(statuses)
    }
}
