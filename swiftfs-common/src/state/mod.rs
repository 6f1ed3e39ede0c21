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

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FileType {
    #[default]
    File,
    Dir,
}

/// Status record surfaced to callers. Directory entries are synthesized from
/// the key namespace, so `mtime` and `len` are zero for pseudo-directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FileStatus {
    pub path: String,
    pub name: String,
    pub is_dir: bool,
    pub len: i64,
    pub mtime: i64,
    pub file_type: FileType,
}

impl FileStatus {
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}
