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

/// Filesystem error taxonomy. Every operation surfaces these immediately;
/// store-transport failures pass through as `Common` without reinterpretation.
#[derive(thiserror::Error, Debug)]
pub enum FsError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid temporary path: {0}")]
    InvalidTempPath(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file already exists: {0}")]
    FileAlreadyExists(String),

    #[error("directory not empty: {0}")]
    DirNotEmpty(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Common(String),

    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

impl FsError {
    pub fn invalid_path(path: impl AsRef<str>, msg: impl AsRef<str>) -> Self {
        Self::InvalidPath(format!("{}: {}", path.as_ref(), msg.as_ref()))
    }

    pub fn invalid_temp_path(path: impl AsRef<str>, msg: impl AsRef<str>) -> Self {
        Self::InvalidTempPath(format!("{}: {}", path.as_ref(), msg.as_ref()))
    }

    pub fn file_not_found(path: impl AsRef<str>) -> Self {
        Self::FileNotFound(path.as_ref().to_string())
    }

    pub fn file_already_exists(path: impl AsRef<str>) -> Self {
        Self::FileAlreadyExists(path.as_ref().to_string())
    }

    pub fn dir_not_empty(path: impl AsRef<str>) -> Self {
        Self::DirNotEmpty(path.as_ref().to_string())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn common(msg: impl Into<String>) -> Self {
        Self::Common(msg.into())
    }
}
