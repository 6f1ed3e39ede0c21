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
use swiftfs_common::error::FsError;
use swiftfs_common::fs::Path;
use swiftfs_common::FsResult;

/// Converts between hierarchical paths and flat object keys for one
/// configured filesystem identity. Keys carry no leading separator.
#[derive(Debug, Clone)]
pub struct KeyCodec {
    scheme: String,
    container: String,
}

impl KeyCodec {
    pub fn new(conf: &SwiftConf) -> Self {
        Self {
            scheme: conf.scheme.clone(),
            container: conf.container.clone(),
        }
    }

    /// Strips the scheme/container identity, leaving the `/`-joined segment
    /// sequence. Fails with `InvalidPath` when the path belongs to a
    /// different filesystem.
    pub fn to_key(&self, path: &Path) -> FsResult<String> {
        match (path.scheme(), path.authority()) {
            (Some(scheme), Some(authority))
                if scheme == self.scheme && authority == self.container => {}
            _ => {
                return Err(FsError::invalid_path(
                    path.full_path(),
                    format!("expected identity {}://{}", self.scheme, self.container),
                ));
            }
        }

        Ok(path.path().trim_start_matches('/').to_string())
    }

    /// Inverse of [`to_key`](Self::to_key): re-prepends the identity.
    pub fn to_path(&self, key: &str) -> FsResult<Path> {
        let key = key.trim_start_matches('/');
        Path::new(format!("{}://{}/{}", self.scheme, self.container, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn codec() -> KeyCodec {
        let root = Path::new("swift2d://out1003.lvm/").unwrap();
        let conf = SwiftConf::with_map(&root, &HashMap::new()).unwrap();
        KeyCodec::new(&conf)
    }

    #[test]
    fn round_trip() {
        let codec = codec();
        for raw in [
            "swift2d://out1003.lvm/a/b/c/m.data",
            "swift2d://out1003.lvm/testFile",
            "swift2d://out1003.lvm/",
        ] {
            let path = Path::new(raw).unwrap();
            let key = codec.to_key(&path).unwrap();
            assert_eq!(codec.to_path(&key).unwrap(), path);
        }
    }

    #[test]
    fn key_has_no_leading_separator() {
        let codec = codec();
        let path = Path::new("swift2d://out1003.lvm/a/b").unwrap();
        assert_eq!(codec.to_key(&path).unwrap(), "a/b");
        assert_eq!(codec.to_key(&Path::new("swift2d://out1003.lvm/").unwrap()).unwrap(), "");
    }

    #[test]
    fn identity_mismatch_rejected() {
        let codec = codec();

        let wrong_container = Path::new("swift2d://other/a").unwrap();
        assert!(matches!(
            codec.to_key(&wrong_container),
            Err(FsError::InvalidPath(_))
        ));

        let wrong_scheme = Path::new("s3://out1003.lvm/a").unwrap();
        assert!(matches!(
            codec.to_key(&wrong_scheme),
            Err(FsError::InvalidPath(_))
        ));

        let bare = Path::new("/a/b").unwrap();
        assert!(codec.to_key(&bare).is_err());
    }
}
