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

use std::collections::HashMap;
use swiftfs_common::error::FsError;
use swiftfs_common::fs::Path;
use swiftfs_common::FsResult;

/// Connector configuration. Values only; how they are loaded is the caller's
/// concern. The filesystem identity (scheme and container) comes from the
/// path the filesystem is constructed with and stays immutable afterwards.
#[derive(Debug, Clone)]
pub struct SwiftConf {
    pub scheme: String,
    pub container: String,
    pub staging_marker: String,
    pub staging_rewrite: bool,
}

impl SwiftConf {
    pub const STAGING_MARKER: &'static str = "swift.staging.marker";
    pub const STAGING_REWRITE: &'static str = "swift.staging.rewrite";

    pub const DEFAULT_STAGING_MARKER: &'static str = "_temporary";

    pub fn with_map(path: &Path, conf: &HashMap<String, String>) -> FsResult<Self> {
        let scheme = path
            .scheme()
            .ok_or_else(|| FsError::invalid_path(path.full_path(), "Missing scheme"))?;

        let container = path
            .authority()
            .ok_or_else(|| FsError::invalid_path(path.full_path(), "URI missing container name"))?;

        let staging_marker = conf
            .get(Self::STAGING_MARKER)
            .cloned()
            .unwrap_or_else(|| Self::DEFAULT_STAGING_MARKER.to_string());

        let staging_rewrite = conf
            .get(Self::STAGING_REWRITE)
            .map(|v| v == "true")
            .unwrap_or(true);

        Ok(Self {
            scheme: scheme.to_string(),
            container: container.to_string(),
            staging_marker,
            staging_rewrite,
        })
    }

    /// The `scheme://container` identity prefix.
    pub fn host_name(&self) -> String {
        format!("{}://{}", self.scheme, self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let path = Path::new("swift2d://out1003.lvm/").unwrap();
        let conf = SwiftConf::with_map(&path, &HashMap::new()).unwrap();

        assert_eq!(conf.scheme, "swift2d");
        assert_eq!(conf.container, "out1003.lvm");
        assert_eq!(conf.staging_marker, "_temporary");
        assert!(conf.staging_rewrite);
        assert_eq!(conf.host_name(), "swift2d://out1003.lvm");
    }

    #[test]
    fn overrides() {
        let path = Path::new("swift2d://c/").unwrap();
        let mut map = HashMap::new();
        map.insert(SwiftConf::STAGING_MARKER.to_string(), "_staging".to_string());
        map.insert(SwiftConf::STAGING_REWRITE.to_string(), "false".to_string());

        let conf = SwiftConf::with_map(&path, &map).unwrap();
        assert_eq!(conf.staging_marker, "_staging");
        assert!(!conf.staging_rewrite);
    }

    #[test]
    fn missing_scheme_rejected() {
        let path = Path::new("/a/b").unwrap();
        assert!(SwiftConf::with_map(&path, &HashMap::new()).is_err());
    }
}
