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

/// Rewrites distributed-job staging paths into their committed location.
///
/// A staged part file lives under
/// `<base>/<marker>/<ordinal>/<marker>/<attemptId>/<fileName>`; its committed
/// object is `<base>/<fileName>-<attemptId>`. The attempt id suffix keeps
/// retried and speculative attempts from colliding before job commit.
#[derive(Debug, Clone)]
pub struct StagingResolver {
    marker: String,
    enabled: bool,
}

impl StagingResolver {
    pub fn new(conf: &SwiftConf) -> Self {
        Self {
            marker: conf.staging_marker.clone(),
            enabled: conf.staging_rewrite,
        }
    }

    /// Returns the rooted final path for a staged path, `None` for ordinary
    /// paths. The marker must occupy a whole segment: a segment (or the
    /// authority) that merely contains the marker text is rejected with
    /// `InvalidTempPath` instead of being silently treated as ordinary, so a
    /// broken commit layout never masquerades as user data.
    pub fn resolve(&self, path: &Path) -> FsResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }

        let marker = self.marker.as_str();
        let segments = path.components();

        let idx = match segments.iter().position(|s| *s == marker) {
            Some(idx) => idx,
            None => {
                let substring_hit = path
                    .authority()
                    .map(|a| a.contains(marker))
                    .unwrap_or(false)
                    || segments.iter().any(|s| s.contains(marker));
                if substring_hit {
                    return Err(FsError::invalid_temp_path(
                        path.full_path(),
                        format!("marker '{}' must be a whole path segment", marker),
                    ));
                }
                return Ok(None);
            }
        };

        // Shape: <base>/<marker>/<ordinal>/<marker>/<attemptId>/<fileName>
        if segments.len() != idx + 5 {
            return Err(FsError::invalid_temp_path(
                path.full_path(),
                format!(
                    "staging tree must end with {m}/<ordinal>/{m}/<attempt>/<file>",
                    m = marker
                ),
            ));
        }
        if segments[idx + 2] != marker {
            return Err(FsError::invalid_temp_path(
                path.full_path(),
                "missing second marker level",
            ));
        }

        let attempt = segments[idx + 3];
        let file_name = segments[idx + 4];

        let mut resolved = String::new();
        for seg in &segments[..idx] {
            resolved.push('/');
            resolved.push_str(seg);
        }
        resolved.push('/');
        resolved.push_str(file_name);
        resolved.push('-');
        resolved.push_str(attempt);

        Ok(Some(resolved))
    }
}
