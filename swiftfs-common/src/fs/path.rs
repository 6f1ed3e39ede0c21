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

use crate::error::FsError;
use crate::FsResult;
use std::fmt;

pub const PATH_SEPARATOR: char = '/';

/// A hierarchical path identifier, `scheme://authority/seg1/seg2` or a bare
/// rooted path `/seg1/seg2`. Parsed once at construction; no `..` resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    full_path: String,
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
}

impl Path {
    pub fn new(s: impl AsRef<str>) -> FsResult<Self> {
        let raw = s.as_ref().trim();
        if raw.is_empty() {
            return Err(FsError::invalid_path(raw, "empty path"));
        }

        let (scheme, rest) = match raw.split_once("://") {
            Some((sch, rest)) => {
                if sch.is_empty() {
                    return Err(FsError::invalid_path(raw, "empty scheme"));
                }
                (Some(sch.to_string()), rest)
            }
            None => (None, raw),
        };

        let (authority, path_part) = if scheme.is_some() {
            match rest.split_once(PATH_SEPARATOR) {
                Some((auth, p)) => (Some(auth.to_string()), format!("/{}", p)),
                None => (Some(rest.to_string()), "/".to_string()),
            }
        } else {
            (None, rest.to_string())
        };

        if let Some(auth) = &authority {
            if auth.is_empty() {
                return Err(FsError::invalid_path(raw, "missing authority"));
            }
        }

        if !path_part.starts_with(PATH_SEPARATOR) {
            return Err(FsError::invalid_path(raw, "path must be absolute"));
        }

        let path = Self::normalize(&path_part);
        let full_path = match (&scheme, &authority) {
            (Some(sch), Some(auth)) => {
                if path == "/" {
                    format!("{}://{}/", sch, auth)
                } else {
                    format!("{}://{}{}", sch, auth, path)
                }
            }
            _ => path.clone(),
        };

        Ok(Self {
            full_path,
            scheme,
            authority,
            path,
        })
    }

    pub fn from_str(s: impl AsRef<str>) -> FsResult<Self> {
        Self::new(s)
    }

    // Collapses duplicate separators and strips the trailing one.
    fn normalize(path: &str) -> String {
        let joined: Vec<&str> = path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        if joined.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", joined.join("/"))
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The rooted path component, without scheme and authority.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Final path segment; empty for the root.
    pub fn name(&self) -> &str {
        self.path.rsplit(PATH_SEPARATOR).next().unwrap_or("")
    }

    /// Path segments in order, excluding scheme and authority.
    pub fn components(&self) -> Vec<&str> {
        self.path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_uri() {
        let path = Path::new("swift2d://out1003.lvm/a/b/c/m.data").unwrap();
        assert_eq!(path.scheme(), Some("swift2d"));
        assert_eq!(path.authority(), Some("out1003.lvm"));
        assert_eq!(path.path(), "/a/b/c/m.data");
        assert_eq!(path.name(), "m.data");
        assert_eq!(path.components(), vec!["a", "b", "c", "m.data"]);
        assert_eq!(path.full_path(), "swift2d://out1003.lvm/a/b/c/m.data");
    }

    #[test]
    fn parse_root() {
        let path = Path::new("swift2d://container").unwrap();
        assert!(path.is_root());
        assert_eq!(path.path(), "/");
        assert_eq!(path.name(), "");
        assert_eq!(path.full_path(), "swift2d://container/");

        let with_slash = Path::new("swift2d://container/").unwrap();
        assert_eq!(path, with_slash);
    }

    #[test]
    fn parse_bare_path() {
        let path = Path::new("/a/b").unwrap();
        assert_eq!(path.scheme(), None);
        assert_eq!(path.authority(), None);
        assert_eq!(path.full_path(), "/a/b");
    }

    #[test]
    fn normalize_slashes() {
        let path = Path::new("swift2d://c//a///b/").unwrap();
        assert_eq!(path.path(), "/a/b");
        assert_eq!(path.full_path(), "swift2d://c/a/b");
    }

    #[test]
    fn invalid_paths() {
        assert!(Path::new("").is_err());
        assert!(Path::new("://c/a").is_err());
        assert!(Path::new("swift2d:///a").is_err());
        assert!(Path::new("relative/path").is_err());
    }

    #[test]
    fn display_matches_full_path() {
        let path = Path::new("swift2d://c/a/b").unwrap();
        assert_eq!(format!("{}", path), "swift2d://c/a/b");
    }
}
