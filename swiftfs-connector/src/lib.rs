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

//! Hadoop-style filesystem connector for Swift-flavored object stores.
//!
//! Maps hierarchical path operations onto a flat key namespace: directory
//! listings are synthesized from key prefixes, and distributed-job staging
//! paths (the `_temporary` commit-protocol trees) are rewritten to the object
//! key their committed output occupies.

pub mod conf;
pub mod key;
pub mod listing;
pub mod staging;
pub mod store;
pub mod swift;

pub use conf::SwiftConf;
pub use swift::{SwiftFileSystem, SwiftReader, SwiftWriter, SCHEME};

/// Key suffix that turns an object key into a directory-style prefix.
pub const FOLDER_SUFFIX: &str = "/";
