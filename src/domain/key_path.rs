// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed key paths.
//!
//! This module provides the `KeyPath` type, the ordered list of segments obtained
//! by splitting a joined key such as `"api.server.host"` on a separator.

use crate::domain::errors::{CodecError, Result};
use std::fmt;

/// An ordered, non-empty sequence of key segments.
///
/// Segments are kept verbatim: splitting `"a..b"` on `"."` yields the three
/// segments `a`, `""` and `b`, and a trailing separator yields a trailing empty
/// segment. Expand stores a value at `a` for `"a."`, since the trailing empty
/// segment does not open another level.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::KeyPath;
///
/// let path = KeyPath::parse("database.connection.host", ".").unwrap();
/// assert_eq!(path.segments(), &["database", "connection", "host"]);
/// assert_eq!(path.join("/"), "database/connection/host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Splits `path` on `separator`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty or `separator` is empty.
    pub fn parse(path: &str, separator: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(CodecError::invalid_argument("path must not be empty"));
        }
        if separator.is_empty() {
            return Err(CodecError::invalid_argument("separator must not be empty"));
        }
        Ok(KeyPath(path.split(separator).map(str::to_string).collect()))
    }

    /// Builds a path from already-split segments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `segments` is empty.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(CodecError::invalid_argument(
                "path must have at least one segment",
            ));
        }
        Ok(KeyPath(segments))
    }

    /// Returns the segments in root-to-leaf order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a `KeyPath` has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the segments back together with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl AsRef<[String]> for KeyPath {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("."))
    }
}
