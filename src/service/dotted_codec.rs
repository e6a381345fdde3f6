// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default tree codec implementation.
//!
//! This module provides `DottedCodec`, the default implementation of the
//! `TreeCodec` trait, along with the builder used to configure it.

use crate::domain::{CodecError, FlatMap, KeyPath, Leaf, Node, Result, TreeCodec, Value};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default implementation of the tree codec.
///
/// The codec holds only immutable settings, so a single instance can be shared
/// across threads and reused for any number of calls.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
/// use dotcfg::service::DottedCodec;
///
/// # fn main() -> Result<()> {
/// // Default codec splits and joins on "."
/// let codec = DottedCodec::new();
/// let tree = codec.expand("api.server.host", Leaf::from("localhost"), None)?;
/// assert_eq!(codec.flatten_node(&tree).len(), 1);
///
/// // Environment-style keys
/// let codec = DottedCodec::builder().separator("__").build()?;
/// let tree = codec.expand("api__server__port", Leaf::from(8080), None)?;
/// assert!(codec.flatten_node(&tree).contains_key("api__server__port"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedCodec {
    /// Separator used to split paths and join flattened keys
    separator: String,
    /// Optional cap on the number of segments in an expanded path
    max_depth: Option<usize>,
}

impl DottedCodec {
    /// Creates a codec with the default separator and no depth limit.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: None,
        }
    }

    /// Creates a new codec builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::service::DottedCodec;
    ///
    /// # fn main() -> dotcfg::domain::Result<()> {
    /// let codec = DottedCodec::builder()
    ///     .separator("/")
    ///     .max_depth(8)
    ///     .build()?;
    /// assert_eq!(codec.max_depth(), Some(8));
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> DottedCodecBuilder {
        DottedCodecBuilder::new()
    }

    /// Returns the maximum number of segments accepted by expand, if one is set.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Splits `path` and checks it against the depth limit, if any.
    fn parse_path(&self, path: &str) -> Result<KeyPath> {
        let key_path = KeyPath::parse(path, &self.separator).inspect_err(|e| {
            tracing::debug!("Rejected path {:?}: {}", path, e);
        })?;

        if let Some(max_depth) = self.max_depth {
            if key_path.len() > max_depth {
                tracing::debug!(
                    "Rejected path with {} segments (max {})",
                    key_path.len(),
                    max_depth
                );
                return Err(CodecError::invalid_argument(format!(
                    "path has {} segments (max {})",
                    key_path.len(),
                    max_depth
                )));
            }
        }

        Ok(key_path)
    }
}

impl Default for DottedCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeCodec for DottedCodec {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn expand(&self, path: &str, value: Leaf, base: Option<&Node>) -> Result<Node> {
        let key_path = self.parse_path(path)?;
        tracing::trace!("Expanding '{}' ({} segments)", path, key_path.len());

        let mut result = base.cloned().unwrap_or_default();
        insert_segments(&mut result, key_path.segments(), value);
        Ok(result)
    }

    fn flatten_node(&self, tree: &Node) -> FlatMap {
        let mut flat = FlatMap::new();
        let mut prefix = String::new();
        flatten_into(tree, &self.separator, &mut prefix, &mut flat);

        tracing::debug!(
            "Flattened tree into {} entries (separator={:?})",
            flat.len(),
            self.separator
        );
        flat
    }
}

/// Stores `value` at `segments` below `node`, one segment per call.
///
/// `segments` is never empty; `KeyPath` guarantees at least one segment.
/// `key` is the last level when the remaining segments rejoin to an empty
/// string, so a single trailing separator does not open another level.
fn insert_segments(node: &mut Node, segments: &[String], value: Leaf) {
    let Some((key, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() || (rest.len() == 1 && rest[0].is_empty()) {
        if value.is_empty_string() {
            node.insert(key.as_str(), Node::new());
        } else {
            node.insert(key.as_str(), value);
        }
        return;
    }

    let mut child = match node.remove(key) {
        Some(Value::Node(existing)) => existing,
        _ => Node::new(),
    };
    insert_segments(&mut child, rest, value);
    node.insert(key.as_str(), child);
}

/// Depth-first walk that emits one entry per leaf.
///
/// `prefix` holds the joined path of `node` and is restored before returning.
fn flatten_into(node: &Node, separator: &str, prefix: &mut String, flat: &mut FlatMap) {
    for (key, value) in node {
        let restore_len = prefix.len();
        if restore_len > 0 {
            prefix.push_str(separator);
        }
        prefix.push_str(key);

        match value {
            Value::Node(child) => flatten_into(child, separator, prefix, flat),
            Value::Leaf(leaf) => {
                flat.insert(prefix.clone(), leaf.clone());
            }
        }

        prefix.truncate(restore_len);
    }
}

/// Builder for constructing a `DottedCodec`.
///
/// # Examples
///
/// ```rust
/// use dotcfg::service::DottedCodecBuilder;
/// use dotcfg::domain::TreeCodec;
///
/// # fn main() -> dotcfg::domain::Result<()> {
/// let codec = DottedCodecBuilder::new().separator("::").build()?;
/// assert_eq!(codec.separator(), "::");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DottedCodecBuilder {
    separator: String,
    max_depth: Option<usize>,
}

impl DottedCodecBuilder {
    /// Creates a new builder with the default settings.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: None,
        }
    }

    /// Sets the separator used to split paths and join flattened keys.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Caps the number of segments accepted by expand. Unlimited by default.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Builds the codec.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the separator is empty or `max_depth` is zero.
    pub fn build(self) -> Result<DottedCodec> {
        if self.separator.is_empty() {
            return Err(CodecError::invalid_argument("separator must not be empty"));
        }
        if self.max_depth == Some(0) {
            return Err(CodecError::invalid_argument("max_depth must be at least 1"));
        }

        Ok(DottedCodec {
            separator: self.separator,
            max_depth: self.max_depth,
        })
    }
}

impl Default for DottedCodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
