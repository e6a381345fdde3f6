// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree codec trait definition.
//!
//! This module defines the `TreeCodec` trait, the interface collaborators such as
//! config loaders and flag binders use to move between joined keys and nested trees.

use crate::domain::{CodecError, FlatMap, Leaf, Node, Result, Value};

/// Converts between joined-key paths and nested trees.
///
/// Implementors provide [`expand`](TreeCodec::expand) and
/// [`flatten_node`](TreeCodec::flatten_node); the remaining operations are
/// defined in terms of those two.
///
/// # Examples
///
/// ```rust
/// use dotcfg::domain::{Leaf, TreeCodec};
/// use dotcfg::service::DottedCodec;
///
/// # fn main() -> dotcfg::domain::Result<()> {
/// let codec = DottedCodec::new();
/// let tree = codec.expand("api.server.host", Leaf::from("localhost"), None)?;
/// let tree = codec.expand("api.server.port", Leaf::from(8080), Some(&tree))?;
///
/// let flat = codec.flatten_node(&tree);
/// assert_eq!(flat.get("api.server.host"), Some(&Leaf::from("localhost")));
/// assert_eq!(flat.get("api.server.port"), Some(&Leaf::from(8080)));
/// # Ok(())
/// # }
/// ```
pub trait TreeCodec {
    /// The separator used to split paths and join flattened keys.
    fn separator(&self) -> &str;

    /// Returns a copy of `base` (or an empty node) with `value` stored at `path`.
    ///
    /// Siblings already present in `base` are preserved; a leaf sitting where an
    /// intermediate node is needed gets replaced by a node. An empty-string
    /// `value` stores an empty placeholder node instead of a string. `base` is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    fn expand(&self, path: &str, value: Leaf, base: Option<&Node>) -> Result<Node>;

    /// Flattens `tree` into a map from joined root-to-leaf paths to leaves.
    ///
    /// Empty nodes contribute no entries.
    fn flatten_node(&self, tree: &Node) -> FlatMap;

    /// Flattens a value that must be a node at the top level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tree` is a leaf.
    fn flatten(&self, tree: &Value) -> Result<FlatMap> {
        match tree {
            Value::Node(node) => Ok(self.flatten_node(node)),
            Value::Leaf(leaf) => {
                tracing::debug!("Refusing to flatten {} leaf", leaf.kind());
                Err(CodecError::invalid_argument(format!(
                    "flatten requires a mapping, got {}",
                    leaf.kind()
                )))
            }
        }
    }

    /// Builds a tree by expanding every entry of `flat` in key order.
    ///
    /// For trees with scalar leaves this is the inverse of
    /// [`flatten_node`](TreeCodec::flatten_node).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`expand`](TreeCodec::expand).
    fn expand_all(&self, flat: &FlatMap) -> Result<Node> {
        flat.iter().try_fold(Node::new(), |tree, (path, leaf)| {
            self.expand(path, leaf.clone(), Some(&tree))
        })
    }
}
