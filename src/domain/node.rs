// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested trees.
//!
//! A [`Node`] maps string keys to [`Value`]s, and a `Value` is either another
//! `Node` or a [`Leaf`]. Trees own all of their data, so cloning a tree is a
//! deep copy and no two trees ever share a mutable leaf.

use crate::domain::key_path::KeyPath;
use crate::domain::leaf::Leaf;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A flat mapping from joined paths to leaves, as produced by flatten.
pub type FlatMap = BTreeMap<String, Leaf>;

/// A value held by a [`Node`]: either a nested node or a terminal leaf.
///
/// Deserializes from any self-describing format: mappings become nodes and
/// scalars become leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A nested mapping
    Node(Node),
    /// A terminal scalar
    Leaf(Leaf),
}

impl Value {
    /// Returns `true` if this value is a nested node.
    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// Returns the nested node, if any.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            Value::Leaf(_) => None,
        }
    }

    /// Returns the leaf, if any.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Value::Leaf(leaf) => Some(leaf),
            Value::Node(_) => None,
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Leaf> for Value {
    fn from(leaf: Leaf) -> Self {
        Value::Leaf(leaf)
    }
}

/// A mapping from unique string keys to values.
///
/// Keys are kept in sorted order, so iteration and serialization are
/// deterministic.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::{KeyPath, Leaf, Node, Value};
///
/// let mut server = Node::new();
/// server.insert("host", Leaf::from("localhost"));
///
/// let mut api = Node::new();
/// api.insert("server", server);
///
/// let path = KeyPath::parse("server.host", ".").unwrap();
/// assert_eq!(
///     api.get_path(&path),
///     Some(&Value::Leaf(Leaf::from("localhost")))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(BTreeMap<String, Value>);

impl Node {
    /// Creates an empty node.
    pub fn new() -> Self {
        Node(BTreeMap::new())
    }

    /// Returns the value stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Walks `path` from this node and returns the value at its end.
    pub fn get_path(&self, path: &KeyPath) -> Option<&Value> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_node()?;
        }
        current.get(last)
    }

    /// Inserts `value` under `key`, returning the previous value. Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes and returns the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over direct children in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Iterates over the direct child keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns the number of levels below this node. An empty node or one that
    /// holds only leaves has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .0
            .values()
            .filter_map(Value::as_node)
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }
}

impl From<BTreeMap<String, Value>> for Node {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Node(map)
    }
}

impl From<Node> for BTreeMap<String, Value> {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Node(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Node {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let server: Node = [("host", Leaf::from("localhost")), ("port", Leaf::from(8080))]
            .into_iter()
            .collect();
        let mut api = Node::new();
        api.insert("server", server);
        let mut root = Node::new();
        root.insert("api", api);
        root
    }

    #[test]
    fn test_new_is_empty() {
        let node = Node::new();
        assert!(node.is_empty());
        assert_eq!(node.len(), 0);
        assert_eq!(node, Node::default());
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut node = Node::new();
        assert!(node.insert("a", Leaf::from(1)).is_none());
        let previous = node.insert("a", Leaf::from(2));
        assert_eq!(previous, Some(Value::Leaf(Leaf::from(1))));
        assert_eq!(node.get("a"), Some(&Value::Leaf(Leaf::from(2))));
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut node = sample();
        assert!(node.contains_key("api"));
        assert!(node.remove("api").is_some());
        assert!(!node.contains_key("api"));
    }

    #[test]
    fn test_get_path() {
        let root = sample();
        let host = KeyPath::parse("api.server.host", ".").unwrap();
        assert_eq!(
            root.get_path(&host).and_then(Value::as_leaf),
            Some(&Leaf::from("localhost"))
        );

        let server = KeyPath::parse("api.server", ".").unwrap();
        assert!(root.get_path(&server).is_some_and(Value::is_node));
    }

    #[test]
    fn test_get_path_through_leaf() {
        let root = sample();
        let path = KeyPath::parse("api.server.host.name", ".").unwrap();
        assert!(root.get_path(&path).is_none());
    }

    #[test]
    fn test_keys_are_ordered() {
        let node: Node = [("b", Leaf::from(2)), ("a", Leaf::from(1)), ("c", Leaf::from(3))]
            .into_iter()
            .collect();
        let keys: Vec<&String> = node.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Node::new().depth(), 1);
        assert_eq!(sample().depth(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        if let Some(Value::Node(api)) = copy.0.get_mut("api") {
            api.insert("extra", Leaf::from(true));
        }
        assert_ne!(original, copy);
        assert_eq!(original, sample());
    }

    #[test]
    fn test_value_accessors() {
        let leaf = Value::from(Leaf::from(1));
        assert!(!leaf.is_node());
        assert!(leaf.as_node().is_none());
        assert_eq!(leaf.as_leaf(), Some(&Leaf::from(1)));

        let node = Value::from(Node::new());
        assert!(node.is_node());
        assert!(node.as_leaf().is_none());
    }
}
