// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion between dotted keys and nested configuration trees.
//!
//! Configuration layers usually arrive in one of two shapes: flat keys such as
//! `api.server.port` (environment variables, command-line flags, key-value
//! stores) or nested mappings (YAML, TOML, JSON documents). This crate converts
//! between the two so layers can be merged in whichever shape is convenient.
//!
//! # Architecture
//!
//! - **Domain Layer**: The tree model (`Node`, `Value`, `Leaf`), `KeyPath`,
//!   `CodecError`, and the `TreeCodec` trait
//! - **Service**: `DottedCodec`, the configurable default codec
//!
//! Reading and writing files, environment variables, or any serialization
//! format is left to the caller. `Node`, `Value` and `Leaf` implement serde's
//! `Serialize` and `Deserialize`, so any serde format can produce or consume
//! trees directly.
//!
//! # Operations
//!
//! - **Expand**: insert a value at a joined path, merging into an existing tree
//! - **Flatten**: turn a tree into a map from joined root-to-leaf paths to leaves
//!
//! # Quick Start
//!
//! ```rust
//! use dotcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let tree = dotcfg::expand("api.server.host", ".", "localhost", None)?;
//! let tree = dotcfg::expand("api.server.port", ".", 8080, Some(&tree))?;
//!
//! let flat = dotcfg::flatten_node(&tree);
//! assert_eq!(flat.get("api.server.host"), Some(&Leaf::from("localhost")));
//! assert_eq!(flat.get("api.server.port"), Some(&Leaf::from(8080)));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod service;

use domain::{FlatMap, Leaf, Node, Result, TreeCodec, Value};
use service::DottedCodec;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        CodecError, FlatMap, KeyPath, Leaf, Node, Result, TreeCodec, Value,
    };
    pub use crate::service::{DottedCodec, DottedCodecBuilder};
}

/// Returns a copy of `base` (or a new tree) with `value` stored at `path`.
///
/// `path` is split on `separator`. Sibling keys already in `base` are kept, and
/// `base` itself is left untouched. Passing an empty string as `value` stores
/// an empty placeholder node rather than an empty string.
///
/// # Errors
///
/// Returns `InvalidArgument` if `path` or `separator` is empty. The path
/// depth is not limited; use [`service::DottedCodecBuilder::max_depth`] to
/// cap it.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let tree = dotcfg::expand("a.b", ".", "", None)?;
/// let b = tree.get("a").and_then(Value::as_node).and_then(|a| a.get("b"));
/// assert_eq!(b, Some(&Value::Node(Node::new())));
/// # Ok(())
/// # }
/// ```
pub fn expand(
    path: &str,
    separator: &str,
    value: impl Into<Leaf>,
    base: Option<&Node>,
) -> Result<Node> {
    let codec = DottedCodec::builder().separator(separator).build()?;
    codec.expand(path, value.into(), base)
}

/// Flattens `tree` into a map keyed by dot-joined root-to-leaf paths.
///
/// # Errors
///
/// Returns `InvalidArgument` if `tree` is a leaf rather than a mapping.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
///
/// let err = dotcfg::flatten(&Value::Leaf(Leaf::from("not-a-map"))).unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
pub fn flatten(tree: &Value) -> Result<FlatMap> {
    DottedCodec::new().flatten(tree)
}

/// Flattens a node into a map keyed by dot-joined root-to-leaf paths.
pub fn flatten_node(tree: &Node) -> FlatMap {
    DottedCodec::new().flatten_node(tree)
}
