// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the tree model (`Node`, `Value`, `Leaf`), parsed key
//! paths, the error type, and the `TreeCodec` trait. It has no knowledge of any
//! file format or configuration source.

pub mod codec;
pub mod errors;
pub mod key_path;
pub mod leaf;
pub mod node;

// Re-export commonly used types
pub use codec::TreeCodec;
pub use errors::{CodecError, Result};
pub use key_path::KeyPath;
pub use leaf::Leaf;
pub use node::{FlatMap, Node, Value};
