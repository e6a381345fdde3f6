// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the codec implementations.
//!
//! This module contains the concrete implementation of the `TreeCodec` trait,
//! which provides the main interface for expanding and flattening trees.

pub mod dotted_codec;

// Re-export commonly used types
pub use dotted_codec::{DottedCodec, DottedCodecBuilder, DEFAULT_SEPARATOR};
