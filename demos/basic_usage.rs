// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the dotcfg crate.
//!
//! This example demonstrates:
//! - Building a tree from dotted keys with expand
//! - Merging an override layer into a base tree
//! - Flattening the merged tree back into dotted keys
//! - Reading leaves with type conversions
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use dotcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== dotcfg: Basic Usage ===\n");

    let codec = DottedCodec::new();

    // Example 1: Build a base layer one key at a time
    println!("--- Example 1: Expand ---");
    let mut defaults = Node::new();
    for (path, value) in [
        ("api.server.host", Leaf::from("0.0.0.0")),
        ("api.server.port", Leaf::from(8080)),
        ("api.timeout", Leaf::from(30.5)),
        ("log.level", Leaf::from("info")),
        ("cache", Leaf::from("")),
    ] {
        defaults = codec.expand(path, value, Some(&defaults))?;
    }
    println!("Tree depth: {}", defaults.depth());

    // Example 2: Apply overrides, e.g. collected from the command line
    println!("\n--- Example 2: Merge Overrides ---");
    let snapshot = defaults.clone();
    let merged = codec.expand("api.server.host", Leaf::from("localhost"), Some(&defaults))?;
    let merged = codec.expand("log.json", Leaf::from(true), Some(&merged))?;
    println!("Defaults unchanged: {}", defaults == snapshot);
    println!("Overrides applied: {}", merged != defaults);

    // Example 3: Flatten for display or storage in a key-value system
    println!("\n--- Example 3: Flatten ---");
    let flat = codec.flatten_node(&merged);
    for (key, value) in &flat {
        println!("  {} = {}", key, value);
    }

    // Example 4: Typed reads
    println!("\n--- Example 4: Type Conversions ---");
    if let Some(port) = flat.get("api.server.port") {
        println!("✓ port as u64: {}", port.as_u64("api.server.port")?);
    }
    if let Some(timeout) = flat.get("api.timeout") {
        println!("✓ timeout as f64: {}", timeout.as_f64("api.timeout")?);
    }

    // Example 5: Environment-style separator
    println!("\n--- Example 5: Custom Separator ---");
    let env_codec = DottedCodec::builder().separator("__").build()?;
    let tree = env_codec.expand_all(&env_codec.flatten_node(&merged))?;
    println!(
        "Round trip through '__' keys preserved leaves: {}",
        codec.flatten_node(&tree) == flat
    );

    Ok(())
}
