// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use dotcfg::domain::Node;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber that writes through the test harness.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Deserializes a YAML literal into a tree.
///
/// Panics on malformed fixtures; test inputs are expected to be valid.
#[allow(dead_code)]
pub fn tree_from_yaml(yaml: &str) -> Node {
    serde_yaml::from_str(yaml).expect("fixture should be a valid YAML mapping")
}
