//! Test utility functions for integration tests

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for tests
///
/// Uses RUST_LOG if set, otherwise "debug" so pipeline logs show up in
/// failing test output.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Normalise a lowercase fixture string to the report's uppercase hex.
pub fn hex_upper(lower: &str) -> String {
    lower.to_uppercase()
}

/// Decode a fixture hex string into bytes.
pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap_or_else(|e| panic!("bad fixture hex {hex_str}: {e}"))
}
