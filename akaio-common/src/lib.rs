//! Common types and utilities for aka-io
//!
//! This crate provides the error type, logging setup, runtime configuration
//! enums and the hex field validator shared by the aka-io crates.

pub mod config;
pub mod error;
pub mod hex_field;
pub mod logging;

pub use config::{OpType, OutputFormat};
pub use error::Error;
pub use hex_field::{decode_hex_array, decode_hex_field, encode_hex_upper};
pub use logging::{init_logging, init_logging_with_filter, log_vector_field, HexDump, LogLevel};
