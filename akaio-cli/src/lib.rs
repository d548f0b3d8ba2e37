//! aka-io pipeline
//!
//! Validates the five hex inputs, runs Milenage through `akaio-crypto`,
//! assembles AUTN and renders the report. The `aka-io` binary is a thin
//! wrapper around [`vector::compute_vector`] and [`output::render`].

pub mod output;
pub mod vector;

pub use output::{render, render_text, VectorReport};
pub use vector::{build_autn, compute_vector, AuthVector, VectorInput};
